use std::collections::HashSet;

use futures::future::try_join_all;
use tokio_util::sync::CancellationToken;

use crate::{
    cancel::guarded, rank, Aggregator, ChannelId, Directory, Error, LiveChannel, Result,
    MAX_BATCH_SIZE,
};

impl<D: Directory> Aggregator<D> {
    /// Which of `ids` are live right now, ranked by viewer count.
    ///
    /// The ids are deduplicated and split into batches of at most
    /// [`MAX_BATCH_SIZE`]. Batches are looked up concurrently, if any of them
    /// fails the whole call fails.
    pub async fn resolve_live<I>(&self, ids: I, token: &CancellationToken) -> Result<Vec<LiveChannel>>
    where
        I: IntoIterator<Item = ChannelId>,
    {
        let ids = unique(ids);
        if ids.is_empty() {
            if token.is_cancelled() {
                return Err(Error::Cancelled);
            }
            return Ok(Vec::new());
        }

        let batches = ids.chunks(MAX_BATCH_SIZE);
        log::debug!("looking up {} channels in {} batches", ids.len(), batches.len());

        let lookups = batches.enumerate().map(|(i, batch)| {
            log::trace!("dispatching liveness batch {i} ({} ids)", batch.len());
            guarded(token, self.directory.get_live_sessions(batch))
        });
        let sessions = try_join_all(lookups).await?;

        let wanted = ids.iter().collect::<HashSet<_>>();
        let mut seen = HashSet::new();
        let live = sessions
            .into_iter()
            .flatten()
            .filter(|live| {
                let known = wanted.contains(live.id());
                if !known {
                    log::debug!("ignoring {} which was never asked for", live.id());
                }
                known
            })
            .filter(|live| seen.insert(live.id().clone()))
            .collect();

        Ok(rank(live))
    }
}

/// Keeps the first occurrence of every id
pub(crate) fn unique(ids: impl IntoIterator<Item = ChannelId>) -> Vec<ChannelId> {
    let mut seen = HashSet::new();
    ids.into_iter()
        .filter(|id| seen.insert(id.clone()))
        .collect()
}
