use std::collections::HashSet;

use tokio_util::sync::CancellationToken;

use crate::{cancel::guarded, Aggregator, ChannelId, Cursor, Directory, LiveChannel, Result, FOLLOW_PAGE_SIZE};

impl<D: Directory> Aggregator<D> {
    /// The channels `broadcaster` follows that are live right now, ranked by viewer count
    pub async fn followed_live_channels(
        &self,
        broadcaster: &ChannelId,
        token: &CancellationToken,
    ) -> Result<Vec<LiveChannel>> {
        let follows = self.follows_of(broadcaster, token).await?;
        self.resolve_live(follows, token).await
    }

    /// Every channel `broadcaster` follows, without duplicates.
    ///
    /// Pages are fetched one after another since each needs the previous
    /// cursor. The total reported by the first page bounds the walk: it stops
    /// once that many follows were seen, when the cursor runs out, or when the
    /// service stops making progress.
    pub async fn follows_of(
        &self,
        broadcaster: &ChannelId,
        token: &CancellationToken,
    ) -> Result<Vec<ChannelId>> {
        let mut seen = HashSet::new();
        let mut follows = Vec::new();

        let mut cursor: Option<Cursor> = None;
        let mut total = None;
        let mut enumerated = 0;

        loop {
            let page = guarded(
                token,
                self.directory
                    .get_follows(broadcaster, cursor.as_ref(), FOLLOW_PAGE_SIZE),
            )
            .await?;

            // the list can change while we walk it, only the first count is trusted
            let total = *total.get_or_insert(page.total);
            enumerated += page.targets.len();

            log::trace!(
                "got {} follows for {broadcaster} ({enumerated}/{total})",
                page.targets.len()
            );

            let progressed = !page.targets.is_empty();
            follows.extend(
                page.targets
                    .into_iter()
                    .filter(|id| seen.insert(id.clone())),
            );

            if enumerated >= total {
                break;
            }

            if !progressed {
                log::warn!("follow list for {broadcaster} stopped at {enumerated}/{total}, got an empty page");
                break;
            }

            match page.cursor {
                Some(next) if cursor.as_ref() == Some(&next) => {
                    log::warn!("follow list for {broadcaster} stopped at {enumerated}/{total}, cursor did not advance");
                    break;
                }
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        log::debug!("{broadcaster} follows {} channels", follows.len());
        Ok(follows)
    }
}
