use tokio_util::sync::CancellationToken;

use crate::{cancel::guarded, Aggregator, Channel, ChannelId, Directory, Error, Missing, Result};

impl<D: Directory> Aggregator<D> {
    /// Finds the channel whose display name is exactly `name`, ignoring case.
    ///
    /// Near matches from the search don't count.
    pub async fn find_channel_by_name(&self, name: &str, token: &CancellationToken) -> Result<Channel> {
        let name = name.trim();
        let not_found = || Error::NotFound(Missing::ChannelName(name.to_string()));
        if name.is_empty() {
            return Err(not_found());
        }

        let needle = name.to_lowercase();
        let found = guarded(token, self.directory.search_channels(name))
            .await?
            .into_iter()
            .find(|channel| channel.name.to_lowercase() == needle);

        found.ok_or_else(|| {
            log::debug!("no exact match for '{name}'");
            not_found()
        })
    }

    pub async fn channel_by_id(&self, id: &ChannelId, token: &CancellationToken) -> Result<Channel> {
        guarded(token, self.directory.get_channel_info(id))
            .await?
            .ok_or_else(|| Error::NotFound(Missing::Channel(id.clone())))
    }
}
