use crate::{Channel, ChannelId, Cursor, FollowPage, LiveChannel, Result, Roster, TeamId, TeamMembership};

/// The remote channel directory the [`Aggregator`](crate::Aggregator) reads from.
///
/// Entities the service doesn't know about are `Ok(None)` here, errors are
/// reserved for failed or malformed calls. Implementations must be safe to
/// share between concurrent aggregator calls.
#[async_trait::async_trait]
pub trait Directory: Send + Sync {
    /// Channels whose names resemble `query`, in the order the service ranks them
    async fn search_channels(&self, query: &str) -> Result<Vec<Channel>>;

    async fn get_channel_info(&self, id: &ChannelId) -> Result<Option<Channel>>;

    /// One page of the channels `from` follows, starting at `cursor`
    async fn get_follows(
        &self,
        from: &ChannelId,
        cursor: Option<&Cursor>,
        page_size: usize,
    ) -> Result<FollowPage>;

    /// The channels in `ids` that are live. Offline channels are simply absent.
    ///
    /// `ids` never holds more than [`MAX_BATCH_SIZE`](crate::MAX_BATCH_SIZE) entries.
    async fn get_live_sessions(&self, ids: &[ChannelId]) -> Result<Vec<LiveChannel>>;

    async fn get_team_memberships(&self, broadcaster: &ChannelId) -> Result<Vec<TeamMembership>>;

    async fn get_team_roster(&self, team: &TeamId) -> Result<Option<Roster>>;
}
