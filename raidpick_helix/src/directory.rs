use raidpick_core::{
    Channel, ChannelId, Cursor, Directory, Error, FollowPage, LiveChannel, Result, Roster, TeamId,
    TeamMembership,
};

use crate::{data, HelixClient};

/// The most results a Helix list endpoint returns in one response
const MAX_FIRST: &str = "100";

#[async_trait::async_trait]
impl Directory for HelixClient {
    async fn search_channels(&self, query: &str) -> Result<Vec<Channel>> {
        let data = self
            .get_response::<data::SearchChannel>("search/channels", &[("query", query), ("first", MAX_FIRST)])
            .await?;
        Ok(data
            .map(|data| data.data.into_iter().map(Channel::from).collect())
            .unwrap_or_default())
    }

    async fn get_channel_info(&self, id: &ChannelId) -> Result<Option<Channel>> {
        let data = self
            .get_response::<data::ChannelInformation>("channels", &[("broadcaster_id", id.as_str())])
            .await?;
        Ok(data.and_then(|data| {
            data.data
                .into_iter()
                .find(|info| info.broadcaster_id == id.as_str())
                .map(Channel::from)
        }))
    }

    async fn get_follows(
        &self,
        from: &ChannelId,
        cursor: Option<&Cursor>,
        page_size: usize,
    ) -> Result<FollowPage> {
        let first = page_size.to_string();
        let mut query = vec![("user_id", from.as_str()), ("first", first.as_str())];
        if let Some(cursor) = cursor {
            query.push(("after", cursor.as_str()));
        }

        let data = self
            .get_response::<data::FollowedChannel>("channels/followed", &query)
            .await?
            .ok_or_else(|| Error::protocol(format!("no follow list for {from}")))?;

        let total = data
            .total
            .ok_or_else(|| Error::protocol("follow list is missing its total"))?;

        Ok(FollowPage {
            targets: data
                .data
                .into_iter()
                .map(|follow| ChannelId::from(follow.broadcaster_id))
                .collect(),
            cursor: data.pagination.cursor.map(Cursor::from),
            total,
        })
    }

    async fn get_live_sessions(&self, ids: &[ChannelId]) -> Result<Vec<LiveChannel>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = std::iter::repeat("user_id")
            .zip(ids.iter().map(ChannelId::as_str))
            .chain([("first", MAX_FIRST)])
            .collect::<Vec<_>>();

        let data = self
            .get_response::<data::Stream>("streams", &query)
            .await?
            .ok_or_else(|| Error::protocol("streams endpoint was not found"))?;

        Ok(data
            .data
            .into_iter()
            .filter(data::Stream::is_live)
            .map(LiveChannel::from)
            .collect())
    }

    async fn get_team_memberships(&self, broadcaster: &ChannelId) -> Result<Vec<TeamMembership>> {
        let data = self
            .get_response::<data::ChannelTeam>("teams/channel", &[("broadcaster_id", broadcaster.as_str())])
            .await?;
        Ok(data
            .map(|data| data.data.into_iter().map(TeamMembership::from).collect())
            .unwrap_or_default())
    }

    async fn get_team_roster(&self, team: &TeamId) -> Result<Option<Roster>> {
        let data = self
            .get_response::<data::Team>("teams", &[("id", team.as_str())])
            .await?;

        let team = data.and_then(|data| data.data.into_iter().find(|t| t.id == team.as_str()));
        Ok(team.map(|team| Roster {
            id: TeamId::from(team.id),
            name: team.team_display_name,
            members: team
                .users
                .into_iter()
                .map(|user| ChannelId::from(user.user_id))
                .collect(),
        }))
    }
}
