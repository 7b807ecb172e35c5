//! Wire types for the handful of Helix endpoints in use

use raidpick_core::{Channel, ChannelId, LiveChannel, TeamId, TeamMembership};

#[derive(Debug, ::serde::Deserialize)]
#[serde(bound(deserialize = "T: ::serde::Deserialize<'de>"))]
pub struct Data<T> {
    #[serde(default, deserialize_with = "crate::serde::null_as_default")]
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Pagination,
    #[serde(default)]
    pub total: Option<usize>,
}

#[derive(Debug, Default, ::serde::Deserialize)]
pub struct Pagination {
    #[serde(default, deserialize_with = "crate::serde::empty_as_none")]
    pub cursor: Option<String>,
}

/// The body Helix sends along with a non-success status
#[derive(Debug, ::serde::Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Debug, ::serde::Deserialize)]
pub struct SearchChannel {
    pub id: String,
    pub display_name: String,
}

#[derive(Clone, Debug, ::serde::Deserialize)]
pub struct ChannelInformation {
    pub broadcaster_id: String,
    pub broadcaster_name: String,
}

#[derive(Clone, Debug, ::serde::Deserialize)]
pub struct FollowedChannel {
    pub broadcaster_id: String,
}

#[derive(Clone, Debug, ::serde::Deserialize)]
pub struct Stream {
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub game_name: String,
    /// `live`, or empty when the stream is in an error state
    #[serde(rename = "type", default)]
    pub kind: String,
    pub viewer_count: u64,

    #[serde(deserialize_with = "crate::serde::rfc3339")]
    pub started_at: time::OffsetDateTime,
}

impl Stream {
    pub fn is_live(&self) -> bool {
        self.kind == "live"
    }
}

#[derive(Clone, Debug, ::serde::Deserialize)]
pub struct ChannelTeam {
    pub id: String,
    pub team_display_name: String,
}

#[derive(Clone, Debug, ::serde::Deserialize)]
pub struct Team {
    pub id: String,
    pub team_display_name: String,
    #[serde(default, deserialize_with = "crate::serde::null_as_default")]
    pub users: Vec<TeamUser>,
}

#[derive(Clone, Debug, ::serde::Deserialize)]
pub struct TeamUser {
    pub user_id: String,
}

#[derive(Debug, ::serde::Deserialize)]
pub struct Token {
    pub access_token: String,
}

impl From<SearchChannel> for Channel {
    fn from(SearchChannel { id, display_name }: SearchChannel) -> Self {
        Self {
            id: ChannelId::from(id),
            name: display_name,
        }
    }
}

impl From<ChannelInformation> for Channel {
    fn from(info: ChannelInformation) -> Self {
        Self {
            id: ChannelId::from(info.broadcaster_id),
            name: info.broadcaster_name,
        }
    }
}

impl From<Stream> for LiveChannel {
    fn from(stream: Stream) -> Self {
        Self {
            channel: Channel {
                id: ChannelId::from(stream.user_id),
                name: stream.user_name,
            },
            game: stream.game_name,
            viewers: stream.viewer_count,
            started_at: stream.started_at,
        }
    }
}

impl From<ChannelTeam> for TeamMembership {
    fn from(team: ChannelTeam) -> Self {
        Self {
            id: TeamId::from(team.id),
            name: team.team_display_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream() {
        let json = r#"{
            "data": [{
                "id": "40952121085",
                "user_id": "101051819",
                "user_login": "afro",
                "user_name": "Afro",
                "game_id": "32982",
                "game_name": "Grand Theft Auto V",
                "type": "live",
                "title": "Jacob: Digital Den Laptops & Routers",
                "viewer_count": 1490,
                "started_at": "2021-03-10T03:18:11Z",
                "language": "en",
                "thumbnail_url": "",
                "tag_ids": [],
                "is_mature": false
            }],
            "pagination": {}
        }"#;

        let data: Data<Stream> = serde_json::from_str(json).unwrap();
        assert_eq!(data.pagination.cursor, None);
        let stream = data.data.into_iter().next().unwrap();
        assert!(stream.is_live());

        let live = LiveChannel::from(stream);
        assert_eq!(live.id().as_str(), "101051819");
        assert_eq!(live.name(), "Afro");
        assert_eq!(live.viewers, 1490);
        assert_eq!(live.started_at.unix_timestamp(), 1615346291);
    }

    #[test]
    fn negative_viewers_are_rejected() {
        let json = r#"{"data": [{
            "user_id": "1", "user_name": "a", "game_name": "", "type": "live",
            "viewer_count": -1, "started_at": "2021-03-10T03:18:11Z"
        }]}"#;
        assert!(serde_json::from_str::<Data<Stream>>(json).is_err());
    }

    #[test]
    fn null_teams() {
        let data: Data<ChannelTeam> = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(data.data.is_empty());
    }

    #[test]
    fn follows_page() {
        let json = r#"{
            "total": 8,
            "data": [
                {"broadcaster_id": "11111", "broadcaster_login": "userloginname", "broadcaster_name": "UserDisplayName", "followed_at": "2022-05-24T22:22:08Z"}
            ],
            "pagination": {"cursor": "eyJiIjpudWxsLCJhIjp7Ik9mZnNldCI6NX19"}
        }"#;
        let data: Data<FollowedChannel> = serde_json::from_str(json).unwrap();
        assert_eq!(data.total, Some(8));
        assert_eq!(data.data[0].broadcaster_id, "11111");
        assert_eq!(
            data.pagination.cursor.as_deref(),
            Some("eyJiIjpudWxsLCJhIjp7Ik9mZnNldCI6NX19")
        );

        let data: Data<FollowedChannel> =
            serde_json::from_str(r#"{"total": 0, "data": [], "pagination": {"cursor": ""}}"#).unwrap();
        assert_eq!(data.pagination.cursor, None);
    }
}
