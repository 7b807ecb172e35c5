use time::OffsetDateTime;

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad(&self.0)
            }
        }
    };
}

opaque_id! {
    /// A channel's id, unique per remote service
    ChannelId
}

opaque_id! {
    TeamId
}

opaque_id! {
    /// Pagination token handed out by the remote service. Never inspected.
    Cursor
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Channel {
    pub id: ChannelId,
    pub name: String,
}

/// A snapshot of a channel that was live when it was fetched
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiveChannel {
    pub channel: Channel,
    pub game: String,
    pub viewers: u64,
    pub started_at: OffsetDateTime,
}

impl LiveChannel {
    pub fn id(&self) -> &ChannelId {
        &self.channel.id
    }

    pub fn name(&self) -> &str {
        &self.channel.name
    }

    /// How long the channel has been live as of `now`. Clock skew never yields a negative duration.
    pub fn uptime(&self, now: OffsetDateTime) -> time::Duration {
        (now - self.started_at).max(time::Duration::ZERO)
    }
}

/// A team as listed for one of its members. Carries no roster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamMembership {
    pub id: TeamId,
    pub name: String,
}

/// Everyone that belongs to a team, regardless of whether they are live
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    pub id: TeamId,
    pub name: String,
    pub members: Vec<ChannelId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Empty until the roster has been resolved
    pub members: Vec<ChannelId>,
    /// Members that are live, ranked. Empty until resolved.
    pub live: Vec<LiveChannel>,
}

impl From<TeamMembership> for Team {
    fn from(TeamMembership { id, name }: TeamMembership) -> Self {
        Self {
            id,
            name,
            members: Vec::new(),
            live: Vec::new(),
        }
    }
}

/// One page of the channels a broadcaster follows
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FollowPage {
    pub targets: Vec<ChannelId>,
    /// `None` on the last page
    pub cursor: Option<Cursor>,
    /// Total follows as reported by the service
    pub total: usize,
}

/// Orders by descending viewer count. Ties keep their relative order.
pub fn rank(mut live: Vec<LiveChannel>) -> Vec<LiveChannel> {
    live.sort_by(|left, right| right.viewers.cmp(&left.viewers));
    live
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::live;

    #[test]
    fn rank_is_descending_and_stable() {
        let list = vec![live(1, 10), live(2, 300), live(3, 10), live(4, 150)];
        let ranked = rank(list);
        let ids = ranked.iter().map(|c| c.id().as_str()).collect::<Vec<_>>();
        assert_eq!(ids, ["2", "4", "1", "3"]);
        assert!(ranked.windows(2).all(|w| w[0].viewers >= w[1].viewers));
    }

    #[test]
    fn uptime_never_negative() {
        let channel = live(1, 10);
        let before = channel.started_at - time::Duration::minutes(5);
        assert_eq!(channel.uptime(before), time::Duration::ZERO);

        let after = channel.started_at + time::Duration::minutes(5);
        assert_eq!(channel.uptime(after), time::Duration::minutes(5));
    }
}
