use std::{
    collections::HashMap,
    ops::Range,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use time::OffsetDateTime;

use crate::{
    Channel, ChannelId, Cursor, Directory, Error, FollowPage, LiveChannel, Result, Roster, TeamId,
    TeamMembership,
};

pub fn id(n: usize) -> ChannelId {
    ChannelId::new(n.to_string())
}

pub fn ids(range: Range<usize>) -> Vec<ChannelId> {
    range.map(id).collect()
}

pub fn channel(n: usize, name: &str) -> Channel {
    Channel {
        id: id(n),
        name: name.to_string(),
    }
}

pub fn live(n: usize, viewers: u64) -> LiveChannel {
    LiveChannel {
        channel: channel(n, &format!("channel_{n}")),
        game: String::from("Just Chatting"),
        viewers,
        started_at: OffsetDateTime::UNIX_EPOCH + time::Duration::hours(n as i64),
    }
}

#[derive(Clone, Debug, Default)]
pub struct Calls {
    /// the cursor each page was requested with, and how many follows it returned
    pub pages: Vec<(Option<Cursor>, usize)>,
    pub batches: Vec<usize>,
    pub rosters: Vec<TeamId>,
    pub searches: Vec<String>,
}

/// An in-memory directory that records what it was asked
#[derive(Default)]
pub struct FakeDirectory {
    pub channels: Vec<Channel>,
    pub follows: HashMap<ChannelId, Vec<ChannelId>>,
    pub live: HashMap<ChannelId, LiveChannel>,
    pub teams: HashMap<ChannelId, Vec<TeamMembership>>,
    pub rosters: HashMap<TeamId, Roster>,

    /// returned from every liveness lookup, asked for or not
    pub extra_live: Option<LiveChannel>,
    /// fail the nth liveness lookup
    pub fail_batch: Option<usize>,
    /// fail the nth page
    pub fail_page: Option<usize>,
    /// never finish the nth page
    pub hang_page: Option<usize>,
    pub fail_rosters: bool,
    /// never finish a liveness lookup
    pub hang_liveness: bool,
    /// keep handing out a cursor after the last page
    pub trailing_cursor: bool,
    /// hand out the same cursor (and the first page) forever
    pub stuck_cursor: bool,

    batch_count: AtomicUsize,
    calls: Mutex<Calls>,
}

impl FakeDirectory {
    pub fn calls(&self) -> Calls {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Directory for FakeDirectory {
    async fn search_channels(&self, query: &str) -> Result<Vec<Channel>> {
        self.calls.lock().unwrap().searches.push(query.to_string());
        let query = query.to_lowercase();
        Ok(self
            .channels
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&query))
            .cloned()
            .collect())
    }

    async fn get_channel_info(&self, id: &ChannelId) -> Result<Option<Channel>> {
        Ok(self.channels.iter().find(|c| &c.id == id).cloned())
    }

    async fn get_follows(
        &self,
        from: &ChannelId,
        cursor: Option<&Cursor>,
        page_size: usize,
    ) -> Result<FollowPage> {
        let page_index = self.calls.lock().unwrap().pages.len();
        if self.fail_page == Some(page_index) {
            return Err(Error::transient("page request failed"));
        }
        if self.hang_page == Some(page_index) {
            std::future::pending::<()>().await;
        }

        let all = self.follows.get(from).map(Vec::as_slice).unwrap_or_default();
        let offset = match cursor {
            Some(cursor) if !self.stuck_cursor => cursor.as_str().parse::<usize>().unwrap(),
            _ => 0,
        };

        let end = (offset + page_size).min(all.len());
        let targets = all[offset..end].to_vec();

        self.calls
            .lock()
            .unwrap()
            .pages
            .push((cursor.cloned(), targets.len()));

        let cursor = if self.stuck_cursor {
            Some(Cursor::new("stuck"))
        } else if end < all.len() || self.trailing_cursor {
            Some(Cursor::new(end.to_string()))
        } else {
            None
        };

        Ok(FollowPage {
            targets,
            cursor,
            total: all.len(),
        })
    }

    async fn get_live_sessions(&self, ids: &[ChannelId]) -> Result<Vec<LiveChannel>> {
        assert!(ids.len() <= crate::MAX_BATCH_SIZE, "batch too large: {}", ids.len());
        self.calls.lock().unwrap().batches.push(ids.len());

        let n = self.batch_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_batch == Some(n) {
            return Err(Error::transient("liveness request failed"));
        }
        if self.hang_liveness {
            std::future::pending::<()>().await;
        }

        Ok(ids
            .iter()
            .filter_map(|id| self.live.get(id).cloned())
            .chain(self.extra_live.clone())
            .collect())
    }

    async fn get_team_memberships(&self, broadcaster: &ChannelId) -> Result<Vec<TeamMembership>> {
        Ok(self.teams.get(broadcaster).cloned().unwrap_or_default())
    }

    async fn get_team_roster(&self, team: &TeamId) -> Result<Option<Roster>> {
        self.calls.lock().unwrap().rosters.push(team.clone());
        if self.fail_rosters {
            return Err(Error::transient("roster request failed"));
        }
        Ok(self.rosters.get(team).cloned())
    }
}
