//! Finds live channels worth raiding.
//!
//! Two signals are aggregated: the channels a broadcaster follows and the
//! rosters of the teams the broadcaster belongs to. Both are joined against
//! the set of channels that are live right now and ranked by viewer count.
//!
//! The remote service is reached through the [`Directory`] trait, the
//! [`Aggregator`] only sequences and merges the calls it makes.

mod error;
pub use error::{BoxError, Error, Missing, Result};

mod model;
pub use model::{
    rank, Channel, ChannelId, Cursor, FollowPage, LiveChannel, Roster, Team, TeamId,
    TeamMembership,
};

mod directory;
pub use directory::Directory;

mod cancel;

mod aggregator;
pub use aggregator::Aggregator;

mod follows;
mod live;
mod lookup;
mod teams;

#[cfg(test)]
mod testing;

pub use tokio_util::sync::CancellationToken;

/// The most channel ids a single liveness lookup accepts.
pub const MAX_BATCH_SIZE: usize = 50;

/// How many follows are requested per page.
pub const FOLLOW_PAGE_SIZE: usize = 50;
