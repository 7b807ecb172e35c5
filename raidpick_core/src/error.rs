pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("couldn't find {0}")]
    NotFound(Missing),

    #[error("{0}")]
    Transient(#[source] BoxError),

    #[error("the operation was cancelled")]
    Cancelled,

    #[error("unexpected response from the service: {0}")]
    Protocol(String),
}

impl Error {
    pub fn transient(err: impl Into<BoxError>) -> Self {
        Self::Transient(err.into())
    }

    pub fn protocol(msg: impl ToString) -> Self {
        Self::Protocol(msg.to_string())
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(..))
    }

    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// What a [`Error::NotFound`] was looking for
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Missing {
    Channel(crate::ChannelId),
    ChannelName(String),
    Team(crate::TeamId),
}

impl std::fmt::Display for Missing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Channel(id) => write!(f, "the channel with id '{id}'"),
            Self::ChannelName(name) => write!(f, "the channel '{name}'"),
            Self::Team(id) => write!(f, "the team with id '{id}'"),
        }
    }
}
