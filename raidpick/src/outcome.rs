use raidpick_core::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Problem,
}

impl Severity {
    pub const fn level(self) -> log::Level {
        match self {
            Self::Info => log::Level::Info,
            Self::Warning => log::Level::Warn,
            Self::Problem => log::Level::Error,
        }
    }
}

/// What the user is told when a command fails
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub severity: Severity,
    /// `None` when there's nothing worth saying
    pub message: Option<String>,
}

impl Outcome {
    pub fn from_error(err: &Error) -> Self {
        let (severity, message) = match err {
            Error::NotFound(missing) => (
                Severity::Warning,
                Some(format!("Whoops! I couldn't find {missing}.")),
            ),
            Error::Transient(..) | Error::Protocol(..) => (
                Severity::Problem,
                Some(format!("Whoops! An error occurred: '{err}'.")),
            ),
            Error::Cancelled => (Severity::Info, None),
        };
        Self { severity, message }
    }

    pub fn report(&self) {
        match &self.message {
            Some(msg) => {
                log::log!(self.severity.level(), "{msg}");
                eprintln!("{msg}");
            }
            None => log::debug!("nothing to report"),
        }
    }
}
