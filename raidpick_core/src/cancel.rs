use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::{Error, Result};

/// Races a remote call against `token`.
///
/// Cancellation wins ties, so a call whose token is already cancelled is never started.
pub(crate) async fn guarded<F, T>(token: &CancellationToken, call: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            log::debug!("abandoning remote call, operation was cancelled");
            Err(Error::Cancelled)
        }
        res = call => res,
    }
}
