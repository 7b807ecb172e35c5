use crate::Directory;

/// Ranks the live channels a broadcaster could raid.
///
/// Holds no state besides the [`Directory`], every operation is independent
/// and may run concurrently with the others. Each operation takes a
/// [`CancellationToken`](crate::CancellationToken), cancelling it abandons
/// any remaining remote calls and yields [`Error::Cancelled`](crate::Error::Cancelled).
#[derive(Clone, Debug)]
pub struct Aggregator<D> {
    pub(crate) directory: D,
}

impl<D: Directory> Aggregator<D> {
    pub const fn new(directory: D) -> Self {
        Self { directory }
    }

    pub const fn directory(&self) -> &D {
        &self.directory
    }
}
