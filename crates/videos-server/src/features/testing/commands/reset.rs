//! Reset all data command

use crate::store::VideoStore;

/// Command to remove every stored video
#[derive(Debug, Clone, Copy, Default)]
pub struct ResetAllDataCommand;

/// Empties the store and returns how many videos were removed
///
/// Never fails. Issued ids stay retired.
#[tracing::instrument(skip(store))]
pub fn handle(store: &VideoStore, _command: ResetAllDataCommand) -> usize {
    let removed = store.reset_all();
    tracing::info!(removed, "All videos removed");
    removed
}
