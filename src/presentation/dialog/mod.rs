mod selection;
mod terminal;

pub use selection::{SelectionDialog, SelectionRow, SelectionState};
pub use terminal::run_selection;
