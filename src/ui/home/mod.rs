//! Product grid screen.
//!
//! `view.rs` derives what to render from the catalog snapshot; the grid
//! cursor (`state.rs`, `intent.rs`, `reducer.rs`) tracks keyboard selection.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::GridIntent;
pub use reducer::GridReducer;
pub use state::{GridCursor, GRID_COLUMNS};
pub use view::{GridEntry, ProductListView};
