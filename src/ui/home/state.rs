use crate::ui::mvi::UiState;

/// Cards per grid row.
pub const GRID_COLUMNS: usize = 2;

/// Keyboard selection within the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridCursor {
    pub selected: usize,
}

impl UiState for GridCursor {}

impl GridCursor {
    pub fn row(&self) -> usize {
        self.selected / GRID_COLUMNS
    }

    pub fn column(&self) -> usize {
        self.selected % GRID_COLUMNS
    }
}
