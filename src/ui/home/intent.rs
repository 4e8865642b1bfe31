use crate::ui::mvi::Intent;

/// Cursor moves. Each carries the current entry count so the reducer can
/// clamp without holding the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridIntent {
    Left { item_count: usize },
    Right { item_count: usize },
    Up { item_count: usize },
    Down { item_count: usize },
    /// Re-clamp after the catalog changed.
    Clamp { item_count: usize },
    Reset,
}

impl Intent for GridIntent {}
