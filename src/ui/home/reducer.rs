use crate::ui::mvi::Reducer;

use super::intent::GridIntent;
use super::state::{GridCursor, GRID_COLUMNS};

pub struct GridReducer;

impl Reducer for GridReducer {
    type State = GridCursor;
    type Intent = GridIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let selected = state.selected;
        match intent {
            GridIntent::Reset => GridCursor::default(),
            GridIntent::Clamp { item_count } => GridCursor {
                selected: clamp(selected, item_count),
            },
            GridIntent::Left { item_count } => GridCursor {
                selected: clamp(selected.saturating_sub(1), item_count),
            },
            GridIntent::Right { item_count } => GridCursor {
                selected: clamp(selected + 1, item_count),
            },
            GridIntent::Up { item_count } => {
                let above = selected.checked_sub(GRID_COLUMNS).unwrap_or(selected);
                GridCursor {
                    selected: clamp(above, item_count),
                }
            }
            GridIntent::Down { item_count } => {
                let below = selected + GRID_COLUMNS;
                GridCursor {
                    selected: if below < item_count {
                        below
                    } else {
                        clamp(selected, item_count)
                    },
                }
            }
        }
    }
}

fn clamp(selected: usize, item_count: usize) -> usize {
    selected.min(item_count.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(selected: usize) -> GridCursor {
        GridCursor { selected }
    }

    #[test]
    fn right_and_left_move_by_one() {
        let cursor = GridReducer::reduce(at(0), GridIntent::Right { item_count: 5 });
        assert_eq!(cursor.selected, 1);
        let cursor = GridReducer::reduce(cursor, GridIntent::Left { item_count: 5 });
        assert_eq!(cursor.selected, 0);
    }

    #[test]
    fn moves_stop_at_edges() {
        let cursor = GridReducer::reduce(at(0), GridIntent::Left { item_count: 5 });
        assert_eq!(cursor.selected, 0);
        let cursor = GridReducer::reduce(at(4), GridIntent::Right { item_count: 5 });
        assert_eq!(cursor.selected, 4);
    }

    #[test]
    fn up_and_down_move_by_row() {
        let cursor = GridReducer::reduce(at(1), GridIntent::Down { item_count: 6 });
        assert_eq!(cursor.selected, 3);
        assert_eq!(cursor.row(), 1);
        assert_eq!(cursor.column(), 1);
        let cursor = GridReducer::reduce(cursor, GridIntent::Up { item_count: 6 });
        assert_eq!(cursor.selected, 1);
    }

    #[test]
    fn up_on_first_row_stays() {
        let cursor = GridReducer::reduce(at(1), GridIntent::Up { item_count: 6 });
        assert_eq!(cursor.selected, 1);
    }

    #[test]
    fn down_without_card_below_stays() {
        // Row 2 has only index 4; index 3 has nothing below.
        let cursor = GridReducer::reduce(at(3), GridIntent::Down { item_count: 5 });
        assert_eq!(cursor.selected, 3);
    }

    #[test]
    fn clamp_after_catalog_shrinks() {
        let cursor = GridReducer::reduce(at(9), GridIntent::Clamp { item_count: 3 });
        assert_eq!(cursor.selected, 2);
        let cursor = GridReducer::reduce(at(9), GridIntent::Clamp { item_count: 0 });
        assert_eq!(cursor.selected, 0);
    }
}
