use crate::ui::mvi::Reducer;
use crate::ui::navigation::intent::NavIntent;
use crate::ui::navigation::state::NavigationStack;

pub struct NavigationReducer;

impl Reducer for NavigationReducer {
    type State = NavigationStack;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Re-opening the visible screen is a no-op.
            NavIntent::GoTo(route) if state.current() == route => state,
            NavIntent::GoTo(route) => state.push(route),
            NavIntent::GoBack => state.pop(),
        }
    }
}
