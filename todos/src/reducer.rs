//! Reducers for the todo-list application.
//!
//! Two slice reducers - one per field of [`AppState`] - composed into the
//! application's root reducer with [`scope_reducer`] and
//! [`combine_reducers`]. Every action reaches every slice; a variant a slice
//! does not handle leaves that slice exactly as it was.

use crate::types::{AppState, TodoAction, TodoItem, VisibilityFilter};
use statefold_core::{CombinedReducer, Reducer, combine_reducers, scope_reducer};

/// Reducer for the todos slice (`AppState::todos`)
#[derive(Clone, Debug, Default)]
pub struct TodosReducer;

impl TodosReducer {
    /// Creates a new `TodosReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TodosReducer {
    type State = Vec<TodoItem>;
    type Action = TodoAction;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) {
        match action {
            TodoAction::AddTodo { id, text } => {
                state.push(TodoItem::new(id, text));
            }
            TodoAction::ToggleTodo { id } => {
                // Todos whose id does not match are not touched at all,
                // preserving them bit-for-bit.
                for todo in state.iter_mut() {
                    if todo.id == id {
                        todo.toggle();
                    }
                }
            }
            TodoAction::SetVisibilityFilter { .. } => {}
        }
    }
}

/// Reducer for the visibility-filter slice (`AppState::visibility_filter`)
#[derive(Clone, Debug, Default)]
pub struct VisibilityFilterReducer;

impl VisibilityFilterReducer {
    /// Creates a new `VisibilityFilterReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for VisibilityFilterReducer {
    type State = VisibilityFilter;
    type Action = TodoAction;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) {
        match action {
            // Stored verbatim; the type system already guarantees a valid
            // filter value.
            TodoAction::SetVisibilityFilter { filter } => *state = filter,
            TodoAction::AddTodo { .. } | TodoAction::ToggleTodo { .. } => {}
        }
    }
}

/// The application's root reducer type
pub type AppReducer = CombinedReducer<AppState, TodoAction>;

/// Builds the root reducer: each slice reducer scoped onto its field, then
/// combined so both see every action.
#[must_use]
pub fn app_reducer() -> AppReducer {
    combine_reducers(vec![
        Box::new(scope_reducer(TodosReducer::new(), |state: &mut AppState| {
            &mut state.todos
        })),
        Box::new(scope_reducer(
            VisibilityFilterReducer::new(),
            |state: &mut AppState| &mut state.visibility_filter,
        )),
    ])
}
