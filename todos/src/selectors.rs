//! Selectors deriving view-ready projections from todo state.
//!
//! Filtering never reorders: the visible todos are always an
//! order-preserving subsequence of the full list.

use crate::types::{AppState, TodoItem, VisibilityFilter};
use statefold_core::Selector;

/// Returns the todos visible under `filter`, in their original order.
///
/// `All` yields every element; `Active` and `Completed` yield the
/// subsequence with the matching completion flag. Pure and idempotent.
#[must_use]
pub fn visible_todos(todos: &[TodoItem], filter: VisibilityFilter) -> Vec<&TodoItem> {
    match filter {
        VisibilityFilter::All => todos.iter().collect(),
        VisibilityFilter::Active => todos.iter().filter(|t| !t.completed).collect(),
        VisibilityFilter::Completed => todos.iter().filter(|t| t.completed).collect(),
    }
}

/// Selector producing the owned list of todos visible under the state's own
/// filter - the projection a view renders after each notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct VisibleTodos;

impl Selector for VisibleTodos {
    type State = AppState;
    type Output = Vec<TodoItem>;

    fn select(&self, state: &AppState) -> Vec<TodoItem> {
        visible_todos(&state.todos, state.visibility_filter)
            .into_iter()
            .cloned()
            .collect()
    }
}
