//! Action creators for the todo-list application.
//!
//! Creators are the only place actions are built by hand. Fresh todo ids are
//! drawn from an injected [`IdGenerator`] - id allocation belongs to the
//! layer that creates actions, never to a reducer, so replaying the same
//! action against the same state stays deterministic.

use crate::types::{TodoAction, TodoId, VisibilityFilter};
use statefold_core::environment::IdGenerator;

/// Build a [`TodoAction::AddTodo`] with a fresh id from `ids`.
pub fn add_todo(ids: &dyn IdGenerator, text: impl Into<String>) -> TodoAction {
    TodoAction::AddTodo {
        id: TodoId::new(ids.next_id()),
        text: text.into(),
    }
}

/// Build a [`TodoAction::ToggleTodo`] for an existing todo.
#[must_use]
pub const fn toggle_todo(id: TodoId) -> TodoAction {
    TodoAction::ToggleTodo { id }
}

/// Build a [`TodoAction::SetVisibilityFilter`].
#[must_use]
pub const fn set_visibility_filter(filter: VisibilityFilter) -> TodoAction {
    TodoAction::SetVisibilityFilter { filter }
}
