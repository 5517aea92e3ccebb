//! Domain types for the todo-list application.
//!
//! The whole state is two independent slices: the ordered list of todos and
//! the visibility filter. Each slice has its own reducer; the types here are
//! plain values with no behavior beyond construction and the one legal
//! mutation (flipping a todo's completion flag).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unique identifier for a todo item.
///
/// Ids are monotonically assigned by the view layer's id generator and never
/// reused for the lifetime of a store, so insertion order and id order
/// coincide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from its raw value
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id value
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// What needs doing
    pub text: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, not-yet-completed todo item
    #[must_use]
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Flips the completion flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Which todos an observer wants to see.
///
/// A closed enum: there is no unrecognized filter value, so selectors match
/// exhaustively instead of falling through a default branch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisibilityFilter {
    /// Every todo
    #[default]
    All,
    /// Only todos not yet completed
    Active,
    /// Only completed todos
    Completed,
}

impl VisibilityFilter {
    /// All filter values, in display order
    pub const ALL_FILTERS: [Self; 3] = [Self::All, Self::Active, Self::Completed];
}

impl std::fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Error returned when parsing a visibility filter from text fails
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized visibility filter: {0:?} (expected \"all\", \"active\" or \"completed\")")]
pub struct ParseFilterError(String);

impl FromStr for VisibilityFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(ParseFilterError(other.to_string())),
        }
    }
}

/// Whole application state: the todos slice plus the filter slice.
///
/// Owned exclusively by the store; the only mutation path is a reducer
/// invocation inside `dispatch`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// All todos, in insertion (= id) order
    pub todos: Vec<TodoItem>,
    /// Which todos the view currently shows
    pub visibility_filter: VisibilityFilter,
}

impl AppState {
    /// Creates the empty state: no todos, `All` filter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: Vec::new(),
            visibility_filter: VisibilityFilter::All,
        }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    /// Returns a todo by id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Checks whether a todo with this id exists
    #[must_use]
    pub fn exists(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }
}

/// Every possible state transition, as a tagged sum type.
///
/// Each reducer matches exhaustively on this enum; variants a slice does not
/// handle leave that slice unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Append a new todo with a caller-assigned id
    AddTodo {
        /// Fresh unique id, assigned by the view layer's generator
        id: TodoId,
        /// What needs doing
        text: String,
    },

    /// Flip the completion flag of the matching todo
    ToggleTodo {
        /// Id of the todo to toggle
        id: TodoId,
    },

    /// Replace the visibility filter
    SetVisibilityFilter {
        /// The filter to switch to
        filter: VisibilityFilter,
    },
}
