//! Todo-list domain built on the Statefold architecture.
//!
//! The classic unidirectional data-flow example: an ordered list of todos
//! plus a visibility filter, driven entirely by three action kinds. It
//! demonstrates:
//!
//! - A tagged action sum type with exhaustive reducers
//! - Slice reducers composed into a root reducer with `scope_reducer` /
//!   `combine_reducers`
//! - Selectors projecting state into what a view renders
//! - View-layer id allocation via an injected generator
//! - Testing with `ReducerTest` and property tests
//!
//! # Quick Start
//!
//! ```
//! use statefold_core::environment::SequentialIds;
//! use statefold_runtime::Store;
//! use statefold_todos::{TodoId, VisibilityFilter, VisibleTodos, actions, app_reducer};
//!
//! # fn main() -> Result<(), statefold_runtime::StoreError> {
//! let ids = SequentialIds::new();
//! let store = Store::from_default(app_reducer());
//!
//! store.dispatch(actions::add_todo(&ids, "buy milk"))?;
//! store.dispatch(actions::add_todo(&ids, "walk dog"))?;
//! store.dispatch(actions::toggle_todo(TodoId::new(0)))?;
//! store.dispatch(actions::set_visibility_filter(VisibilityFilter::Active))?;
//!
//! let visible = store.select(&VisibleTodos);
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].text, "walk dog");
//! # Ok(())
//! # }
//! ```

/// Action creators
pub mod actions;
/// Slice reducers and the composed root reducer
pub mod reducer;
/// State-to-view projections
pub mod selectors;
/// Domain types
pub mod types;

// Re-export commonly used types
pub use reducer::{AppReducer, TodosReducer, VisibilityFilterReducer, app_reducer};
pub use selectors::{VisibleTodos, visible_todos};
pub use types::{AppState, ParseFilterError, TodoAction, TodoId, TodoItem, VisibilityFilter};
