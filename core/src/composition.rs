//! Reducer composition utilities
//!
//! This module provides the two utilities that turn independent slice
//! reducers into one whole-state reducer:
//!
//! - **`scope_reducer`**: focus a reducer onto a subset of a larger state
//! - **`combine_reducers`**: run multiple reducers on the same state/action
//!
//! Scoping first and combining second yields the classic per-slice layout:
//! each slice of the application state is owned by exactly one reducer, every
//! reducer sees every action (so unhandled variants are per-slice no-ops), and
//! slices never read each other.

use crate::reducer::Reducer;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer runs in registration order on every dispatched action. Running
/// every reducer unconditionally - including the ones for which an action is a
/// no-op - is what keeps slices independent: no reducer needs to know which
/// actions the others handle.
///
/// # Examples
///
/// ```
/// use statefold_core::{Reducer, combine_reducers};
///
/// #[derive(Default)]
/// struct AppState {
///     count: i32,
///     label: String,
/// }
///
/// #[derive(Clone)]
/// enum AppAction {
///     Increment,
///     Relabel(String),
/// }
///
/// struct CountReducer;
///
/// impl Reducer for CountReducer {
///     type State = AppState;
///     type Action = AppAction;
///
///     fn reduce(&self, state: &mut AppState, action: AppAction) {
///         if let AppAction::Increment = action {
///             state.count += 1;
///         }
///     }
/// }
///
/// struct LabelReducer;
///
/// impl Reducer for LabelReducer {
///     type State = AppState;
///     type Action = AppAction;
///
///     fn reduce(&self, state: &mut AppState, action: AppAction) {
///         if let AppAction::Relabel(label) = action {
///             state.label = label;
///         }
///     }
/// }
///
/// let combined = combine_reducers(vec![Box::new(CountReducer), Box::new(LabelReducer)]);
///
/// let mut state = AppState::default();
/// combined.reduce(&mut state, AppAction::Increment);
/// combined.reduce(&mut state, AppAction::Relabel("ready".to_string()));
/// assert_eq!(state.count, 1);
/// assert_eq!(state.label, "ready");
/// ```
#[must_use]
pub fn combine_reducers<S, A>(
    reducers: Vec<Box<dyn Reducer<State = S, Action = A>>>,
) -> CombinedReducer<S, A>
where
    S: 'static,
    A: Clone + 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A>
where
    S: 'static,
    A: Clone + 'static,
{
    reducers: Vec<Box<dyn Reducer<State = S, Action = A>>>,
}

impl<S, A> Reducer for CombinedReducer<S, A>
where
    S: 'static,
    A: Clone + 'static,
{
    type State = S;
    type Action = A;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) {
        for reducer in &self.reducers {
            reducer.reduce(state, action.clone());
        }
    }
}

/// Scopes a reducer to operate on a subset of a larger state.
///
/// The accessor hands the slice reducer a mutable view of its own field and
/// nothing else, so a scoped reducer is structurally incapable of touching a
/// foreign slice.
///
/// # Examples
///
/// ```
/// use statefold_core::{Reducer, scope_reducer};
///
/// #[derive(Default)]
/// struct CounterState {
///     count: i32,
/// }
///
/// #[derive(Clone)]
/// enum CounterAction {
///     Increment,
///     Decrement,
/// }
///
/// struct CounterReducer;
///
/// impl Reducer for CounterReducer {
///     type State = CounterState;
///     type Action = CounterAction;
///
///     fn reduce(&self, state: &mut CounterState, action: CounterAction) {
///         match action {
///             CounterAction::Increment => state.count += 1,
///             CounterAction::Decrement => state.count -= 1,
///         }
///     }
/// }
///
/// #[derive(Default)]
/// struct AppState {
///     counter: CounterState,
///     other_data: String,
/// }
///
/// let scoped = scope_reducer(CounterReducer, |state: &mut AppState| &mut state.counter);
///
/// let mut state = AppState::default();
/// scoped.reduce(&mut state, CounterAction::Increment);
/// assert_eq!(state.counter.count, 1);
/// assert_eq!(state.other_data, "");
/// ```
#[must_use]
pub fn scope_reducer<S, R>(reducer: R, scope: fn(&mut S) -> &mut R::State) -> ScopedReducer<S, R>
where
    S: 'static,
    R: Reducer,
{
    ScopedReducer { reducer, scope }
}

/// A scoped reducer that operates on a subset of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, R>
where
    S: 'static,
    R: Reducer,
{
    reducer: R,
    scope: fn(&mut S) -> &mut R::State,
}

impl<S, R> Reducer for ScopedReducer<S, R>
where
    S: 'static,
    R: Reducer,
{
    type State = S;
    type Action = R::Action;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) {
        self.reducer.reduce((self.scope)(state), action);
    }
}
