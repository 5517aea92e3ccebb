//! # Statefold Runtime
//!
//! Runtime implementation for the Statefold unidirectional data-flow
//! architecture.
//!
//! This crate provides the [`Store`]: the single owner of application state.
//! The store applies a reducer to each dispatched action and notifies
//! subscribers once the state has been fully replaced.
//!
//! The runtime is deliberately synchronous and single-threaded. Every
//! dispatch runs to completion - reduce, then notify, in subscription order -
//! with no suspension point anywhere, so there is exactly one logical thread
//! of control and no locking. The store uses `RefCell`/`Cell` interior
//! mutability and is `!Sync` by construction.
//!
//! ## Example
//!
//! ```
//! use statefold_core::Reducer;
//! use statefold_runtime::Store;
//!
//! #[derive(Default)]
//! struct Counter {
//!     value: u32,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = Counter;
//!     type Action = CounterAction;
//!
//!     fn reduce(&self, state: &mut Counter, action: CounterAction) {
//!         match action {
//!             CounterAction::Increment => state.value += 1,
//!         }
//!     }
//! }
//!
//! # fn main() -> Result<(), statefold_runtime::StoreError> {
//! let store = Store::from_default(CounterReducer);
//! store.dispatch(CounterAction::Increment)?;
//! assert_eq!(store.state(|s| s.value), 1);
//! # Ok(())
//! # }
//! ```

pub use error::StoreError;
pub use store::{Store, Subscription};

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// `dispatch` was called from inside a subscriber while another
        /// dispatch was still notifying.
        ///
        /// The store rejects nested dispatch outright rather than risk
        /// running reducers against a half-notified state. The error is
        /// raised before the nested action touches anything, so the
        /// in-flight dispatch completes untouched.
        #[error(
            "re-entrant dispatch: a subscriber attempted to dispatch while a dispatch was already in flight"
        )]
        ReentrantDispatch,
    }
}

/// Store module - the runtime for reducers
pub mod store {
    use super::StoreError;
    use statefold_core::{Reducer, Selector};
    use std::cell::{Cell, RefCell};
    use std::fmt;
    use std::rc::{Rc, Weak};

    /// Stable handle identifying one subscriber within its store.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct SubscriberId(u64);

    struct Subscriber<S: 'static> {
        id: SubscriberId,
        listener: Rc<dyn Fn(&S)>,
    }

    type SubscriberRegistry<S> = Rc<RefCell<Vec<Subscriber<S>>>>;

    /// Capability to remove a subscribed listener from its store.
    ///
    /// Returned by [`Store::subscribe`]. Dropping the subscription does
    /// not detach the listener; call [`Subscription::unsubscribe`]. The
    /// handle holds only a weak reference to the store's subscriber list,
    /// so it can outlive the store and can be exercised from inside a
    /// notification callback.
    #[must_use = "dropping the Subscription silently makes the listener impossible to remove"]
    pub struct Subscription<S: 'static> {
        id: SubscriberId,
        registry: Weak<RefCell<Vec<Subscriber<S>>>>,
    }

    impl<S: 'static> Subscription<S> {
        /// Remove the listener this subscription was created for.
        ///
        /// Safe to call at any time, including from inside a listener while
        /// a dispatch is notifying: the removed listener is never invoked
        /// again, and no other listener is skipped or invoked twice.
        pub fn unsubscribe(self) {
            if let Some(registry) = self.registry.upgrade() {
                registry.borrow_mut().retain(|s| s.id != self.id);
                tracing::debug!(subscriber = self.id.0, "listener unsubscribed");
            }
        }
    }

    impl<S: 'static> fmt::Debug for Subscription<S> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("Subscription").field("id", &self.id.0).finish()
        }
    }

    /// Resets the in-dispatch flag when a dispatch unwinds or returns.
    struct DispatchGuard<'a>(&'a Cell<bool>);

    impl Drop for DispatchGuard<'_> {
        fn drop(&mut self) {
            self.0.set(false);
        }
    }

    /// The Store - sole owner and sole mutator of application state.
    ///
    /// The store manages:
    /// 1. State (behind a `RefCell`; all mutation happens inside `dispatch`)
    /// 2. Reducer (transition logic)
    /// 3. Subscribers (notified in subscription order after each transition)
    ///
    /// # Type Parameters
    ///
    /// - `S`: state type
    /// - `A`: action type
    /// - `R`: reducer implementation
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::new(AppState::default(), app_reducer());
    ///
    /// let subscription = store.subscribe(|state: &AppState| {
    ///     println!("{} todos", state.todos.len());
    /// });
    ///
    /// store.dispatch(actions::add_todo(&ids, "buy milk"))?;
    /// subscription.unsubscribe();
    /// ```
    pub struct Store<S, A, R>
    where
        R: Reducer<State = S, Action = A>,
        S: 'static,
    {
        state: RefCell<S>,
        reducer: R,
        subscribers: SubscriberRegistry<S>,
        next_subscriber_id: Cell<u64>,
        in_dispatch: Cell<bool>,
    }

    impl<S, A, R> Store<S, A, R>
    where
        R: Reducer<State = S, Action = A>,
        S: 'static,
        A: fmt::Debug,
    {
        /// Create a new store with an explicit initial state.
        #[must_use]
        pub fn new(initial_state: S, reducer: R) -> Self {
            Self {
                state: RefCell::new(initial_state),
                reducer,
                subscribers: Rc::new(RefCell::new(Vec::new())),
                next_subscriber_id: Cell::new(0),
                in_dispatch: Cell::new(false),
            }
        }

        /// Create a new store whose initial state is `S::default()`.
        ///
        /// This is how every slice establishes its own default: the whole
        /// state's `Default` is assembled from the slice defaults, once, at
        /// construction.
        #[must_use]
        pub fn from_default(reducer: R) -> Self
        where
            S: Default,
        {
            Self::new(S::default(), reducer)
        }

        /// Dispatch an action through the reducer and notify subscribers.
        ///
        /// Runs synchronously to completion: the reducer sees the state
        /// exactly as the previous dispatch left it, and every subscriber is
        /// then invoked in subscription order against the fully-replaced
        /// state. Listeners that unsubscribe (themselves or others) during
        /// notification take effect immediately; listeners subscribed during
        /// notification first run on the next dispatch.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ReentrantDispatch`] when called from inside
        /// a subscriber while this dispatch is still notifying. State is
        /// untouched by the rejected action.
        pub fn dispatch(&self, action: A) -> Result<(), StoreError> {
            if self.in_dispatch.replace(true) {
                tracing::warn!(?action, "re-entrant dispatch rejected");
                return Err(StoreError::ReentrantDispatch);
            }
            let _guard = DispatchGuard(&self.in_dispatch);

            tracing::trace!(?action, "dispatching");
            {
                let mut state = self.state.borrow_mut();
                self.reducer.reduce(&mut state, action);
            }

            // Walk a snapshot of ids and re-resolve each one, so listeners
            // may mutate the registry mid-notification without corrupting
            // the walk.
            let snapshot: Vec<SubscriberId> =
                self.subscribers.borrow().iter().map(|s| s.id).collect();
            for id in snapshot {
                let listener = self
                    .subscribers
                    .borrow()
                    .iter()
                    .find(|s| s.id == id)
                    .map(|s| Rc::clone(&s.listener));
                if let Some(listener) = listener {
                    let state = self.state.borrow();
                    listener(&state);
                }
            }

            Ok(())
        }

        /// Register a listener invoked after every state transition.
        ///
        /// Listeners receive a shared view of the new state. The returned
        /// [`Subscription`] is the capability to remove the listener.
        pub fn subscribe<F>(&self, listener: F) -> Subscription<S>
        where
            F: Fn(&S) + 'static,
        {
            let id = SubscriberId(self.next_subscriber_id.get());
            self.next_subscriber_id.set(id.0 + 1);
            self.subscribers.borrow_mut().push(Subscriber {
                id,
                listener: Rc::new(listener),
            });
            tracing::debug!(subscriber = id.0, "listener subscribed");

            Subscription {
                id,
                registry: Rc::downgrade(&self.subscribers),
            }
        }

        /// Read the current state through a closure.
        ///
        /// The closure receives a shared, read-only view; nothing outside
        /// `dispatch` can mutate the state.
        pub fn state<F, T>(&self, read: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            read(&self.state.borrow())
        }

        /// Evaluate a selector against the current state.
        pub fn select<Sel>(&self, selector: &Sel) -> Sel::Output
        where
            Sel: Selector<State = S>,
        {
            self.state(|state| selector.select(state))
        }

        /// Number of currently registered listeners.
        #[must_use]
        pub fn subscriber_count(&self) -> usize {
            self.subscribers.borrow().len()
        }
    }
}
