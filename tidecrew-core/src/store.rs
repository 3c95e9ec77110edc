//! Effect-aware state store with reducer pattern
//!
//! The reducer is the only place state mutates. Alongside the change flag it
//! returns *declared* side effects; the runtime hands those to an effect
//! handler, so the reducer itself stays free of I/O.

use std::marker::PhantomData;

use crate::action::Action;

/// Result of dispatching an action: did state change, and which effects
/// should the runtime process next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched<E> {
    /// Whether the state was modified and a re-render is needed.
    pub changed: bool,
    /// Effects declared by the reducer, in order.
    pub effects: Vec<E>,
}

impl<E> Default for Dispatched<E> {
    fn default() -> Self {
        Self::unchanged()
    }
}

impl<E> Dispatched<E> {
    /// No state change, no effects.
    #[inline]
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    /// State changed, no effects.
    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// A single effect without a state change.
    #[inline]
    pub fn effect(effect: E) -> Self {
        Self {
            changed: false,
            effects: vec![effect],
        }
    }

    /// State changed with a single effect.
    #[inline]
    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    /// State changed with multiple effects.
    #[inline]
    pub fn changed_with_many(effects: Vec<E>) -> Self {
        Self {
            changed: true,
            effects,
        }
    }

    /// Append an effect.
    #[inline]
    pub fn with(mut self, effect: E) -> Self {
        self.effects.push(effect);
        self
    }

    /// True if any effects were declared.
    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

/// A reducer that mutates state and declares effects.
pub type EffectReducer<S, A, E> = fn(&mut S, A) -> Dispatched<E>;

/// Centralized state container.
///
/// Holds the application state and provides a single mutation point through
/// [`EffectStore::dispatch`].
pub struct EffectStore<S, A, E> {
    state: S,
    reducer: EffectReducer<S, A, E>,
    _marker: PhantomData<(A, E)>,
}

impl<S, A: Action, E> EffectStore<S, A, E> {
    /// Create a store from initial state and a reducer.
    pub fn new(state: S, reducer: EffectReducer<S, A, E>) -> Self {
        Self {
            state,
            reducer,
            _marker: PhantomData,
        }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Mutable state access, for initialization only — prefer dispatching.
    #[inline]
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// Run the reducer for one action.
    #[inline]
    pub fn dispatch(&mut self, action: A) -> Dispatched<E> {
        (self.reducer)(&mut self.state, action)
    }
}

/// Middleware hooks around each dispatch.
pub trait Middleware<A: Action> {
    /// Called before the reducer runs.
    fn before(&mut self, action: &A);
    /// Called after the reducer runs with the change flag.
    fn after(&mut self, action: &A, state_changed: bool);
}

/// Middleware that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<A: Action> Middleware<A> for NoopMiddleware {
    fn before(&mut self, _action: &A) {}
    fn after(&mut self, _action: &A, _state_changed: bool) {}
}

/// Middleware that traces each processed action.
#[derive(Debug, Clone, Default)]
pub struct ActionLog;

impl<A: Action> Middleware<A> for ActionLog {
    fn before(&mut self, _action: &A) {}

    fn after(&mut self, action: &A, state_changed: bool) {
        tracing::debug!(action = %action.name(), state_changed, "action processed");
    }
}

/// An [`EffectStore`] wrapped with middleware.
pub struct EffectStoreWithMiddleware<S, A, E, M>
where
    A: Action,
    M: Middleware<A>,
{
    store: EffectStore<S, A, E>,
    middleware: M,
}

impl<S, A, E, M> EffectStoreWithMiddleware<S, A, E, M>
where
    A: Action,
    M: Middleware<A>,
{
    /// Create a store with middleware.
    pub fn new(state: S, reducer: EffectReducer<S, A, E>, middleware: M) -> Self {
        Self {
            store: EffectStore::new(state, reducer),
            middleware,
        }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> &S {
        self.store.state()
    }

    /// Mutable state access.
    #[inline]
    pub fn state_mut(&mut self) -> &mut S {
        self.store.state_mut()
    }

    /// Dispatch through middleware and the store.
    pub fn dispatch(&mut self, action: A) -> Dispatched<E> {
        self.middleware.before(&action);
        let result = self.store.dispatch(action.clone());
        self.middleware.after(&action, result.changed);
        result
    }
}
