//! Core dispatch machinery for the TideCrew terminal UI.
//!
//! The architecture is Redux/Elm-shaped:
//!
//! - **Action**: a description of something that happened
//! - **EffectStore**: owns the state; a reducer maps `(state, action)` to a
//!   change flag plus declared side effects
//! - **Component**: a pure UI element rendering from props and emitting actions
//! - **EffectRuntime**: the select-loop wiring terminal events, the action
//!   channel, the reducer, and the effect handler together
//! - **TaskManager**: keyed async tasks (fetches, debounce timers, intervals)
//!   whose results come back as actions
//!
//! Async work follows a two-phase action pattern: an intent action (e.g.
//! `WeatherFetch`) makes the reducer declare an effect, the effect handler
//! spawns a task, and the task resolves to a result action (`WeatherDidLoad`
//! or `WeatherDidError`) sent back through the channel.

pub mod action;
pub mod component;
pub mod event;
pub mod keys;
pub mod runtime;
pub mod store;
pub mod tasks;
pub mod testing;

pub use action::Action;
pub use component::Component;
pub use event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
pub use keys::parse_key_string;
pub use runtime::{EffectContext, EffectRuntime, EventOutcome, PollerConfig};
pub use store::{
    ActionLog, Dispatched, EffectReducer, EffectStore, EffectStoreWithMiddleware, Middleware,
    NoopMiddleware,
};
pub use tasks::{TaskKey, TaskManager};

// Re-export ratatui types for convenience
pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::Action;
    pub use crate::component::Component;
    pub use crate::event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
    pub use crate::runtime::{EffectContext, EffectRuntime, EventOutcome, PollerConfig};
    pub use crate::store::{
        ActionLog, Dispatched, EffectReducer, EffectStore, EffectStoreWithMiddleware, Middleware,
        NoopMiddleware,
    };
    pub use crate::tasks::{TaskKey, TaskManager};

    pub use ratatui::{
        layout::Rect,
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}
