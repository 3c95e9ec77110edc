//! TideCrew - coordinate community beach cleanups from the terminal
//!
//! One page, four independent flows kicked off at startup:
//!
//! 1. **Events** - a fixed roster of upcoming cleanups rendered as cards with
//!    a join control per event
//! 2. **Crew statistics** - counters persisted to a local JSON file, animated
//!    on every change
//! 3. **Weather** - current temperature and a 4-day outlook merged from two
//!    NEA real-time endpoints
//! 4. **UI wiring** - focus-routed keyboard handling per region
//!
//! Built on the `tidecrew-core` dispatch loop: events become actions, the
//! reducer owns all state transitions, and async work (fetches, debounce
//! timers, the toast dismissal) runs as keyed tasks resolving back to actions.

pub mod action;
pub mod api;
pub mod components;
pub mod effect;
pub mod format;
pub mod reducer;
pub mod roster;
pub mod state;
pub mod stats;
