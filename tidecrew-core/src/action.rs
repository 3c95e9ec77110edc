//! Action trait for type-safe state mutations

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to the store.
///
/// Actions describe intents to change state. They must be:
/// - `Clone`: actions may be logged or sent to multiple handlers
/// - `Debug`: for logging
/// - `Send + 'static`: results of async tasks cross thread boundaries
pub trait Action: Clone + Debug + Send + 'static {
    /// Action name for logging and filtering
    fn name(&self) -> &'static str;
}
