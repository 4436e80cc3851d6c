//! Phase types, guards and phase history.
//!
//! Everything here is pure: phases are plain values, guards are
//! predicates and history is recorded immutably.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::{Phase, State};
