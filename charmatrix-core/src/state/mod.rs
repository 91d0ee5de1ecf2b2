//! Shared runtime state and the boot state machine
//!
//! [`SharedState`] is the only data crossing execution contexts. It is
//! split once into single-writer handles; see [`shared`] for the rules.

pub mod machine;
pub mod shared;

pub use machine::{Phase, PhaseEvent};
pub use shared::{
    CharPublisher, Indicator, IndicatorToggler, SharedState, StateReader, StateSnapshot,
};
