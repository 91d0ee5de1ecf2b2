//! Configuration types
//!
//! Board configuration is fixed at compile time. There is no runtime
//! mutation path: every value here is a `const`.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
