//! Serial character input
//!
//! Fixed-interval polling rather than waking on receive: the caller
//! sleeps for the poll interval after every [`CharacterPoller::poll_once`],
//! whether or not a byte arrived. Character changes therefore show up
//! within one poll interval plus one frame interval.

pub mod poller;

pub use poller::CharacterPoller;
