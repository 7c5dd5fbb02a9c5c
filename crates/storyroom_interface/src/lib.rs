//! Driver trait for the Storyroom prompt roundtable.
//!
//! The roundtable engine never talks to a provider directly. It holds a
//! [`StoryroomDriver`] and calls [`StoryroomDriver::complete`], so any
//! completion backend (or a test double) can sit behind it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::StoryroomDriver;
