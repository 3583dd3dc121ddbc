mod cursors;
mod queue;

pub mod error;

pub use queue::*;
