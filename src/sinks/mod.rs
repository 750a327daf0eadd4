//! Sink implementations

pub mod channel;
#[cfg(feature = "console")]
pub mod console;

pub use channel::ChannelSink;
#[cfg(feature = "console")]
pub use console::ConsoleSink;

pub use crate::core::Sink;
