//! Event notification for the external renderer.
//!
//! The engine publishes [`GameEvent`]s to an [`EventSink`] supplied with each
//! input. Sinks are passive: the core only ever waits for player input
//! (path choice, quiz answer), never for presentation.

pub mod event;
pub mod sink;

pub use event::GameEvent;
pub use sink::{EventSink, FnSink, NullSink};
