//! Event stream from the engine to a presentation layer.
//!
//! The engine pushes `GameEvent`s into an `EventSink` as turns resolve.
//! `Vec<GameEvent>` is the default sink; the match controller buffers events
//! there until the caller drains them.

pub mod event;

pub use event::GameEvent;

/// Receiver of engine events.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Sink that drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}
