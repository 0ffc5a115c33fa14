//! Event sinks.

use super::event::GameEvent;

/// Receiver of published events.
///
/// The engine never waits on a sink; `publish` must return promptly.
pub trait EventSink {
    fn publish(&mut self, event: GameEvent);
}

/// Records every event in order.
impl EventSink for Vec<GameEvent> {
    fn publish(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn publish(&mut self, _event: GameEvent) {}
}

/// Forwards events to a closure.
///
/// ```
/// use dice_quiz::events::{EventSink, FnSink, GameEvent};
///
/// let mut count = 0;
/// let mut sink = FnSink(|_e: GameEvent| count += 1);
/// sink.publish(GameEvent::GameReset);
/// drop(sink);
/// assert_eq!(count, 1);
/// ```
pub struct FnSink<F: FnMut(GameEvent)>(pub F);

impl<F: FnMut(GameEvent)> EventSink for FnSink<F> {
    fn publish(&mut self, event: GameEvent) {
        (self.0)(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_records_in_order() {
        let mut sink: Vec<GameEvent> = Vec::new();
        sink.publish(GameEvent::GameReset);
        sink.publish(GameEvent::HeartsRefunded { amount: 10 });

        assert_eq!(sink.len(), 2);
        assert_eq!(sink[1], GameEvent::HeartsRefunded { amount: 10 });
    }

    #[test]
    fn test_null_sink() {
        let mut sink = NullSink;
        sink.publish(GameEvent::GameReset);
    }
}
