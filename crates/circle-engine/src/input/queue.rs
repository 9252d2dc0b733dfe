/// Input event types the engine understands.
/// Coordinates are canvas-local; the bridge translates client coordinates
/// before pushing. Mouse and touch both arrive as pointer events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch/click began at canvas coordinates (x, y).
    PointerDown { x: f64, y: f64 },
    /// A touch/click ended. Carries no position: the gesture ends where the last move was.
    PointerUp,
    /// A touch/cursor moved to canvas coordinates (x, y).
    PointerMove { x: f64, y: f64 },
    /// A custom event from the page (buttons and such).
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events.
/// JS pushes events through the bridge; the runner drains them after each update.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain_keeps_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::PointerMove { x: 11.0, y: 21.0 });
        q.push(InputEvent::PointerUp);
        assert_eq!(q.len(), 3);
        let events = q.drain();
        assert_eq!(events[0], InputEvent::PointerDown { x: 10.0, y: 20.0 });
        assert_eq!(events[2], InputEvent::PointerUp);
        assert!(q.is_empty());
    }

    #[test]
    fn custom_event() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Custom { kind: 7, a: 1.5, b: 2.5, c: 3.5 });
        let first = q.iter().next();
        match first {
            Some(InputEvent::Custom { kind, a, b, c }) => {
                assert_eq!(*kind, 7);
                assert_eq!((*a, *b, *c), (1.5, 2.5, 3.5));
            }
            other => panic!("Expected Custom event, got {other:?}"),
        }
    }
}
