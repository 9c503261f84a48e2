use super::event::SimEvent;
use std::collections::VecDeque;

/// FIFO worklist driving a propagation pass.
///
/// Strictly breadth-first: no priorities, no timestamps, and no
/// de-duplication. The same event may legitimately be enqueued several
/// times for the same pin; convergence comes from element evaluation only
/// re-propagating on actual state changes.
pub struct EventQueue {
    queue: VecDeque<SimEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    pub fn push(&mut self, event: SimEvent) {
        self.queue.push_back(event);
    }

    pub fn pop(&mut self) -> Option<SimEvent> {
        self.queue.pop_front()
    }

    pub fn has_events(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
