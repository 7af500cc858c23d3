//! Drain-on-read vote buffer.

use crate::vote::Event;

/// Append-only buffer of votes waiting for the playback client.
///
/// The queue itself is not synchronized; it lives inside a party's lock and
/// every method is called with that lock held. [`drain`](Self::drain) swaps
/// the backing vector out in one step, so a drain observes either all or
/// none of a concurrent append.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventQueue {
    events: Vec<Event>,
}

impl EventQueue {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Appends a vote at the tail.
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Takes every queued vote, oldest first, leaving the queue empty.
    #[must_use = "drained events are gone from the queue"]
    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Number of votes waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no votes are waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Queued votes in cast order, without draining.
    #[must_use]
    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{SongId, UserId};
    use crate::vote::VoteKind;
    use proptest::prelude::*;

    fn vote(kind: VoteKind, n: usize) -> Event {
        Event::new(kind, UserId::new(format!("u{n}")), SongId::new(format!("s{n}")))
    }

    #[test]
    fn test_drain_empties_queue() {
        let mut queue = EventQueue::new();
        queue.push(vote(VoteKind::Up, 1));
        queue.push(vote(VoteKind::Neutral, 2));

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }

    fn kind_strategy() -> impl Strategy<Value = VoteKind> {
        prop_oneof![
            Just(VoteKind::Up),
            Just(VoteKind::Down),
            Just(VoteKind::Neutral)
        ]
    }

    proptest! {
        // Splitting a stream of votes across drains at arbitrary points
        // reproduces the stream exactly.
        #[test]
        fn prop_drains_preserve_cast_order(
            kinds in prop::collection::vec(kind_strategy(), 0..64),
            cuts in prop::collection::vec(any::<bool>(), 64),
        ) {
            let mut queue = EventQueue::new();
            let mut cast = Vec::new();
            let mut seen = Vec::new();

            for (n, kind) in kinds.iter().enumerate() {
                let event = vote(*kind, n);
                cast.push(event.clone());
                queue.push(event);
                if cuts[n] {
                    seen.extend(queue.drain());
                }
            }
            seen.extend(queue.drain());

            prop_assert_eq!(seen, cast);
        }
    }
}
