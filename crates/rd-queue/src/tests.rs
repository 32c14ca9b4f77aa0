//! Unit tests for rd-queue.

use rd_core::SimTime;

use crate::{EventQueue, QueueError, Timed};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Minimal timed payload: a timestamp plus a label to check tie order.
#[derive(Debug, Clone, PartialEq)]
struct Ev {
    at:    u64,
    label: &'static str,
}

impl Timed for Ev {
    fn time(&self) -> SimTime {
        SimTime(self.at)
    }
}

fn ev(at: u64, label: &'static str) -> Ev {
    Ev { at, label }
}

fn drain(q: &mut EventQueue<Ev>) -> Vec<Ev> {
    let mut out = Vec::new();
    while !q.is_empty() {
        out.push(q.dequeue().unwrap());
    }
    out
}

// ── Ordering ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ordering {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn dequeues_in_ascending_time() {
        let mut q = EventQueue::new();
        for (t, l) in [(50, "e"), (10, "a"), (40, "d"), (20, "b"), (30, "c")] {
            q.enqueue(ev(t, l));
        }
        let times: Vec<u64> = drain(&mut q).iter().map(|e| e.at).collect();
        assert_eq!(times, vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn equal_timestamps_are_fifo() {
        let mut q = EventQueue::new();
        q.enqueue(ev(5, "A"));
        q.enqueue(ev(5, "B"));
        assert_eq!(q.dequeue().unwrap().label, "A");
        assert_eq!(q.dequeue().unwrap().label, "B");
    }

    #[test]
    fn ties_stay_fifo_among_mixed_inserts() {
        let mut q = EventQueue::new();
        q.enqueue(ev(7, "x1"));
        q.enqueue(ev(3, "early"));
        q.enqueue(ev(7, "x2"));
        q.enqueue(ev(9, "late"));
        q.enqueue(ev(7, "x3"));
        let labels: Vec<&str> = drain(&mut q).iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["early", "x1", "x2", "x3", "late"]);
    }

    #[test]
    fn insert_before_head_when_strictly_earlier() {
        let mut q = EventQueue::new();
        q.enqueue(ev(10, "b"));
        q.enqueue(ev(1, "a"));
        assert_eq!(q.peek().unwrap().label, "a");
        assert_eq!(q.next_time(), Some(SimTime(1)));
    }

    #[test]
    fn iter_matches_dequeue_order() {
        let mut q = EventQueue::new();
        for (t, l) in [(3, "c"), (1, "a"), (2, "b"), (1, "a2")] {
            q.enqueue(ev(t, l));
        }
        let seen: Vec<&str> = q.iter().map(|e| e.label).collect();
        assert_eq!(seen, vec!["a", "a2", "b", "c"]);
        let drained: Vec<&str> = drain(&mut q).iter().map(|e| e.label).collect();
        assert_eq!(seen, drained);
    }

    #[test]
    fn interleaved_enqueue_and_dequeue_reuse_slots() {
        let mut q = EventQueue::with_capacity(4);
        q.enqueue(ev(1, "a"));
        q.enqueue(ev(4, "d"));
        assert_eq!(q.dequeue().unwrap().label, "a");
        q.enqueue(ev(2, "b"));
        q.enqueue(ev(4, "d2"));
        q.enqueue(ev(3, "c"));
        let labels: Vec<&str> = drain(&mut q).iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["b", "c", "d", "d2"]);
    }

    #[test]
    fn random_sequence_is_sorted_and_stable() {
        let mut rng = SmallRng::seed_from_u64(12345);
        let mut q = EventQueue::new();
        let mut order = 0u64;
        let mut inputs = Vec::new();
        for _ in 0..200 {
            let t = rng.gen_range(0..20u64);
            inputs.push((t, order));
            q.enqueue(Seq { at: t, order });
            order += 1;
        }
        inputs.sort_by_key(|&(t, o)| (t, o));
        let mut out = Vec::new();
        while let Ok(e) = q.dequeue() {
            out.push((e.at, e.order));
        }
        assert_eq!(out, inputs);
    }

    struct Seq {
        at:    u64,
        order: u64,
    }

    impl Timed for Seq {
        fn time(&self) -> SimTime {
            SimTime(self.at)
        }
    }
}

// ── Empty-container behavior ──────────────────────────────────────────────────

#[cfg(test)]
mod empty {
    use super::*;

    #[test]
    fn peek_on_empty_errors() {
        let q: EventQueue<Ev> = EventQueue::new();
        assert_eq!(q.peek().unwrap_err(), QueueError::Empty { op: "peek" });
        assert_eq!(q.next_time(), None);
    }

    #[test]
    fn dequeue_on_empty_errors() {
        let mut q: EventQueue<Ev> = EventQueue::new();
        assert_eq!(q.dequeue().unwrap_err(), QueueError::Empty { op: "dequeue" });
    }

    #[test]
    fn dequeue_after_drain_errors() {
        let mut q = EventQueue::new();
        q.enqueue(ev(1, "a"));
        q.dequeue().unwrap();
        assert!(q.is_empty());
        assert!(q.dequeue().is_err());
        assert!(q.peek().is_err());
    }

    #[test]
    fn clear_empties_queue() {
        let mut q = EventQueue::new();
        q.enqueue(ev(1, "a"));
        q.enqueue(ev(2, "b"));
        assert_eq!(q.len(), 2);
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert!(q.peek().is_err());
        assert_eq!(q.iter().count(), 0);

        // Usable again after clearing.
        q.enqueue(ev(3, "c"));
        assert_eq!(q.peek().unwrap().label, "c");
    }

    #[test]
    fn len_tracks_inserts_and_removals() {
        let mut q = EventQueue::new();
        assert_eq!(q.len(), 0);
        q.enqueue(ev(1, "a"));
        q.enqueue(ev(1, "b"));
        assert_eq!(q.len(), 2);
        q.dequeue().unwrap();
        assert_eq!(q.len(), 1);
    }
}
