//! `EventQueue` — sorted-on-insert, arena-indexed singly linked list.
//!
//! # Layout
//!
//! Nodes live in parallel dense arrays (`items`, `times`, `next`) and link
//! to their successor by index.  Slots freed by `dequeue` go on a free list
//! and are reused by later inserts, so the arrays stop growing once the
//! queue reaches its working size.
//!
//! # Performance note
//!
//! `enqueue` is O(n) (linear walk from the front); `peek` and `dequeue` are
//! O(1).  The desk workload is bounded at one arrival plus one departure
//! per patron, and arrivals are consumed front-first, so the walk is short
//! in practice once the run is under way.

use rd_core::SimTime;

use crate::{QueueError, QueueResult};

/// Anything that can be ordered on the simulated timeline.
pub trait Timed {
    fn time(&self) -> SimTime;
}

/// A priority queue of `T` ordered by [`Timed::time`], earliest first,
/// FIFO among equal timestamps.
pub struct EventQueue<T: Timed> {
    /// Payload per slot; `None` for slots on the free list.
    items: Vec<Option<T>>,
    /// Cached `item.time()` per slot so the insert walk never calls back
    /// into `T`.
    times: Vec<SimTime>,
    /// Successor link per slot.
    next: Vec<Option<usize>>,
    head: Option<usize>,
    free: Vec<usize>,
    len: usize,
}

impl<T: Timed> Default for EventQueue<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            times: Vec::new(),
            next:  Vec::new(),
            head:  None,
            free:  Vec::new(),
            len:   0,
        }
    }
}

impl<T: Timed> EventQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            times: Vec::with_capacity(capacity),
            next:  Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Insert `item` keeping the sequence sorted ascending by time.
    ///
    /// The walk advances past every node whose time is ≤ the new item's, so
    /// a newly enqueued item lands after all earlier-enqueued items with the
    /// same timestamp.
    pub fn enqueue(&mut self, item: T) {
        let time = item.time();

        let mut prev = None;
        let mut cur = self.head;
        while let Some(i) = cur {
            if self.times[i] > time {
                break;
            }
            prev = Some(i);
            cur = self.next[i];
        }

        let slot = self.alloc(item, time, cur);
        match prev {
            Some(p) => self.next[p] = Some(slot),
            None    => self.head = Some(slot),
        }
        self.len += 1;
    }

    /// The earliest item, without removing it.
    pub fn peek(&self) -> QueueResult<&T> {
        self.head
            .and_then(|h| self.items[h].as_ref())
            .ok_or(QueueError::Empty { op: "peek" })
    }

    /// Remove and return the earliest item.
    pub fn dequeue(&mut self) -> QueueResult<T> {
        let h = self.head.ok_or(QueueError::Empty { op: "dequeue" })?;
        let item = self.items[h].take().ok_or(QueueError::Empty { op: "dequeue" })?;
        self.head = self.next[h].take();
        self.free.push(h);
        self.len -= 1;
        Ok(item)
    }

    /// Timestamp of the earliest item, or `None` if empty.
    pub fn next_time(&self) -> Option<SimTime> {
        self.head.map(|h| self.times[h])
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every queued item and release the node arrays.
    pub fn clear(&mut self) {
        self.items.clear();
        self.times.clear();
        self.next.clear();
        self.free.clear();
        self.head = None;
        self.len = 0;
    }

    /// Iterate queued items in dequeue order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { queue: self, cur: self.head }
    }

    fn alloc(&mut self, item: T, time: SimTime, next: Option<usize>) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.items[slot] = Some(item);
                self.times[slot] = time;
                self.next[slot] = next;
                slot
            }
            None => {
                self.items.push(Some(item));
                self.times.push(time);
                self.next.push(next);
                self.items.len() - 1
            }
        }
    }
}

/// In-order iterator over an [`EventQueue`].
pub struct Iter<'a, T: Timed> {
    queue: &'a EventQueue<T>,
    cur:   Option<usize>,
}

impl<'a, T: Timed> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let i = self.cur?;
        self.cur = self.queue.next[i];
        self.queue.items[i].as_ref()
    }
}

impl<'a, T: Timed> IntoIterator for &'a EventQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
