//! Window lines and the line-selection rule.

use std::collections::VecDeque;

use rd_core::{PatronId, WindowId};

/// FIFO line of patrons in front of one service window.
///
/// The head is the patron currently being served.  Once the head has been
/// scheduled it has exactly one outstanding departure event in the queue.
#[derive(Clone, Debug, Default)]
pub struct WindowLine {
    patrons: VecDeque<PatronId>,
}

impl WindowLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The patron at the window, if any.
    #[inline]
    pub fn head(&self) -> Option<PatronId> {
        self.patrons.front().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.patrons.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patrons.is_empty()
    }

    /// Append to the back of the line and return the new length.
    pub(crate) fn join(&mut self, patron: PatronId) -> usize {
        self.patrons.push_back(patron);
        self.patrons.len()
    }

    /// Remove the head, returning it.
    pub(crate) fn pop_head(&mut self) -> Option<PatronId> {
        self.patrons.pop_front()
    }

    /// Patrons in line order, head first.
    pub fn iter(&self) -> impl Iterator<Item = PatronId> + '_ {
        self.patrons.iter().copied()
    }
}

/// The line with the fewest patrons; ties go to the lowest index.
///
/// Returns `None` only for an empty slice.
pub fn shortest_line(lines: &[WindowLine]) -> Option<WindowId> {
    let mut best: Option<(usize, usize)> = None;
    for (i, line) in lines.iter().enumerate() {
        match best {
            Some((_, len)) if line.len() >= len => {}
            _ => best = Some((i, line.len())),
        }
    }
    best.map(|(i, _)| WindowId(i as u16))
}
