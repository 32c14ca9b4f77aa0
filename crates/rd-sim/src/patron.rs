//! Patron records and their arena.
//!
//! # Ownership
//!
//! Events carry a `PatronId`; the patron record keeps the timestamps of its
//! own arrival and departure events.  Neither side holds a reference to the
//! other, so there is no ownership cycle: everything lives in one dense
//! `Vec<Patron>` indexed by id, owned by the simulation for its lifetime.

use rd_core::{PatronId, SimTime};

/// One registrant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Patron {
    pub id: PatronId,
    /// Timestamp of the arrival event that created this patron.
    pub arrival: SimTime,
    /// Timestamp of the scheduled departure event.  `None` until the patron
    /// reaches the head of a line.
    pub departure: Option<SimTime>,
}

/// Dense patron storage.  Ids are handed out in creation order from 0.
#[derive(Default)]
pub struct PatronStore {
    patrons: Vec<Patron>,
}

impl PatronStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { patrons: Vec::with_capacity(capacity) }
    }

    /// Create a patron arriving at `arrival` and return its new id.
    pub fn create(&mut self, arrival: SimTime) -> PatronId {
        let id = PatronId(self.patrons.len() as u32);
        self.patrons.push(Patron { id, arrival, departure: None });
        id
    }

    #[inline]
    pub fn get(&self, id: PatronId) -> Option<&Patron> {
        self.patrons.get(id.index())
    }

    /// Bind `id` to its departure time, returning the updated record.
    pub fn set_departure(&mut self, id: PatronId, departure: SimTime) -> Option<&Patron> {
        let patron = self.patrons.get_mut(id.index())?;
        patron.departure = Some(departure);
        Some(patron)
    }

    pub fn len(&self) -> usize {
        self.patrons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patrons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Patron> {
        self.patrons.iter()
    }
}
