//! Generation counter for discarding stale fetch responses.
//!
//! DESIGN
//! ======
//! Manual refetch flows (list reload after a mutation) capture the
//! generation at spawn time and only commit the response if it is still
//! current when the future resolves. A reload started later bumps the
//! counter, so the earlier response cannot overwrite newer state.

#[cfg(test)]
#[path = "refetch_test.rs"]
mod refetch_test;

/// Monotonic fetch generation for one owning view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Generation {
    current: u64,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch; returns the ticket the response must present.
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    /// Whether a ticket from `begin` is still the latest fetch.
    pub fn is_current(self, ticket: u64) -> bool {
        self.current == ticket
    }
}
