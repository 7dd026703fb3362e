//! Ordering guard for asynchronous searches.
//!
//! Every search is tagged with a ticket from a monotonically increasing
//! counter. Only a response carrying the most recently issued ticket may be
//! committed; anything older is dropped no matter when it arrives.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed,
    /// A newer search was issued after this one; the response was dropped.
    Stale,
    /// The latest search failed; previous results were kept.
    Failed,
}

/// Results of the most recent search plus the bookkeeping to keep them
/// that way.
#[derive(Debug, Clone, PartialEq)]
pub struct LatestSearch<T> {
    latest_issued: u64,
    committed: Option<(SearchTicket, T)>,
    in_flight: bool,
    last_error: Option<String>,
}

impl<T> Default for LatestSearch<T> {
    fn default() -> Self {
        Self {
            latest_issued: 0,
            committed: None,
            in_flight: false,
            last_error: None,
        }
    }
}

impl<T> LatestSearch<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the ticket for a new search, making every older ticket stale.
    pub fn begin(&mut self) -> SearchTicket {
        self.latest_issued += 1;
        self.in_flight = true;
        SearchTicket(self.latest_issued)
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.0 == self.latest_issued
    }

    /// Makes every outstanding ticket stale, e.g. when the user navigates
    /// away from the search context.
    pub fn invalidate(&mut self) {
        self.latest_issued += 1;
        self.in_flight = false;
    }

    pub fn commit<E: std::fmt::Display>(&mut self, ticket: SearchTicket, response: Result<T, E>) -> CommitOutcome {
        if !self.is_current(ticket) {
            debug!(ticket = ticket.0, latest = self.latest_issued, "dropping stale search response");
            return CommitOutcome::Stale;
        }
        self.in_flight = false;
        match response {
            Ok(results) => {
                self.committed = Some((ticket, results));
                self.last_error = None;
                CommitOutcome::Committed
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                CommitOutcome::Failed
            }
        }
    }

    pub fn results(&self) -> Option<&T> {
        self.committed.as_ref().map(|(_, results)| results)
    }

    pub fn committed_ticket(&self) -> Option<SearchTicket> {
        self.committed.as_ref().map(|(ticket, _)| *ticket)
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
