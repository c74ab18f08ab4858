use tracing::debug;

use crate::{error::FetchError, model::WeatherSnapshot};

/// Handle for one issued fetch, stamped with its sequence number.
///
/// Completions are only honored for the most recently issued ticket, so a
/// slow response to an old query can never overwrite a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// What [`QuerySession::complete_fetch`] did with a finished fetch.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The snapshot was replaced with the fetched one.
    Applied,
    /// The newest fetch failed; the previous snapshot (if any) is untouched.
    Failed(FetchError),
    /// The completion belonged to a superseded fetch and was discarded.
    Stale,
}

/// What the result area should show; exactly one state holds at a time.
#[derive(Debug, PartialEq)]
pub enum ViewState<'a> {
    /// A fetch is outstanding; nothing else is shown, even if an older
    /// snapshot exists.
    Loading,
    /// The most recent successful fetch.
    Populated(&'a WeatherSnapshot),
    /// Nothing fetched yet and nothing in flight.
    Empty,
}

/// Owns the query string, the latest snapshot, and the fetch bookkeeping.
///
/// `issued` counts fetches as they start, `settled` records the newest fetch
/// whose completion has been accepted; a fetch is in flight exactly while
/// `issued > settled`.
#[derive(Debug)]
pub struct QuerySession {
    query: String,
    snapshot: Option<WeatherSnapshot>,
    issued: u64,
    settled: u64,
}

impl QuerySession {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            snapshot: None,
            issued: 0,
            settled: 0,
        }
    }

    /// The query the next fetch will use.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query string. Takes effect on the next [`Self::begin_fetch`];
    /// an already outstanding fetch still completes under its own ticket.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Last successful snapshot, regardless of render state.
    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }

    /// Stamp a new fetch. Starting a second fetch while one is outstanding
    /// supersedes the first: its eventual completion will be discarded.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket(self.issued)
    }

    /// Record the result of a finished fetch.
    ///
    /// Only the most recently issued ticket settles the session. A success
    /// replaces the snapshot wholesale; a failure leaves it untouched. Both
    /// clear the in-flight state. Stale completions change nothing at all,
    /// not even the in-flight state: the fetch that superseded them is still
    /// outstanding.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<WeatherSnapshot, FetchError>,
    ) -> FetchOutcome {
        if ticket.0 != self.issued {
            debug!(ticket = ticket.0, newest = self.issued, "discarding stale fetch completion");
            return FetchOutcome::Stale;
        }

        self.settled = self.issued;

        match result {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                FetchOutcome::Applied
            }
            Err(err) => FetchOutcome::Failed(err),
        }
    }

    /// A fetch has been issued and its completion has not been accepted yet.
    pub fn is_fetching(&self) -> bool {
        self.issued > self.settled
    }

    /// The single render state the result area should show.
    pub fn view(&self) -> ViewState<'_> {
        if self.is_fetching() {
            ViewState::Loading
        } else {
            match self.snapshot.as_ref() {
                Some(snapshot) => ViewState::Populated(snapshot),
                None => ViewState::Empty,
            }
        }
    }
}
