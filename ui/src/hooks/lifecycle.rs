//! The fetch lifecycle state machine behind `use_resource`.
//!
//! This is deliberately free of yew and futures so the ordering rules
//! can be unit tested without an executor. The hook drives it: every
//! fetch takes a ticket from `begin`, and only the latest-issued ticket
//! is allowed to `settle`. Responses from superseded fetches (an older
//! refresh, or anything in flight when the component unmounted) are
//! discarded, so the state a consumer sees always corresponds to the
//! last call it made.

use super::FetchState;

/// Identifies one fetch attempt. Monotonically increasing per lifecycle.
pub type Ticket = u64;

/// Snapshot of the lifecycle handed to consumers on each transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    pub data: FetchState<T>,
    pub loading: bool,
    /// Set when the displayed data survived a failed refresh.
    pub stale: bool,
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct FetchLifecycle<T> {
    issued: Ticket,
    closed: bool,
    data: FetchState<T>,
    loading: bool,
    stale: bool,
    error: Option<String>,
}

impl<T> Default for FetchLifecycle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FetchLifecycle<T> {
    pub fn new() -> Self {
        Self {
            issued: 0,
            closed: false,
            data: FetchState::NotFetched,
            loading: false,
            stale: false,
            error: None,
        }
    }

    /// Start a fetch. The returned ticket must be presented to `settle`;
    /// issuing a newer ticket supersedes every older one. Returns `None`
    /// on a closed lifecycle: a refetch emitted by something that
    /// outlived the component (a mutation future, a timer) must not put
    /// a request on the wire for a dead consumer.
    pub fn begin(&mut self) -> Option<Ticket> {
        if self.closed {
            return None;
        }
        self.issued += 1;
        self.loading = true;
        self.error = None;
        Some(self.issued)
    }

    /// Apply a fetch result. Returns false (and changes nothing) when
    /// the ticket has been superseded by a newer `begin` or by
    /// `invalidate`.
    pub fn settle(
        &mut self,
        ticket: Ticket,
        result: Result<T, String>,
    ) -> bool {
        if ticket != self.issued {
            return false;
        }
        self.loading = false;
        match result {
            Ok(value) => {
                self.data = FetchState::Fetched(value);
                self.stale = false;
                self.error = None;
            }
            Err(message) => {
                // Keep the last good payload visible; the stale flag
                // tells consumers it predates the failure.
                self.stale = self.data.is_fetched();
                self.error = Some(message);
            }
        }
        true
    }

    /// Invalidate all outstanding tickets and close the lifecycle.
    /// Called when the owning component unmounts: no in-flight response
    /// can apply afterwards, and no new fetch can start until `resume`.
    pub fn invalidate(&mut self) {
        self.issued += 1;
        self.closed = true;
    }

    /// Reopen a closed lifecycle. Called when the effect re-runs after
    /// a dependency change, where the old effect's destructor has just
    /// invalidated.
    pub fn resume(&mut self) {
        self.closed = false;
    }
}

impl<T: Clone> FetchLifecycle<T> {
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot {
            data: self.data.clone(),
            loading: self.loading,
            stale: self.stale,
            error: self.error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetched<T: Clone>(lifecycle: &FetchLifecycle<T>) -> Option<T> {
        lifecycle.snapshot().data.as_ref().cloned()
    }

    #[test]
    fn initial_fetch_reaches_ready() {
        let mut lc = FetchLifecycle::new();
        let t = lc.begin().unwrap();
        assert!(lc.snapshot().loading);

        assert!(lc.settle(t, Ok(vec![1, 2, 3])));
        let snap = lc.snapshot();
        assert!(!snap.loading);
        assert!(!snap.stale);
        assert_eq!(snap.error, None);
        assert_eq!(snap.data, FetchState::Fetched(vec![1, 2, 3]));
    }

    #[test]
    fn last_refresh_wins_when_responses_arrive_out_of_order() {
        let mut lc = FetchLifecycle::new();
        let r1 = lc.begin().unwrap();
        let r2 = lc.begin().unwrap();

        // R2's response arrives first and applies.
        assert!(lc.settle(r2, Ok("new")));
        assert_eq!(fetched(&lc), Some("new"));

        // R1 resolves afterwards and must be discarded.
        assert!(!lc.settle(r1, Ok("old")));
        let snap = lc.snapshot();
        assert_eq!(snap.data, FetchState::Fetched("new"));
        assert!(!snap.loading);
        assert_eq!(snap.error, None);
    }

    #[test]
    fn stale_error_does_not_overwrite_newer_success() {
        let mut lc = FetchLifecycle::new();
        let r1 = lc.begin().unwrap();
        let r2 = lc.begin().unwrap();

        assert!(lc.settle(r2, Ok(7)));
        assert!(!lc.settle(r1, Err("timeout".to_string())));

        let snap = lc.snapshot();
        assert_eq!(snap.data, FetchState::Fetched(7));
        assert_eq!(snap.error, None);
        assert!(!snap.stale);
    }

    #[test]
    fn unmount_invalidation_blocks_late_responses() {
        let mut lc = FetchLifecycle::<u32>::new();
        let t = lc.begin().unwrap();
        let before = lc.snapshot();

        lc.invalidate();
        assert!(!lc.settle(t, Ok(42)));
        assert!(!lc.settle(t, Err("boom".to_string())));
        assert_eq!(lc.snapshot().data, before.data);
    }

    #[test]
    fn failed_refresh_retains_data_and_flags_it_stale() {
        let mut lc = FetchLifecycle::new();
        let t1 = lc.begin().unwrap();
        assert!(lc.settle(t1, Ok(vec!["booking-1"])));

        let t2 = lc.begin().unwrap();
        assert!(lc.settle(t2, Err("server error".to_string())));

        let snap = lc.snapshot();
        assert_eq!(snap.data, FetchState::Fetched(vec!["booking-1"]));
        assert!(snap.stale);
        assert_eq!(snap.error.as_deref(), Some("server error"));
    }

    #[test]
    fn failure_before_any_data_is_not_stale() {
        let mut lc = FetchLifecycle::<u32>::new();
        let t = lc.begin().unwrap();
        assert!(lc.settle(t, Err("offline".to_string())));

        let snap = lc.snapshot();
        assert_eq!(snap.data, FetchState::NotFetched);
        assert!(!snap.stale);
        assert_eq!(snap.error.as_deref(), Some("offline"));
    }

    #[test]
    fn repeated_refresh_with_unchanged_payload_is_idempotent() {
        let mut lc = FetchLifecycle::new();
        let t1 = lc.begin().unwrap();
        assert!(lc.settle(t1, Ok(vec![1, 2])));
        let first = lc.snapshot();

        let t2 = lc.begin().unwrap();
        assert!(lc.settle(t2, Ok(vec![1, 2])));
        let second = lc.snapshot();

        assert_eq!(first.data, second.data);
        assert_eq!(first, second);
    }

    #[test]
    fn refresh_clears_previous_error_while_loading() {
        let mut lc = FetchLifecycle::<u32>::new();
        let t1 = lc.begin().unwrap();
        assert!(lc.settle(t1, Err("offline".to_string())));

        lc.begin().unwrap();
        let snap = lc.snapshot();
        assert!(snap.loading);
        assert_eq!(snap.error, None);
    }

    #[test]
    fn begin_after_unmount_is_refused() {
        let mut lc = FetchLifecycle::new();
        let t = lc.begin().unwrap();
        assert!(lc.settle(t, Ok("data")));

        // A refetch arriving after the destructor ran must not start a
        // new fetch for the dead consumer.
        lc.invalidate();
        assert!(lc.begin().is_none());
        assert!(!lc.snapshot().loading);
    }

    #[test]
    fn resume_reopens_after_dependency_change() {
        let mut lc = FetchLifecycle::<u32>::new();
        let stale_ticket = lc.begin().unwrap();

        // Dep change: old effect invalidates, new effect resumes and
        // fetches again.
        lc.invalidate();
        lc.resume();
        let fresh_ticket = lc.begin().unwrap();

        assert!(!lc.settle(stale_ticket, Ok(1)));
        assert!(lc.settle(fresh_ticket, Ok(2)));
        assert_eq!(lc.snapshot().data, FetchState::Fetched(2));
    }
}
