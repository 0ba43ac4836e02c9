//! # Search Debouncer
//!
//! Applies the search term only after a quiescence window with no further
//! keystrokes, so the predicate pipeline is not recomputed on every
//! character.
//!
//! ## Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Quiescence Window (300ms)                            │
//! │                                                                         │
//! │  keystroke "w" ──► pending = "w",   timer reset to now + 300ms         │
//! │  keystroke "wi" ─► pending = "wi",  timer reset to now + 300ms         │
//! │  keystroke "wid" ► pending = "wid", timer reset to now + 300ms         │
//! │       ... 300ms of silence ...                                          │
//! │  timer fires ────► emit "wid"                                           │
//! │                                                                         │
//! │  "schedule callback after quiescence; cancel pending on new input"     │
//! │  - a timer reset, never a blocking wait.                               │
//! │                                                                         │
//! │  Filter-spec changes (category/price/stock) do NOT go through here;    │
//! │  they apply immediately.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{sleep, Instant};
use tracing::trace;

/// Default quiescence window for search input.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Feeds raw keystrokes in; settled search terms come out the receiver.
///
/// Dropping the debouncer discards any pending (unsettled) input, the same
/// way tearing down the search box cancels its timer.
///
/// ## Usage
/// ```rust,no_run
/// use catalog_store::debounce::SearchDebouncer;
///
/// # async fn demo() {
/// let (debouncer, mut settled) = SearchDebouncer::spawn_default();
/// debouncer.input("wid");
/// debouncer.input("widget");
/// // 300ms later, exactly one term arrives:
/// assert_eq!(settled.recv().await.as_deref(), Some("widget"));
/// # }
/// ```
#[derive(Debug)]
pub struct SearchDebouncer {
    tx: mpsc::UnboundedSender<String>,
}

impl SearchDebouncer {
    /// Spawns the debounce task with the given quiescence window.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(window: Duration) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (out_tx, out_rx) = mpsc::unbounded_channel();

        tokio::spawn(run(rx, out_tx, window));

        (SearchDebouncer { tx }, out_rx)
    }

    /// Spawns with the default 300ms window.
    pub fn spawn_default() -> (Self, mpsc::UnboundedReceiver<String>) {
        SearchDebouncer::spawn(DEFAULT_DEBOUNCE)
    }

    /// Feeds one raw input value, resetting the quiescence timer.
    ///
    /// Only the latest value is kept; earlier unsettled values are
    /// superseded.
    pub fn input(&self, term: impl Into<String>) {
        // send only fails when the task is gone, and then there is nobody
        // left to debounce for
        let _ = self.tx.send(term.into());
    }
}

async fn run(
    mut input: mpsc::UnboundedReceiver<String>,
    output: mpsc::UnboundedSender<String>,
    window: Duration,
) {
    let mut pending: Option<String> = None;
    let timer = sleep(window);
    tokio::pin!(timer);

    loop {
        tokio::select! {
            received = input.recv() => match received {
                Some(term) => {
                    trace!(term = %term, "Search input; timer reset");
                    pending = Some(term);
                    timer.as_mut().reset(Instant::now() + window);
                }
                // input side dropped: discard pending, stop
                None => break,
            },
            () = timer.as_mut(), if pending.is_some() => {
                if let Some(term) = pending.take() {
                    trace!(term = %term, "Search input settled");
                    if output.send(term).is_err() {
                        break;
                    }
                }
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::task::yield_now;
    use tokio::time::advance;

    /// Feed one input and let the debounce task observe it before the
    /// clock moves.
    async fn type_term(debouncer: &SearchDebouncer, term: &str) {
        debouncer.input(term);
        yield_now().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_latest_term_settles() {
        let (debouncer, mut settled) = SearchDebouncer::spawn(DEFAULT_DEBOUNCE);

        type_term(&debouncer, "w").await;
        type_term(&debouncer, "wi").await;
        type_term(&debouncer, "widget").await;

        advance(Duration::from_millis(301)).await;

        assert_eq!(settled.recv().await.as_deref(), Some("widget"));
        assert!(settled.try_recv().is_err()); // the earlier inputs never fire
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_input_resets_the_window() {
        let (debouncer, mut settled) = SearchDebouncer::spawn(DEFAULT_DEBOUNCE);

        type_term(&debouncer, "wid").await;
        advance(Duration::from_millis(200)).await;
        assert!(settled.try_recv().is_err()); // window not over yet

        type_term(&debouncer, "widget").await;
        advance(Duration::from_millis(200)).await;
        assert!(settled.try_recv().is_err()); // reset pushed the deadline out

        advance(Duration::from_millis(101)).await;
        assert_eq!(settled.recv().await.as_deref(), Some("widget"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_quiescence_windows_both_settle() {
        let (debouncer, mut settled) = SearchDebouncer::spawn(DEFAULT_DEBOUNCE);

        type_term(&debouncer, "first").await;
        advance(Duration::from_millis(301)).await;
        assert_eq!(settled.recv().await.as_deref(), Some("first"));

        type_term(&debouncer, "second").await;
        advance(Duration::from_millis(301)).await;
        assert_eq!(settled.recv().await.as_deref(), Some("second"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_discards_pending_input() {
        let (debouncer, mut settled) = SearchDebouncer::spawn(DEFAULT_DEBOUNCE);

        debouncer.input("never settles");
        drop(debouncer);

        advance(Duration::from_millis(500)).await;
        assert!(settled.recv().await.is_none());
    }
}
