//! Background searches with progress reporting
//!
//! A search runs on its own thread and talks to its caller over a flume
//! channel: any number of [`SearchEvent::Progress`] messages followed by
//! exactly one terminal `Done` or `Failed`. Dropping the [`SearchHandle`]
//! abandons the search; the worker runs to completion and its sends are
//! discarded.

use std::thread;

use flume::{Receiver, Sender};
use tracing::{trace, warn};

use crate::error::{AnalysisError, Result};

/// A message from a running search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent<T> {
    /// Fraction of the search completed, in `[0, 1]`.
    Progress(f64),
    Done(T),
    Failed(AnalysisError),
}

/// Reports progress from inside a search.
///
/// Fractions are clamped to `[0, 1]` and never go backwards.
pub struct ProgressSink<T> {
    tx: Sender<SearchEvent<T>>,
    last: f64,
}

impl<T> ProgressSink<T> {
    pub fn report(&mut self, fraction: f64) {
        let fraction = fraction.clamp(0.0, 1.0).max(self.last);
        self.last = fraction;
        // A closed channel means the caller stopped listening.
        let _ = self.tx.send(SearchEvent::Progress(fraction));
    }
}

/// Caller side of a background search.
pub struct SearchHandle<T> {
    events: Receiver<SearchEvent<T>>,
}

impl<T: Send + 'static> SearchHandle<T> {
    /// Runs `search` on a new thread named `name`.
    ///
    /// The closure receives a [`ProgressSink`] for progress updates; its
    /// return value becomes the terminal event.
    pub fn spawn<F>(name: &str, search: F) -> Self
    where
        F: FnOnce(&mut ProgressSink<T>) -> Result<T> + Send + 'static,
    {
        let (tx, events) = flume::unbounded();
        let label = name.to_string();

        let spawned = thread::Builder::new().name(label.clone()).spawn(move || {
            let mut sink = ProgressSink {
                tx: tx.clone(),
                last: 0.0,
            };
            let event = match search(&mut sink) {
                Ok(value) => SearchEvent::Done(value),
                Err(err) => SearchEvent::Failed(err),
            };
            trace!(search = %label, done = matches!(event, SearchEvent::Done(_)), "search finished");
            let _ = tx.send(event);
        });

        if let Err(err) = spawned {
            // The sender died with the closure, so `wait` reports WorkerLost.
            warn!(search = name, %err, "failed to spawn search thread");
        }

        SearchHandle { events }
    }

    /// The raw event stream.
    pub fn events(&self) -> &Receiver<SearchEvent<T>> {
        &self.events
    }

    /// Blocks until the search ends, passing progress to `on_progress`.
    pub fn wait(self, mut on_progress: impl FnMut(f64)) -> Result<T> {
        for event in self.events.iter() {
            match event {
                SearchEvent::Progress(fraction) => on_progress(fraction),
                SearchEvent::Done(value) => return Ok(value),
                SearchEvent::Failed(err) => return Err(err),
            }
        }
        Err(AnalysisError::WorkerLost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_then_done() {
        let handle = SearchHandle::spawn("count", |progress| {
            for i in 1..=4 {
                progress.report(i as f64 / 4.0);
            }
            Ok(42)
        });

        let mut seen = Vec::new();
        let value = handle.wait(|f| seen.push(f)).unwrap();
        assert_eq!(value, 42);
        assert_eq!(seen, vec![0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_progress_never_decreases() {
        let handle = SearchHandle::spawn("wobble", |progress| {
            progress.report(0.5);
            progress.report(0.2);
            progress.report(7.0);
            Ok(())
        });

        let mut seen = Vec::new();
        handle.wait(|f| seen.push(f)).unwrap();
        assert_eq!(seen, vec![0.5, 0.5, 1.0]);
    }

    #[test]
    fn test_failure_is_terminal_event() {
        let handle: SearchHandle<()> =
            SearchHandle::spawn("fail", |_| Err(AnalysisError::EmptyInput));
        let events: Vec<_> = handle.events().iter().collect();
        assert_eq!(events, vec![SearchEvent::Failed(AnalysisError::EmptyInput)]);
    }

    #[test]
    fn test_panicking_worker_is_reported() {
        let handle: SearchHandle<()> = SearchHandle::spawn("panic", |_| panic!("boom"));
        assert_eq!(handle.wait(|_| {}), Err(AnalysisError::WorkerLost));
    }

    #[test]
    fn test_dropped_handle_does_not_block_worker() {
        let (done_tx, done_rx) = flume::bounded(1);
        let handle = SearchHandle::spawn("abandoned", move |progress| {
            for i in 0..1000 {
                progress.report(i as f64 / 1000.0);
            }
            done_tx.send(()).ok();
            Ok(())
        });
        drop(handle);
        assert!(done_rx.recv_timeout(std::time::Duration::from_secs(10)).is_ok());
    }
}
