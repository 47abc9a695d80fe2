use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::theme::{AmbientProbe, ThemePreference};
use crate::util::Debouncer;

/// How often the ambient watcher checks the cancellation flag while waiting.
const CANCEL_CHECK: Duration = Duration::from_millis(100);

/// What: Spawn the thread that reads terminal events.
///
/// Inputs:
/// - `headless`: When `true`, no thread is started
/// - `event_tx`: Receives every crossterm event
/// - `cancelled`: Set by the runtime on exit
///
/// Details:
/// - Polls with a short timeout so the flag is checked regularly.
/// - Read errors are transient and skipped; a closed channel ends the thread.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => {
                    if let Ok(ev) = crossterm::event::read() {
                        if cancelled.load(Ordering::Relaxed) {
                            break;
                        }
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) => {}
                Err(e) => tracing::trace!(error = %e, "event poll failed"),
            }
        }
        tracing::debug!("event thread stopped");
    });
}

/// What: Spawn the search worker that debounces input before it is applied.
///
/// Inputs:
/// - `query_rx`: Every edit of the search input
/// - `applied_tx`: Receives the value once the input has been quiet for `wait`
/// - `wait`: Quiet period
///
/// Details:
/// - Only the last value of a burst is delivered; the loop still discards it
///   when the input changed again in the meantime.
pub fn spawn_search_worker(
    mut query_rx: mpsc::UnboundedReceiver<String>,
    applied_tx: mpsc::UnboundedSender<String>,
    wait: Duration,
) {
    tokio::spawn(async move {
        let debouncer = Debouncer::new(wait, move |query: String| {
            tracing::debug!(query = %query, "search input settled");
            if applied_tx.send(query).is_err() {
                tracing::debug!("applied search channel closed");
            }
        });
        while let Some(query) = query_rx.recv().await {
            debouncer.call(query);
        }
    });
}

/// What: Spawn the thread that follows the system light/dark preference.
///
/// Inputs:
/// - `interval`: Poll interval; `None` disables the watcher
/// - `probe`: Ambient source
/// - `ambient_tx`: Receives each change
/// - `cancelled`: Set by the runtime on exit
///
/// Details:
/// - The baseline is the probe's own answer when the watcher starts. Startup
///   detection may consult sources the probe does not poll, so comparing
///   against it would report a change that never happened.
/// - A probe that cannot tell (returns `None`) never produces a change.
/// - Polling may run a subprocess, so it stays off the async runtime.
pub fn spawn_ambient_watcher<P>(
    interval: Option<Duration>,
    probe: P,
    ambient_tx: mpsc::UnboundedSender<ThemePreference>,
    cancelled: Arc<AtomicBool>,
) where
    P: AmbientProbe + Send + 'static,
{
    let Some(interval) = interval else {
        tracing::debug!("ambient watcher disabled");
        return;
    };
    let mut last = probe.probe();
    tracing::debug!(baseline = ?last, "ambient watcher started");
    std::thread::spawn(move || {
        loop {
            let wake = Instant::now() + interval;
            while Instant::now() < wake {
                if cancelled.load(Ordering::Relaxed) {
                    return;
                }
                std::thread::sleep(CANCEL_CHECK.min(wake.saturating_duration_since(Instant::now())));
            }
            if cancelled.load(Ordering::Relaxed) {
                return;
            }
            let Some(current) = probe.probe() else {
                continue;
            };
            if last != Some(current) {
                tracing::info!(theme = current.as_str(), "ambient preference changed");
                last = Some(current);
                if ambient_tx.send(current).is_err() {
                    return;
                }
            }
        }
    });
}
