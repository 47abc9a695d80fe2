use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::theme::ThemePreference;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - The event loop owns every receiver; workers get clones of the senders.
/// - `query_tx` carries every search edit, `applied_rx` the debounced value.
pub struct Channels {
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the event and ambient threads stop polling.
    pub cancelled: Arc<AtomicBool>,
    pub query_tx: mpsc::UnboundedSender<String>,
    pub query_rx: Option<mpsc::UnboundedReceiver<String>>,
    pub applied_tx: mpsc::UnboundedSender<String>,
    pub applied_rx: mpsc::UnboundedReceiver<String>,
    pub ambient_tx: mpsc::UnboundedSender<ThemePreference>,
    pub ambient_rx: mpsc::UnboundedReceiver<ThemePreference>,
}

impl Channels {
    /// What: Create all runtime channels.
    ///
    /// Output:
    /// - Fresh channels; `query_rx` is taken by the search worker once.
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (query_tx, query_rx) = mpsc::unbounded_channel::<String>();
        let (applied_tx, applied_rx) = mpsc::unbounded_channel::<String>();
        let (ambient_tx, ambient_rx) = mpsc::unbounded_channel::<ThemePreference>();
        Self {
            event_tx,
            event_rx,
            cancelled: Arc::new(AtomicBool::new(false)),
            query_tx,
            query_rx: Some(query_rx),
            applied_tx,
            applied_rx,
            ambient_tx,
            ambient_rx,
        }
    }
}
