//! Event handling layer: maps terminal key and mouse events onto controller
//! actions.

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::state::AppState;

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event
/// - `app`: Application state
/// - `query_tx`: Receives the search input after every edit; the runtime
///   debounces it before it is applied
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<String>,
) -> bool {
    match ev {
        CEvent::Key(ke) => handle_key_event(ke, app, query_tx),
        CEvent::Mouse(m) => handle_mouse_event(m, app),
        _ => false,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::sources::{SearchIndex, Snapshot, column_headers};
    use crate::state::{AppState, Signal, StockRow};
    use crate::theme::{MemoryPreferenceStore, PreferenceStore, ThemeController};

    /// Four-row state with the real column layout.
    pub fn app() -> AppState {
        let mk = |t: &str, sector: &str, s: Signal, price: &str| {
            StockRow::new(
                t,
                "",
                sector,
                s,
                vec![
                    t.to_string(),
                    sector.to_string(),
                    price.to_string(),
                    "+0.00%".to_string(),
                    "1".to_string(),
                    "50.0".to_string(),
                    s.label().to_string(),
                    "+1.0%".to_string(),
                ],
            )
        };
        let snapshot = Snapshot {
            date: Some("2025-03-07".to_string()),
            rows: vec![
                mk("ASML.AS", "Tech", Signal::Buy, "€600.00"),
                mk("SHELL.AS", "Energie", Signal::Sell, "€30.00"),
                mk("BESI.AS", "Tech", Signal::Neutral, "€120.00"),
                mk("INGA.AS", "Financials", Signal::BuyStrong, "€15.00"),
            ],
            records: vec![],
        };
        let theme = ThemeController::new(
            Box::new(MemoryPreferenceStore::default()) as Box<dyn PreferenceStore + Send>,
            None,
        );
        AppState::new(snapshot, column_headers(), theme, SearchIndex::default())
    }
}
