//! Keyboard-driven search through the debouncer, as the runtime wires it.

use std::time::Duration;

use beurs_cowboy::events::handle_event;
use beurs_cowboy::logic::actions;
use beurs_cowboy::sources::{SearchIndex, Snapshot, column_headers};
use beurs_cowboy::state::{AppState, Signal, StockRow};
use beurs_cowboy::theme::{MemoryPreferenceStore, PreferenceStore, ThemeController};
use beurs_cowboy::util::Debouncer;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

fn app() -> AppState {
    let mk = |t: &str, sector: &str, s: Signal| {
        StockRow::new(t, "", sector, s, vec![t.to_string(), sector.to_string()])
    };
    let snapshot = Snapshot {
        date: None,
        rows: vec![
            mk("ASML.AS", "Tech", Signal::Buy),
            mk("SHELL.AS", "Energie", Signal::Sell),
            mk("BESI.AS", "Tech", Signal::Neutral),
        ],
        records: vec![],
    };
    let theme = ThemeController::new(
        Box::new(MemoryPreferenceStore::default()) as Box<dyn PreferenceStore + Send>,
        None,
    );
    AppState::new(snapshot, column_headers(), theme, SearchIndex::default())
}

fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty()))
}

#[tokio::test(start_paused = true)]
/// What: Typing applies the search once the input settles, not per keystroke
///
/// - Input: `/` then "ener", debounced at 120ms
/// - Output: Rows unchanged right after typing; only SHELL.AS visible after the quiet period
async fn typed_query_applies_after_quiet_period() {
    let mut app = app();
    let (query_tx, mut query_rx) = mpsc::unbounded_channel::<String>();
    let (applied_tx, mut applied_rx) = mpsc::unbounded_channel::<String>();
    let debouncer = Debouncer::new(Duration::from_millis(120), move |q: String| {
        let _ = applied_tx.send(q);
    });

    handle_event(key('/'), &mut app, &query_tx);
    for c in "ener".chars() {
        handle_event(key(c), &mut app, &query_tx);
    }
    while let Ok(q) = query_rx.try_recv() {
        debouncer.call(q);
    }
    assert_eq!(app.rows.visible_count(), 3);

    let applied = tokio::time::timeout(Duration::from_secs(1), applied_rx.recv())
        .await
        .expect("debounced value")
        .expect("channel open");
    assert_eq!(applied, "ener");
    assert!(actions::apply_search(&mut app, &applied));
    assert_eq!(app.rows.visible_count(), 1);
    assert_eq!(app.selected.as_deref(), Some("SHELL.AS"));
}

#[tokio::test]
/// What: A debounced value that no longer matches the input is discarded
async fn stale_query_is_ignored() {
    let mut app = app();
    let (query_tx, _query_rx) = mpsc::unbounded_channel::<String>();
    handle_event(key('/'), &mut app, &query_tx);
    handle_event(key('t'), &mut app, &query_tx);
    handle_event(key('e'), &mut app, &query_tx);
    assert!(!actions::apply_search(&mut app, "t"));
    assert_eq!(app.rows.visible_count(), 3);
    assert!(actions::apply_search(&mut app, "te"));
    assert_eq!(app.rows.visible_count(), 2);
}
