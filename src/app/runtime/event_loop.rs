use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::select;

use crate::logic::actions;
use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;

/// What: Process one message from any runtime channel.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Runtime channels
///
/// Output: `true` if the event loop should exit, `false` to continue
///
/// Details:
/// - Terminal events go to the event layer.
/// - Debounced search values are applied unless they went stale.
/// - Ambient changes only matter while no explicit theme was chosen.
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            crate::events::handle_event(ev, app, &channels.query_tx)
        }
        Some(query) = channels.applied_rx.recv() => {
            actions::apply_search(app, &query);
            false
        }
        Some(pref) = channels.ambient_rx.recv() => {
            if actions::ambient_changed(app, pref) {
                tracing::info!(theme = pref.as_str(), "following system theme");
            }
            false
        }
        else => false
    }
}

/// What: Run the main event loop, rendering after every processed message.
///
/// Inputs:
/// - `terminal`: Optional terminal for rendering (None in headless mode)
/// - `app`: Application state
/// - `channels`: Runtime channels
///
/// Details:
/// - Exits when the event layer reports a quit request.
pub async fn run_event_loop(
    terminal: &mut Option<Terminal<CrosstermBackend<std::io::Stdout>>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(e) = t.draw(|f| ui(f, app))
        {
            tracing::warn!(error = %e, "draw failed");
        }

        if process_channel_messages(app, channels).await {
            break;
        }
    }
}
