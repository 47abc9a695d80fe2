use std::sync::atomic::Ordering;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::args::Args;
use crate::theme::{SystemAmbient, load_settings, settings_path};

use super::terminal::{install_panic_hook, restore_terminal, setup_terminal};

mod channels;
mod event_loop;
mod init;
mod workers;

use channels::Channels;
use event_loop::run_event_loop;
use init::{initialize_app_state, startup_ambient};
use workers::{spawn_ambient_watcher, spawn_event_thread, spawn_search_worker};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Environment variable that bypasses terminal setup (`1` enables it).
const HEADLESS_ENV: &str = "BEURS_COWBOY_HEADLESS";

/// What: Run the signal board end-to-end: load settings and data, start the
/// background workers, drive the event loop and restore the terminal on exit.
///
/// Inputs:
/// - `args`: Parsed command-line flags; they override `settings.conf`
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// Details:
/// - Data problems never fail the run: a missing snapshot shows an empty table
///   with a status message.
/// - The ambient preference is detected before the event thread starts,
///   since the terminal background query reads stdin.
/// - With `BEURS_COWBOY_HEADLESS=1` no terminal is touched and no event thread
///   runs; the loop then idles until cancelled.
pub async fn run(args: Args) -> Result<()> {
    let headless = std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1");

    let mut settings = load_settings(&settings_path());
    args.apply_to(&mut settings);
    tracing::debug!(settings = ?settings, headless, "effective settings");

    let ambient = startup_ambient(&settings, headless);
    let mut app = initialize_app_state(&settings, ambient, headless);

    if !headless {
        install_panic_hook();
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut channels = Channels::new();
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.cancelled.clone(),
    );
    if let Some(query_rx) = channels.query_rx.take() {
        spawn_search_worker(
            query_rx,
            channels.applied_tx.clone(),
            settings.search_debounce(),
        );
    }
    let interval = if headless {
        None
    } else {
        settings.ambient_poll_interval()
    };
    spawn_ambient_watcher(
        interval,
        SystemAmbient,
        channels.ambient_tx.clone(),
        channels.cancelled.clone(),
    );

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    tracing::debug!("main loop exited");
    channels.cancelled.store(true, Ordering::Relaxed);

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
