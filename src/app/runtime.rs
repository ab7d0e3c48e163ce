use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{select, sync::mpsc};

use crate::catalog::{Catalog, CatalogSource, LoadError, load};
use crate::logic;
use crate::state::Session;
use crate::theme::Settings;
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Spawn the one-shot catalog fetch.
///
/// Inputs:
/// - `source`: Catalog location
/// - `tx`: Channel receiving the single load outcome
///
/// Output:
/// - None; the outcome arrives on `tx`. No retry, no timeout.
fn spawn_catalog_loader(source: CatalogSource, tx: mpsc::UnboundedSender<std::result::Result<Catalog, LoadError>>) {
    tokio::spawn(async move {
        tracing::info!(source = %source, "fetching catalog");
        let res = load(&source).await;
        let _ = tx.send(res);
    });
}

/// What: Spawn the blocking terminal event reader.
///
/// Inputs:
/// - `event_tx`: Channel for terminal events
/// - `cancelled`: Flag set by the runtime on exit
///
/// Output:
/// - None; the thread exits when cancelled or when the receiver is dropped.
///
/// Details:
/// - Polls with a short timeout so cancellation is noticed promptly.
fn spawn_event_thread(event_tx: mpsc::UnboundedSender<CEvent>, cancelled: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => {
                    if let Ok(ev) = crossterm::event::read()
                        && (cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err())
                    {
                        break;
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
    });
}

/// What: Apply the single catalog load outcome to the session.
///
/// Inputs:
/// - `session`: Session in `Loading`
/// - `res`: Loader outcome
///
/// Output:
/// - Catalog installed, or a terminal `Failed` state; errors never propagate further.
pub(crate) fn handle_catalog_result(
    session: &mut Session,
    res: std::result::Result<Catalog, LoadError>,
) {
    match res {
        Ok(catalog) => logic::install_catalog(session, catalog),
        Err(e) => logic::fail_load(session, e.to_string()),
    }
}

/// What: Run the Coursea TUI end-to-end: set up the terminal, start the catalog fetch,
/// drive the event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `source`: Catalog location
/// - `settings`: Parsed settings.conf
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on terminal failures.
///
/// Details:
/// - `COURSEA_TEST_HEADLESS=1` skips terminal setup and input so the loop can run in tests.
/// - Events are processed one at a time; every redraw follows the event that caused it.
pub async fn run(source: CatalogSource, settings: Settings) -> Result<()> {
    let headless = std::env::var("COURSEA_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut session = Session::from_settings(&settings);
    session.catalog_label = source.to_string();

    let (catalog_tx, mut catalog_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<CEvent>();
    let cancelled = Arc::new(AtomicBool::new(false));
    spawn_catalog_loader(source, catalog_tx);
    if !headless {
        spawn_event_thread(event_tx, cancelled.clone());
    }

    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(e) = t.draw(|f| ui(f, &mut session))
        {
            tracing::warn!(error = %e, "failed to draw frame");
        }

        select! {
            Some(ev) = event_rx.recv() => {
                if crate::events::handle_event(ev, &mut session) {
                    break;
                }
            }
            Some(res) = catalog_rx.recv() => {
                handle_catalog_result(&mut session, res);
            }
            else => break,
        }
    }

    cancelled.store(true, Ordering::Relaxed);
    if !headless {
        restore_terminal()?;
    }
    tracing::info!(revision = session.revision, "session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Load outcomes map to session states
    ///
    /// - Input: Parse error, then a fresh session with a catalog
    /// - Output: `Failed` with the error text; `Ready` with the full view
    fn handle_catalog_result_maps_outcomes() {
        let mut s = Session::default();
        let err = crate::catalog::parse_document("nope").expect_err("invalid json");
        handle_catalog_result(&mut s, Err(err));
        assert!(matches!(s.load_state, crate::state::LoadState::Failed(ref m) if m.starts_with("failed to parse catalog")));

        let mut ok = Session::default();
        handle_catalog_result(&mut ok, Ok(Catalog::new(vec![Default::default()])));
        assert_eq!(ok.view, vec![0]);
    }
}
