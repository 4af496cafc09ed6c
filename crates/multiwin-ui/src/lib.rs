use multiwin_config::ui::UiConfig;
use multiwin_core::{AppState, Driver, Step};
use multiwin_types::WindowEvent;

pub mod error;
pub mod host;

pub use error::UiError;
pub use host::SlintHost;

slint::include_modules!();

/// Opens the initial window and runs the Slint event loop until quit
pub fn ui_loop(config: &UiConfig) -> Result<(), UiError> {
    let (tx, rx) = kanal::unbounded::<WindowEvent>();

    let state = AppState::new(tx, config);
    let mut driver = Driver::start(state, SlintHost, config.quit_when_empty)?;

    // Menu and close callbacks only enqueue events, so windows are never
    // dropped from inside their own callbacks
    let rx = rx.to_async();
    slint::spawn_local(async move {
        while let Ok(event) = rx.recv().await {
            tracing::debug!("[SLINT] {event}");
            if driver.dispatch(event) == Step::Quit {
                slint::quit_event_loop().ok();
                break;
            }
        }
    })?;

    slint::run_event_loop_until_quit()?;
    tracing::info!("Event loop finished");

    Ok(())
}
