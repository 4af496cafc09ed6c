use multiwin_core::{WindowHost, WindowRecord};
use slint::{CloseRequestResponse, ComponentHandle};

use crate::RecordWindow;
use crate::error::UiError;

/// Presents records as Slint `RecordWindow`s
#[derive(Default)]
pub struct SlintHost;

impl WindowHost for SlintHost {
    type Handle = RecordWindow;
    type Error = UiError;

    fn open(&mut self, record: &WindowRecord) -> Result<RecordWindow, UiError> {
        let window = RecordWindow::new()?;
        window.set_record_title(record.title().into());

        {
            let actions = record.actions().clone();
            window.on_new_window(move || actions.new_window());
        }
        {
            let actions = record.actions().clone();
            window.on_exit(move || actions.exit());
        }
        {
            // The frame hides itself; the record goes away once the event is handled
            let actions = record.actions().clone();
            window.window().on_close_requested(move || {
                actions.close();
                CloseRequestResponse::HideWindow
            });
        }

        window.show()?;
        Ok(window)
    }

    fn close(&mut self, handle: RecordWindow) {
        if let Err(e) = handle.hide() {
            tracing::warn!("[SLINT] failed to hide window: {e}");
        }
    }
}
