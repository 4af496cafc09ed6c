use multiwin_config::ui::UiConfig;
use multiwin_types::WindowId;

use crate::presenter::WindowHost;
use crate::record::WindowRecord;
use crate::state::AppState;

/// Host that records what it was asked to show
#[derive(Default)]
pub(crate) struct FakeHost {
    pub opened: Vec<String>,
    pub closed: Vec<WindowId>,
    pub fail_on: Option<String>,
}

impl WindowHost for FakeHost {
    type Handle = WindowId;
    type Error = String;

    fn open(&mut self, record: &WindowRecord) -> Result<WindowId, String> {
        if self.fail_on.as_deref() == Some(record.title()) {
            return Err(format!("cannot open {}", record.title()));
        }
        self.opened.push(record.title().to_string());
        Ok(record.id())
    }

    fn close(&mut self, handle: WindowId) {
        self.closed.push(handle);
    }
}

pub(crate) fn initialized_state() -> AppState {
    let (tx, _rx) = kanal::unbounded();
    let mut state = AppState::new(tx, &UiConfig::default());
    state.initialize();
    state
}

pub(crate) fn record_ids(state: &AppState) -> Vec<WindowId> {
    state.records().iter().map(|r| r.id()).collect()
}
