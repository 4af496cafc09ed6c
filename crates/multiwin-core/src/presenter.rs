use multiwin_types::WindowId;

use crate::record::WindowRecord;
use crate::state::AppState;

/// Toolkit side of the presenter: turns one record into one on-screen window
pub trait WindowHost {
    type Handle;
    type Error;

    /// Shows a window titled after `record` with its menu wired to the record's actions
    fn open(&mut self, record: &WindowRecord) -> Result<Self::Handle, Self::Error>;

    /// Takes the window off screen
    fn close(&mut self, handle: Self::Handle);
}

/// Keeps one live window per record, keyed by record identity
pub struct Presenter<H: WindowHost> {
    host: H,
    windows: Vec<(WindowId, H::Handle)>,
}

impl<H: WindowHost> Presenter<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            windows: Vec::new(),
        }
    }

    /// Closes windows whose record is gone and opens windows for new records.
    ///
    /// A record whose window fails to open is dropped from `state`, so every
    /// remaining record has a window. Returns the first open error.
    pub fn sync(&mut self, state: &mut AppState) -> Result<(), H::Error> {
        let records = state.records();
        let (kept, stale): (Vec<_>, Vec<_>) = std::mem::take(&mut self.windows)
            .into_iter()
            .partition(|(id, _)| records.iter().any(|r| r.id() == *id));

        for (id, handle) in stale {
            tracing::debug!(window = %id, "closing window");
            self.host.close(handle);
        }
        self.windows = kept;

        let mut failed = Vec::new();
        let mut first_error = None;
        for record in records {
            if self.windows.iter().any(|(id, _)| *id == record.id()) {
                continue;
            }
            match self.host.open(record) {
                Ok(handle) => {
                    tracing::debug!(window = %record.id(), title = record.title(), "window opened");
                    self.windows.push((record.id(), handle));
                }
                Err(e) => {
                    tracing::warn!(window = %record.id(), title = record.title(), "window failed to open");
                    failed.push(record.id());
                    first_error.get_or_insert(e);
                }
            }
        }

        for id in failed {
            state.close_one(id);
        }

        first_error.map_or(Ok(()), Err)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn presented(&self) -> Vec<WindowId> {
        self.windows.iter().map(|(id, _)| *id).collect()
    }

    #[cfg(test)]
    pub(crate) fn host(&self) -> &H {
        &self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeHost, initialized_state, record_ids};

    #[test]
    fn test_sync_opens_initial_window() {
        let mut state = initialized_state();
        let mut presenter = Presenter::new(FakeHost::default());
        presenter.sync(&mut state).unwrap();

        assert_eq!(presenter.host().opened, vec!["Initial window"]);
        assert_eq!(presenter.presented(), record_ids(&state));
    }

    #[test]
    fn test_sync_only_opens_new_records() {
        let mut state = initialized_state();
        let mut presenter = Presenter::new(FakeHost::default());
        presenter.sync(&mut state).unwrap();

        state.create_window();
        state.create_window();
        presenter.sync(&mut state).unwrap();
        presenter.sync(&mut state).unwrap();

        assert_eq!(
            presenter.host().opened,
            vec!["Initial window", "Window 1", "Window 2"]
        );
        assert!(presenter.host().closed.is_empty());
    }

    #[test]
    fn test_sync_closes_removed_record_only() {
        let mut state = initialized_state();
        let mut presenter = Presenter::new(FakeHost::default());
        let a = state.create_window();
        state.create_window();
        presenter.sync(&mut state).unwrap();

        state.close_one(a);
        presenter.sync(&mut state).unwrap();

        assert_eq!(presenter.host().closed, vec![a]);
        assert_eq!(presenter.presented(), record_ids(&state));
    }

    #[test]
    fn test_sync_after_clear_closes_everything() {
        let mut state = initialized_state();
        let mut presenter = Presenter::new(FakeHost::default());
        state.create_window();
        presenter.sync(&mut state).unwrap();

        state.clear_all();
        presenter.sync(&mut state).unwrap();

        assert!(presenter.is_empty());
        assert_eq!(presenter.host().closed.len(), 2);
    }

    #[test]
    fn test_repeated_title_is_a_new_window() {
        let mut state = initialized_state();
        let mut presenter = Presenter::new(FakeHost::default());
        let first = state.create_window();
        presenter.sync(&mut state).unwrap();

        state.close_one(first);
        let second = state.create_window();
        presenter.sync(&mut state).unwrap();

        assert_eq!(presenter.host().closed, vec![first]);
        assert_eq!(
            presenter.host().opened,
            vec!["Initial window", "Window 1", "Window 1"]
        );
        assert!(presenter.presented().contains(&second));
    }

    #[test]
    fn test_failed_open_drops_its_record() {
        let mut state = initialized_state();
        let host = FakeHost {
            fail_on: Some("Window 1".into()),
            ..FakeHost::default()
        };
        let mut presenter = Presenter::new(host);
        presenter.sync(&mut state).unwrap();

        let orphan = state.create_window();
        let err = presenter.sync(&mut state).unwrap_err();

        assert_eq!(err, "cannot open Window 1");
        assert_eq!(state.len(), 1);
        assert_eq!(presenter.len(), 1);
        assert_eq!(presenter.presented(), record_ids(&state));
        assert!(!record_ids(&state).contains(&orphan));
    }

    #[test]
    fn test_failed_open_keeps_later_records() {
        let mut state = initialized_state();
        let host = FakeHost {
            fail_on: Some("Window 1".into()),
            ..FakeHost::default()
        };
        let mut presenter = Presenter::new(host);
        state.create_window();
        state.create_window();

        assert!(presenter.sync(&mut state).is_err());
        assert_eq!(state.titles(), vec!["Initial window", "Window 2"]);
        assert_eq!(presenter.presented(), record_ids(&state));
    }
}
