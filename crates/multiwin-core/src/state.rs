use kanal::Sender;
use multiwin_config::ui::UiConfig;
use multiwin_types::{WindowEvent, WindowId};

use crate::record::WindowRecord;

/// Whether handling an event changed the record collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    Unchanged,
}

/// Sole owner of the window records
pub struct AppState {
    records: Vec<WindowRecord>,
    next_id: u64,
    tx: Sender<WindowEvent>,
    initial_title: String,
    title_prefix: String,
}

impl AppState {
    /// Empty state whose records report back through `tx`
    pub fn new(tx: Sender<WindowEvent>, config: &UiConfig) -> Self {
        Self {
            records: Vec::new(),
            next_id: 0,
            tx,
            initial_title: config.initial_title.clone(),
            title_prefix: config.title_prefix.clone(),
        }
    }

    /// Seeds the collection with the startup window
    pub fn initialize(&mut self) -> WindowId {
        let title = self.initial_title.clone();
        self.push(title)
    }

    /// Appends a window titled after the current number of records
    pub fn create_window(&mut self) -> WindowId {
        let title = format!("{} {}", self.title_prefix, self.records.len());
        self.push(title)
    }

    pub fn clear_all(&mut self) {
        tracing::debug!(count = self.records.len(), "clearing all windows");
        self.records.clear();
    }

    /// Removes the record with `id`. Returns false if it was not present.
    pub fn close_one(&mut self, id: WindowId) -> bool {
        match self.records.iter().position(|r| r.id() == id) {
            Some(idx) => {
                let record = self.records.remove(idx);
                tracing::debug!(window = %id, title = record.title(), "window closed");
                true
            }
            None => {
                tracing::trace!(window = %id, "close for unknown window ignored");
                false
            }
        }
    }

    pub fn handle(&mut self, event: WindowEvent) -> Outcome {
        tracing::trace!(%event, "handling window event");
        match event {
            WindowEvent::NewWindow => {
                self.create_window();
                Outcome::Changed
            }
            WindowEvent::Exit => {
                if self.records.is_empty() {
                    return Outcome::Unchanged;
                }
                self.clear_all();
                Outcome::Changed
            }
            WindowEvent::Close(id) => {
                if self.close_one(id) {
                    Outcome::Changed
                } else {
                    Outcome::Unchanged
                }
            }
        }
    }

    pub fn records(&self) -> &[WindowRecord] {
        &self.records
    }

    pub fn titles(&self) -> Vec<&str> {
        self.records.iter().map(WindowRecord::title).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn push(&mut self, title: String) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;
        tracing::debug!(window = %id, %title, "window created");
        self.records.push(WindowRecord::new(id, title, self.tx.clone()));
        id
    }
}
