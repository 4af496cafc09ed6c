use kanal::Sender;
use multiwin_types::{WindowEvent, WindowId};

/// Callbacks of one window, bound to the owning state's event channel
#[derive(Clone)]
pub struct WindowActions {
    id: WindowId,
    tx: Sender<WindowEvent>,
}

impl WindowActions {
    pub(crate) fn new(id: WindowId, tx: Sender<WindowEvent>) -> Self {
        Self { id, tx }
    }

    /// "New window" menu item
    pub fn new_window(&self) {
        self.send(WindowEvent::NewWindow);
    }

    /// "Exit" menu item
    pub fn exit(&self) {
        self.send(WindowEvent::Exit);
    }

    /// Close request for this window only
    pub fn close(&self) {
        self.send(WindowEvent::Close(self.id));
    }

    fn send(&self, event: WindowEvent) {
        if self.tx.send(event).is_err() {
            tracing::debug!(window = %self.id, %event, "state is gone, dropping event");
        }
    }
}

/// One open window: identity, immutable title and its callbacks
#[derive(Clone)]
pub struct WindowRecord {
    id: WindowId,
    title: String,
    actions: WindowActions,
}

impl WindowRecord {
    pub(crate) fn new(id: WindowId, title: String, tx: Sender<WindowEvent>) -> Self {
        Self {
            id,
            title,
            actions: WindowActions::new(id, tx),
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn actions(&self) -> &WindowActions {
        &self.actions
    }
}

impl std::fmt::Debug for WindowRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowRecord")
            .field("id", &self.id)
            .field("title", &self.title)
            .finish()
    }
}
