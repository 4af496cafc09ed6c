use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of one window record, never reused within a process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Requests sent from a window's menu or frame to the application state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowEvent {
    /// "File > New window"
    NewWindow,
    /// "File > Exit"
    Exit,
    /// Close request for one specific window
    Close(WindowId),
}

impl fmt::Display for WindowEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowEvent::NewWindow => write!(f, "new-window"),
            WindowEvent::Exit => write!(f, "exit"),
            WindowEvent::Close(id) => write!(f, "close {id}"),
        }
    }
}
