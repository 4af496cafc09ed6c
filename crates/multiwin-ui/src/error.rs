#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("Platform error: {0}")]
    Platform(#[from] slint::PlatformError),

    #[error("Event loop error: {0}")]
    EventLoop(#[from] slint::EventLoopError),
}
