use multiwin_types::WindowEvent;

use crate::presenter::{Presenter, WindowHost};
use crate::state::{AppState, Outcome};

/// What the event loop should do after an event was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Nothing changed, windows were left alone
    Idle,
    /// Windows were re-synced and the loop keeps running
    Resync,
    /// No windows remain and the loop should stop
    Quit,
}

/// Applies window events to the state and keeps the presenter in step
pub struct Driver<H: WindowHost> {
    state: AppState,
    presenter: Presenter<H>,
    quit_when_empty: bool,
}

impl<H: WindowHost> Driver<H>
where
    H::Error: std::fmt::Display,
{
    /// Seeds the initial window and shows it
    pub fn start(mut state: AppState, host: H, quit_when_empty: bool) -> Result<Self, H::Error> {
        state.initialize();
        let mut presenter = Presenter::new(host);
        presenter.sync(&mut state)?;

        Ok(Self {
            state,
            presenter,
            quit_when_empty,
        })
    }

    pub fn dispatch(&mut self, event: WindowEvent) -> Step {
        if self.state.handle(event) == Outcome::Unchanged {
            return Step::Idle;
        }

        if let Err(e) = self.presenter.sync(&mut self.state) {
            tracing::error!("failed to present windows: {e}");
        }
        tracing::debug!("{} window(s) open", self.presenter.len());

        if !self.state.is_empty() {
            return Step::Resync;
        }
        if self.quit_when_empty {
            tracing::info!("Last window closed, stopping event loop");
            Step::Quit
        } else {
            tracing::info!("No windows left, event loop kept alive");
            Step::Resync
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn presenter(&self) -> &Presenter<H> {
        &self.presenter
    }
}
