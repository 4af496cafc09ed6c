pub mod driver;
pub mod presenter;
pub mod record;
pub mod state;

#[cfg(test)]
mod test_support;

pub use driver::{Driver, Step};
pub use presenter::{Presenter, WindowHost};
pub use record::{WindowActions, WindowRecord};
pub use state::{AppState, Outcome};
