//! Dashboard state and the logic that feeds it: bounded series, topic
//! dispatch and the rake command.
pub mod dispatch;
pub mod log_entry;
pub mod observation;
pub mod odor_level;
pub mod rake;
pub mod rake_trigger;
pub mod rolling_series;
pub mod state;
pub mod timestamp;

pub use dispatch::{dispatch, Dispatched, Topic};
pub use log_entry::LogEntry;
pub use observation::Observation;
pub use odor_level::OdorLevel;
pub use rake::{CommandPublisher, RakeCommand, RakeEffect};
pub use rake_trigger::RakeTrigger;
pub use rolling_series::RollingSeries;
pub use state::DashboardState;
