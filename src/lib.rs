pub mod app;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod event;
pub mod ui;
pub mod util;

pub use app::App;
pub use config::DashboardConfig;
pub use error::{DashboardError, Result};
