pub mod errors;
pub mod logging;
pub mod models;
pub mod render;
pub mod util;

pub use models::{Observation, RiskLevel, SignalSeries};
