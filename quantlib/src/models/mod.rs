pub mod observation;
pub mod risk_level;
pub mod signal_series;

pub use observation::*;
pub use risk_level::*;
pub use signal_series::*;
