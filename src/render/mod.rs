pub mod gauge;
pub mod grouping;
pub mod status;
pub mod view;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaugeError {
    #[error("degenerate reference range: min {min} is not below max {max}")]
    DegenerateRange { min: f64, max: f64 },
}
