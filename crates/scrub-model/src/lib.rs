pub mod error;
pub mod options;
pub mod table;

pub use error::{Result, ScrubError};
pub use options::{
    CleanOptions, DEFAULT_EDIT_DISTANCE_THRESHOLD, DEFAULT_FREQUENCY_THRESHOLD,
    DEFAULT_MISSING_VALUE_LABEL, DEFAULT_REFERENCE_DISTANCE_THRESHOLD,
};
pub use table::{CellValue, Row, Table};
