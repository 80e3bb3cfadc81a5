pub mod csv_table;
pub mod error;

pub use csv_table::{REQUIRED_COLUMNS, read_records};
pub use error::{IngestError, Result};
