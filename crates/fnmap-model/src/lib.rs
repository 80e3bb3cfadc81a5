pub mod table;

pub use table::{
    CellValue, Column, NormalizedRecord, OTHER_GROUP, RAW_KEY_COLUMNS, Record, UPPERCASE_KEY_COLUMNS,
};
