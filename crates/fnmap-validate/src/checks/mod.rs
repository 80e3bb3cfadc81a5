pub mod duplicates;
pub mod mismatch;
pub mod nulls;
pub mod other_group;
pub mod within_row;
