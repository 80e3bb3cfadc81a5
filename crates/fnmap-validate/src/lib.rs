//! Data-quality checks over the normalized mapping table.
//!
//! Every check is a pure function: deterministic given the same rows and
//! column arguments, no hidden state, and no mutation of the input table.
//! Checks report; they never remove rows from downstream processing.

mod checks;

pub use checks::duplicates::{count_by, find_duplicates};
pub use checks::mismatch::{find_mismatches, mismatched_key_count};
pub use checks::nulls::null_rows;
pub use checks::other_group::functions_in_other_group;
pub use checks::within_row::{DuplicateScope, WithinRowDuplicates, within_row_duplicates};
