pub mod cli;
pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
