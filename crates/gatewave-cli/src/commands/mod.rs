//! CLI command implementations

pub mod json_output;
pub mod render;
pub mod report;
pub mod table;
pub mod template;
pub mod validate;

mod reporting;
