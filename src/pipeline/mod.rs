//! Pipeline module - file-to-file assembly runs
pub mod assemble;
