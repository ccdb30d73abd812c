//! Graph construction and traversal.
pub mod assembler;
pub mod debruijn;
pub mod partition;
pub mod start;
pub mod walker;
