//! Integration tests for the flags module.

#[path = "../common/mod.rs"]
mod common;

mod test;
