//! Integration tests for the bit-scan intrinsics.

#[path = "../common/mod.rs"]
mod common;
