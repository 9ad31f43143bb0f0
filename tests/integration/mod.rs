//! Integration tests for the workflow-demo binary
//!
//! Each test points the binary at a temporary config with millisecond
//! delays so a full presentation runs in well under a second.

mod cli_tests;
mod helpers;
