//! Unit tests for the board module.

mod projection_tests;
mod support;
