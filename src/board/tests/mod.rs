//! Unit tests for the board module.

mod domain_tests;
