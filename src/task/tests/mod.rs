//! Unit tests for the task module.

mod update_tests;
