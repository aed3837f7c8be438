//! Cross-module test suite


mod core_tests;
