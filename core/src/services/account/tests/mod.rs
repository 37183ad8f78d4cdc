//! Tests for the account service

mod mocks;
mod service_tests;
