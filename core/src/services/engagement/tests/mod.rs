//! Tests for the engagement service
