//! Integration tests for Site-Harvest
//!
//! These tests use wiremock to serve small websites and run the full
//! fetch, parse, download and persist cycle against them.

mod harvest_tests;
