//! End-to-end tests for the bookshelf service. They expect a server
//! running at 127.0.0.1:8080 and are therefore gated behind the
//! `system_tests` feature:
//!
//! `cargo test -p bookshelf_tests --features system_tests`
