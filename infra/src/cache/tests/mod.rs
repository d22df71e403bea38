//! Unit tests for the cache module

mod redis_client_tests;
mod revocation_tests;
