//! Session service module for validating and revoking issued tokens
//!
//! A session token is a stateless bearer credential; by itself it stays
//! valid until its expiry. This module layers the revocation exception
//! list on top so sign-out can kill a still-valid token early.

mod service;


pub use service::{SessionService, REVOKED_SENTINEL};
