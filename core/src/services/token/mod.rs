//! Token codec module for the signed session token
//!
//! This module handles issuing the 24-hour session token at sign-in and the
//! stateless part of verifying presented tokens: structure, signature, and
//! expiry. Revocation is out of scope here; see the session service.

mod codec;
mod config;


pub use codec::TokenCodec;
pub use config::TokenCodecConfig;
