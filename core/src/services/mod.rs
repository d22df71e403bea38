//! Business services containing domain logic and use cases.

pub mod auth;
pub mod session;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, Notifier};
pub use session::{SessionService, REVOKED_SENTINEL};
pub use token::{TokenCodec, TokenCodecConfig};
