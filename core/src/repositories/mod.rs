pub mod account;
pub mod revocation;

pub use account::{AccountRepository, MockAccountRepository};
pub use revocation::{MemoryRevocationStore, RevocationStore};
