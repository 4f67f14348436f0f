//! A forward-secure hierarchical hash ratchet.
//!
//! A [`HashRatchet`] produces a fresh 128-byte key material value for every
//! position of a 32-bit counter. Senders step it once per message, and a
//! receiver joining mid-stream can seek straight to the sender's position
//! without replaying every step in between.

mod crypto;

mod ratchet;
pub use ratchet::*;

mod error;
pub use error::Error;

mod config;
pub use config::RatchetConfig;
