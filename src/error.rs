/// Errors that can occur while advancing a hash ratchet.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// A seek asked for a counter behind the ratchet's current position.
    #[error("Cannot seek ratchet backwards from {current} to {target}")]
    InvalidSeek {
        /// Counter the ratchet is currently at.
        current: u32,
        /// Counter that was requested.
        target: u32,
    },

    /// A seek asked to jump further ahead than the configured limit allows.
    #[error("Seek from {current} to {target} exceeds the limit of {limit} steps")]
    SeekLimitExceeded {
        /// Counter the ratchet is currently at.
        current: u32,
        /// Counter that was requested.
        target: u32,
        /// Configured maximum seek distance.
        limit: u32,
    },

    /// The keyed-hash primitive failed.
    #[error("Cryptographic operation failed: {0}")]
    Crypto(String),

    /// Random number generation failed.
    #[error("Random number generation failed")]
    Random,
}

impl From<hmac::digest::InvalidLength> for Error {
    fn from(value: hmac::digest::InvalidLength) -> Self {
        Self::Crypto(value.to_string())
    }
}
