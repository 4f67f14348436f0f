mod boundary;
mod state;

use crate::RatchetConfig;
use crate::crypto::generate_random_data;
use crate::error::Error;
use crate::ratchet::boundary::{byte_shift, carry_part, reseed_limit};
use crate::ratchet::state::RatchetParts;
use std::fmt;
use tracing::{debug, trace};

/// Number of hash parts in a ratchet, one per counter byte.
pub const RATCHET_PARTS: usize = 4;

/// Length of a single part, equal to the HMAC-SHA-256 output length.
pub const RATCHET_PART_LENGTH: usize = 32;

/// Length of the full ratchet key material.
pub const RATCHET_LENGTH: usize = RATCHET_PARTS * RATCHET_PART_LENGTH;

/// One part of the ratchet state.
pub type RatchetPart = [u8; RATCHET_PART_LENGTH];

/// Hierarchical hash ratchet for group message keys.
///
/// The ratchet holds four 32-byte parts and a 32-bit counter. Part `j` is
/// tied to byte `j` of the counter (most significant first) and is derived
/// from part `j - 1` whenever that higher byte changes, which turns the state
/// into a one-way function tree over the counter:
///
/// - [`advance`](Self::advance) moves one step, rehashing only the parts whose
///   counter bytes were touched by the carry.
/// - [`advance_to`](Self::advance_to) jumps straight to any later counter and
///   ends up in exactly the state that repeated single steps would produce.
///
/// There is no way back: every transition is a keyed hash, so the current
/// state reveals nothing about earlier positions.
#[derive(Clone)]
pub struct HashRatchet {
    parts: RatchetParts,
    counter: u32,
    config: RatchetConfig,
}

impl HashRatchet {
    /// Creates a ratchet from 128 bytes of secret randomness at `counter`.
    ///
    /// The caller is responsible for the quality of `random_data`.
    pub fn new(random_data: &[u8; RATCHET_LENGTH], counter: u32) -> Self {
        Self::with_config(random_data, counter, RatchetConfig::default())
    }

    /// Creates a ratchet with an explicit configuration.
    pub fn with_config(
        random_data: &[u8; RATCHET_LENGTH],
        counter: u32,
        config: RatchetConfig,
    ) -> Self {
        Self {
            parts: RatchetParts::from_bytes(random_data),
            counter,
            config,
        }
    }

    /// Creates a ratchet seeded from the operating system's CSPRNG.
    pub fn generate(counter: u32) -> Result<Self, Error> {
        let random_data = generate_random_data()?;
        Ok(Self::new(&random_data, counter))
    }

    /// Current counter value.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// The four parts concatenated, part 0 first.
    pub fn key_material(&self) -> &[u8] {
        self.parts.as_bytes()
    }

    /// The individual parts, most significant first.
    pub fn parts(&self) -> &[RatchetPart; RATCHET_PARTS] {
        &self.parts.0
    }

    /// Returns the configuration for this ratchet.
    pub fn config(&self) -> &RatchetConfig {
        &self.config
    }

    /// Advances the ratchet by a single step.
    ///
    /// The counter wraps from `u32::MAX` to zero, which reseeds every part
    /// from part 0.
    pub fn advance(&mut self) -> Result<(), Error> {
        let counter = self.counter.wrapping_add(1);
        let from = carry_part(counter);

        let mut parts = self.parts.clone();
        // Finest part first, so `from` is read before it is rehashed itself.
        for to in (from..RATCHET_PARTS).rev() {
            parts.rehash(from, to)?;
        }

        self.parts = parts;
        self.counter = counter;

        Ok(())
    }

    /// Advances the ratchet directly to `target`.
    ///
    /// Only the parts whose counter bytes differ are rehashed, so the cost
    /// does not grow with the distance. Seeking to the current counter is a
    /// no-op. On error the ratchet is left untouched.
    pub fn advance_to(&mut self, target: u32) -> Result<(), Error> {
        self.check_seek(target)?;

        let mut parts = self.parts.clone();
        let mut counter = self.counter;
        let mut rehashes = 0usize;

        for byte in 0..RATCHET_PARTS {
            let shift = byte_shift(byte);
            let increment = 1u32 << shift;

            // Higher bytes already match the target here.
            let mut steps = (target >> shift) - (counter >> shift);
            if steps == 0 {
                continue;
            }

            // Lower bytes restart from zero once this byte moves.
            counter &= !(increment - 1);

            // Intermediate values of this byte never surface in a finer part.
            while steps > 1 {
                parts.rehash(byte, byte)?;
                counter += increment;
                steps -= 1;
                rehashes += 1;
            }

            for to in (byte..=reseed_limit(target, byte)).rev() {
                parts.rehash(byte, to)?;
                rehashes += 1;
            }
            counter += increment;
        }

        trace!(from = self.counter, to = target, rehashes, "Seeked hash ratchet");

        self.parts = parts;
        self.counter = counter;

        Ok(())
    }

    /// Returns a copy of this ratchet advanced to `target`, leaving `self`
    /// at its current position.
    ///
    /// Receivers keep their earliest ratchet around this way so that keys
    /// for messages delivered out of order can still be derived.
    pub fn advanced_to(&self, target: u32) -> Result<Self, Error> {
        let mut ratchet = self.clone();
        ratchet.advance_to(target)?;
        Ok(ratchet)
    }

    fn check_seek(&self, target: u32) -> Result<(), Error> {
        if target < self.counter {
            debug!(current = self.counter, target, "Rejected backward seek");
            return Err(Error::InvalidSeek {
                current: self.counter,
                target,
            });
        }

        if let Some(limit) = self.config.max_seek_distance {
            if target - self.counter > limit {
                debug!(current = self.counter, target, limit, "Rejected long seek");
                return Err(Error::SeekLimitExceeded {
                    current: self.counter,
                    target,
                    limit,
                });
            }
        }

        Ok(())
    }
}

impl fmt::Debug for HashRatchet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashRatchet")
            .field("counter", &self.counter)
            .finish_non_exhaustive()
    }
}
