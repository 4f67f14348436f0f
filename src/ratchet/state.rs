use crate::Error;
use crate::crypto::hmac_sha256;
use crate::ratchet::{RATCHET_LENGTH, RATCHET_PART_LENGTH, RATCHET_PARTS, RatchetPart};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Domain-separation seeds, one per destination part.
const PART_SEEDS: [[u8; 1]; RATCHET_PARTS] = [[0x00], [0x01], [0x02], [0x03]];

/// The four hash parts of a ratchet, most significant first.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub(crate) struct RatchetParts(pub(crate) [RatchetPart; RATCHET_PARTS]);

impl RatchetParts {
    pub(crate) fn from_bytes(bytes: &[u8; RATCHET_LENGTH]) -> Self {
        let mut parts = [[0u8; RATCHET_PART_LENGTH]; RATCHET_PARTS];
        for (part, chunk) in parts.iter_mut().zip(bytes.chunks_exact(RATCHET_PART_LENGTH)) {
            part.copy_from_slice(chunk);
        }

        Self(parts)
    }

    /// Overwrites part `to` with `HMAC(part[from], seed[to])`.
    ///
    /// The key is read in full before the destination is written, so `from`
    /// may equal `to`.
    pub(crate) fn rehash(&mut self, from: usize, to: usize) -> Result<(), Error> {
        let mut derived = hmac_sha256(&self.0[from], &PART_SEEDS[to])?;
        self.0[to].copy_from_slice(&derived);
        derived.zeroize();

        Ok(())
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_flattened()
    }
}
