use crate::Error;
use crate::ratchet::{RATCHET_LENGTH, RATCHET_PART_LENGTH};
use hmac::{Hmac, Mac};
use rand::TryRngCore;
use rand::rngs::OsRng;
use sha2::Sha256;
use zeroize::Zeroizing;

type HmacSha256 = Hmac<Sha256>;

/// Computes HMAC-SHA-256 of `message` under `key`.
pub(crate) fn hmac_sha256(
    key: &[u8],
    message: &[u8],
) -> Result<[u8; RATCHET_PART_LENGTH], Error> {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(key)?;
    mac.update(message);
    let result = mac.finalize().into_bytes();

    let mut output = [0u8; RATCHET_PART_LENGTH];
    output.copy_from_slice(&result);
    Ok(output)
}

/// Fills a fresh ratchet seed from the operating system's CSPRNG.
pub(crate) fn generate_random_data() -> Result<Zeroizing<[u8; RATCHET_LENGTH]>, Error> {
    let mut data = Zeroizing::new([0u8; RATCHET_LENGTH]);
    OsRng
        .try_fill_bytes(data.as_mut_slice())
        .map_err(|_| Error::Random)?;
    Ok(data)
}
