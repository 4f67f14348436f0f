#[macro_use]
extern crate afl;
use hash_ratchet::{HashRatchet, RATCHET_LENGTH};

// Each 3-byte chunk is an operation: a short seek distance, or a single step
// when the distance is zero. Seeks are checked against single-step replay.
fn main() {
    fuzz!(|data: &[u8]| {
        if data.len() < RATCHET_LENGTH + 4 {
            return;
        }

        let mut seed = [0u8; RATCHET_LENGTH];
        seed.copy_from_slice(&data[..RATCHET_LENGTH]);
        let start = u32::from_be_bytes([
            data[RATCHET_LENGTH],
            data[RATCHET_LENGTH + 1],
            data[RATCHET_LENGTH + 2],
            data[RATCHET_LENGTH + 3],
        ]);

        let mut seeked = HashRatchet::new(&seed, start);
        let mut stepped = HashRatchet::new(&seed, start);

        for op in data[RATCHET_LENGTH + 4..].chunks_exact(3) {
            let distance = u32::from(u16::from_be_bytes([op[0], op[1]]) % 512);
            let backward = op[2] & 1 == 1;

            if backward {
                let before = seeked.key_material().to_vec();
                let target = seeked.counter().wrapping_sub(distance.max(1));
                if target < seeked.counter() {
                    assert!(seeked.advance_to(target).is_err());
                    assert_eq!(seeked.key_material(), before.as_slice());
                }
                continue;
            }

            let Some(target) = seeked.counter().checked_add(distance.max(1)) else {
                return;
            };
            if distance == 0 {
                seeked.advance().unwrap();
            } else {
                seeked.advance_to(target).unwrap();
            }
            while stepped.counter() != target {
                stepped.advance().unwrap();
            }

            assert_eq!(seeked.counter(), stepped.counter());
            assert_eq!(seeked.key_material(), stepped.key_material());
        }
    });
}
