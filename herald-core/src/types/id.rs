//! Notification id generation
//!
//! Generates default ids for notifications displayed without a caller-supplied
//! id. Ids are plain strings as far as the native module is concerned; this
//! module only controls what a generated one looks like.

use rand::Rng;

/// Characters used in generated ids (unambiguous, no look-alikes)
const ALPHABET: &[u8] = b"0123456789abcdefghjkmnpqrstuvwxyz";

/// Generated id length (16 chars over a 33-char alphabet, ~80 bits)
const ID_LENGTH: usize = 16;

/// Generate a random notification id.
///
/// Used when a notification is displayed or scheduled without an explicit id.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();

    let mut id = String::with_capacity(ID_LENGTH);
    for _ in 0..ID_LENGTH {
        let idx = rng.gen_range(0..ALPHABET.len());
        id.push(ALPHABET[idx] as char);
    }
    id
}
