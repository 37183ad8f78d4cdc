//! Activation code and generated password helpers.
//!
//! Codes prove receipt of the registration email; generated passwords back
//! the reset-now recovery flow. Both are pure functions over the process
//! RNG with no shared state.

use rand::Rng;

/// Length of the activation code
pub const CODE_LENGTH: usize = 6;

/// Length of a generated password (reset-now flow)
pub const GENERATED_PASSWORD_LENGTH: usize = 12;

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const PASSWORD_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a 6-character uppercase alphanumeric activation code
pub fn generate_activation_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Generates a random password for the reset-now recovery flow
pub fn generate_password() -> String {
    let mut rng = rand::thread_rng();
    (0..GENERATED_PASSWORD_LENGTH)
        .map(|_| PASSWORD_ALPHABET[rng.gen_range(0..PASSWORD_ALPHABET.len())] as char)
        .collect()
}
