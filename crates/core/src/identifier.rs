//! User identifier derivation.
//!
//! Identifiers are the fixed `u_` tag followed by the base58 (Bitcoin alphabet)
//! encoding of random bytes, truncated to [`USER_ID_MAX_ENCODED_LEN`] characters.
//! Randomness is drawn by the caller; everything here is deterministic.

/// Literal tag marking an identifier as a user identifier.
pub const USER_ID_PREFIX: &str = "u_";

/// Number of random bytes drawn for each new identifier.
pub const USER_ID_RANDOM_BYTES: usize = 12;

/// Maximum number of base58 characters kept after the prefix.
pub const USER_ID_MAX_ENCODED_LEN: usize = 16;

/// Derives a user identifier from a byte sequence.
///
/// The same bytes always produce the same identifier.
///
/// # Examples
///
/// ```
/// use usersvc_core::identifier::generate_user_id;
///
/// let id = generate_user_id(&[7u8; 12]);
/// assert!(id.starts_with("u_"));
/// assert!(id.len() <= 18);
/// ```
pub fn generate_user_id(random: &[u8]) -> String {
    let mut encoded = bs58::encode(random).into_string();
    // base58 output is ASCII, so byte truncation never splits a character.
    encoded.truncate(USER_ID_MAX_ENCODED_LEN);
    format!("{USER_ID_PREFIX}{encoded}")
}

/// Returns true if `id` has the shape produced by [`generate_user_id`].
pub fn is_valid_user_id(id: &str) -> bool {
    match id.strip_prefix(USER_ID_PREFIX) {
        Some(encoded) => {
            !encoded.is_empty()
                && encoded.len() <= USER_ID_MAX_ENCODED_LEN
                && bs58::decode(encoded).into_vec().is_ok()
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

    #[test]
    fn test_generate_user_id_has_prefix_and_bounded_length() {
        let samples: [[u8; USER_ID_RANDOM_BYTES]; 4] = [
            [0u8; 12],
            [0xFF; 12],
            [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12],
            [200, 13, 77, 0, 0, 91, 254, 3, 18, 64, 128, 5],
        ];

        for bytes in samples {
            let id = generate_user_id(&bytes);
            assert!(id.starts_with(USER_ID_PREFIX), "{id}");
            assert!(id.len() <= USER_ID_PREFIX.len() + USER_ID_MAX_ENCODED_LEN, "{id}");
            assert!(id[USER_ID_PREFIX.len()..]
                .chars()
                .all(|c| BASE58_ALPHABET.contains(c)));
        }
    }

    #[test]
    fn test_generate_user_id_is_deterministic() {
        let bytes = [42u8, 17, 99, 3, 250, 1, 0, 64, 33, 8, 190, 77];
        assert_eq!(generate_user_id(&bytes), generate_user_id(&bytes));
    }

    #[test]
    fn test_generate_user_id_truncates_to_sixteen_chars() {
        // 12 bytes of 0xFF encode to 17 base58 characters.
        let id = generate_user_id(&[0xFF; 12]);
        assert_eq!(id.len(), USER_ID_PREFIX.len() + USER_ID_MAX_ENCODED_LEN);
    }

    #[test]
    fn test_generate_user_id_matches_known_encoding() {
        let encoded = bs58::encode([1u8, 2, 3]).into_string();
        assert_eq!(encoded, "Ldp");
        assert_eq!(generate_user_id(&[1, 2, 3]), "u_Ldp");
    }

    #[test]
    fn test_leading_zero_bytes_encode_as_ones() {
        assert_eq!(generate_user_id(&[0, 0, 1]), "u_112");
    }

    #[test]
    fn test_different_bytes_produce_different_ids() {
        let a = generate_user_id(&[1u8; 12]);
        let b = generate_user_id(&[2u8; 12]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_is_valid_user_id() {
        assert!(is_valid_user_id(&generate_user_id(&[9u8; 12])));
        assert!(!is_valid_user_id("u_"));
        assert!(!is_valid_user_id("x_abc"));
        assert!(!is_valid_user_id("u_0OIl"));
        assert!(!is_valid_user_id("u_11111111111111111"));
    }
}
