//! Room code generation.

use clashwho_protocol::RoomCode;
use rand::Rng;

/// Characters a room code is drawn from.
pub const ROOM_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Draws a random code of `len` characters from [`ROOM_CODE_ALPHABET`].
///
/// Does not check for collisions; [`RoomStore`](crate::RoomStore) retries
/// until the code is free.
pub fn generate_room_code<R: Rng + ?Sized>(rng: &mut R, len: usize) -> RoomCode {
    let code: String = (0..len)
        .map(|_| ROOM_CODE_ALPHABET[rng.random_range(0..ROOM_CODE_ALPHABET.len())] as char)
        .collect();
    RoomCode::from(code)
}

/// Returns `true` if `code` has length `len` and uses only the alphabet.
pub fn is_valid_room_code(code: &str, len: usize) -> bool {
    code.len() == len && code.bytes().all(|b| ROOM_CODE_ALPHABET.contains(&b))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_generated_codes_are_valid() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..500 {
            let code = generate_room_code(&mut rng, 5);
            assert!(is_valid_room_code(code.as_str(), 5), "bad code {code}");
        }
    }

    #[test]
    fn test_is_valid_room_code_rejects_bad_input() {
        assert!(is_valid_room_code("AB12Z", 5));
        assert!(!is_valid_room_code("ab12z", 5));
        assert!(!is_valid_room_code("AB12", 5));
        assert!(!is_valid_room_code("AB-12", 5));
    }
}
