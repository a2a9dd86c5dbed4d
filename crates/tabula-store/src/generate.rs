//! Random identifiers and name shaping.
//!
//! Generators take the random source as an argument. Tokens are suitable for
//! non-security identifiers only.

use rand::Rng;
use uuid::Builder;

/// Alphabet drawn from by [`random_token`].
pub const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// `length` characters drawn uniformly, with replacement, from [`BASE62_ALPHABET`].
pub fn random_token<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(BASE62_ALPHABET[rng.gen_range(0..BASE62_ALPHABET.len())]))
        .collect()
}

/// Replace the name part of `original` with a random 128-bit identifier.
///
/// The extension is everything after the first `.`, so `photo.tar.gz` keeps
/// `tar.gz`. Returns `None` when `original` has no `.`.
pub fn randomized_file_name<R: Rng + ?Sized>(rng: &mut R, original: &str) -> Option<String> {
    let (_, extension) = original.split_once('.')?;
    let id = Builder::from_random_bytes(rng.r#gen::<[u8; 16]>()).into_uuid();
    Some(format!("{}.{}", id.simple(), extension))
}

/// Lower-case the first character, leaving the rest untouched.
pub fn camel_case_name(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn token_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_token(&mut rng, 0), "");
        let token = random_token(&mut rng, 32);
        assert_eq!(token.len(), 32);
        assert!(token.bytes().all(|b| BASE62_ALPHABET.contains(&b)));
    }

    #[test]
    fn seeded_generators_are_deterministic() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(random_token(&mut a, 16), random_token(&mut b, 16));
        assert_eq!(
            randomized_file_name(&mut a, "x.png"),
            randomized_file_name(&mut b, "x.png")
        );
    }

    #[test]
    fn randomized_name_keeps_extension_after_first_dot() {
        let mut rng = StdRng::seed_from_u64(1);
        let name = randomized_file_name(&mut rng, "archive.tar.gz").unwrap();
        let (stem, extension) = name.split_once('.').unwrap();
        assert_eq!(extension, "tar.gz");
        assert_eq!(stem.len(), 32);
        assert!(stem.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(randomized_file_name(&mut rng, "README").is_none());
    }

    #[test]
    fn camel_case_lowers_first_char() {
        assert_eq!(camel_case_name("FirstName"), "firstName");
        assert_eq!(camel_case_name("x"), "x");
        assert_eq!(camel_case_name(""), "");
    }
}
