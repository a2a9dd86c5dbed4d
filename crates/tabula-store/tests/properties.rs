//! Property tests for path joining, blob round trips, and token generation.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::tempdir;

use tabula_store::{
    BASE62_ALPHABET, encode_base64, encode_data_uri, join_path, random_token, read_bytes,
    write_base64,
};

proptest! {
    #[test]
    fn joined_paths_never_contain_doubled_separators(
        segments in proptest::collection::vec("[a-z/]{0,6}", 0..6)
    ) {
        let joined = join_path(&segments);
        prop_assert!(!joined.contains("//"));
    }

    #[test]
    fn plain_segments_join_with_one_separator(
        segments in proptest::collection::vec("[a-z0-9]{0,6}", 0..6)
    ) {
        let joined = join_path(&segments);
        let expected: Vec<&str> = segments
            .iter()
            .map(String::as_str)
            .filter(|segment| !segment.is_empty())
            .collect();
        prop_assert_eq!(joined, expected.join("/"));
    }

    #[test]
    fn tokens_use_only_base62(seed in any::<u64>(), length in 0usize..64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let token = random_token(&mut rng, length);
        prop_assert_eq!(token.len(), length);
        prop_assert!(token.bytes().all(|b| BASE62_ALPHABET.contains(&b)));
    }

    #[test]
    fn base64_writes_read_back(
        content in proptest::collection::vec(any::<u8>(), 0..256),
        with_prefix in any::<bool>()
    ) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        let payload = if with_prefix {
            encode_data_uri("application/octet-stream", &content)
        } else {
            encode_base64(&content)
        };

        prop_assert!(write_base64(&path, &payload));
        prop_assert_eq!(read_bytes(&path).unwrap(), content);
    }
}

#[test]
fn independent_tokens_differ() {
    let mut rng = StdRng::from_entropy();
    let first = random_token(&mut rng, 16);
    let second = random_token(&mut rng, 16);
    assert_ne!(first, second);
}
