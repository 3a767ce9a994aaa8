use std::io::{self, Cursor};

use preflight_verify::{DigestAlgorithm, ExpectedDigest, VerifiedReader, compute};
use proptest::prelude::*;

fn algorithm() -> impl Strategy<Value = DigestAlgorithm> {
    prop::sample::select(DigestAlgorithm::ALL.to_vec())
}

proptest! {
    #[test]
    fn compute_is_deterministic(alg in algorithm(), data in prop::collection::vec(any::<u8>(), 0..1024)) {
        prop_assert_eq!(compute(alg, &data), compute(alg, &data));
    }

    #[test]
    fn hex_length_follows_algorithm(alg in algorithm(), data in prop::collection::vec(any::<u8>(), 0..256)) {
        let hex = compute(alg, &data).to_hex();
        prop_assert_eq!(hex.len(), alg.digest_length() * 2);
        prop_assert!(hex.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
    }

    #[test]
    fn rendered_digest_parses_back(alg in algorithm(), data in prop::collection::vec(any::<u8>(), 0..256)) {
        let digest = compute(alg, &data);
        let expected = ExpectedDigest::parse(&digest.to_string());
        prop_assert_eq!(expected.algorithm(), alg);
        prop_assert!(expected.matches(&digest));
    }

    #[test]
    fn untagged_input_is_sha256_verbatim(raw in "[^=]*") {
        let expected = ExpectedDigest::parse(&raw);
        prop_assert_eq!(expected.algorithm(), DigestAlgorithm::Sha256);
        prop_assert_eq!(expected.hex(), raw.as_str());
    }

    #[test]
    fn streaming_matches_buffered(alg in algorithm(), data in prop::collection::vec(any::<u8>(), 0..4096)) {
        let mut reader = VerifiedReader::new(Cursor::new(data.clone()), alg);
        io::copy(&mut reader, &mut io::sink()).unwrap();
        prop_assert_eq!(reader.finish(), compute(alg, &data));
    }
}
