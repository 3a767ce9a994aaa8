use digest::Digest as CryptoDigest;

use crate::{Digest, DigestAlgorithm};

pub trait Hasher: Send {
    fn update(&mut self, data: &[u8]);
    fn finalize(self) -> Vec<u8>;
}

/// Adapter from any RustCrypto digest to [`Hasher`].
pub struct DigestHasher<D: CryptoDigest + Send>(D);

impl<D: CryptoDigest + Send> DigestHasher<D> {
    pub fn new() -> Self { Self(<D as CryptoDigest>::new()) }
}

impl<D: CryptoDigest + Send> Default for DigestHasher<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: CryptoDigest + Send> Hasher for DigestHasher<D> {
    fn update(&mut self, data: &[u8]) { CryptoDigest::update(&mut self.0, data); }
    fn finalize(self) -> Vec<u8> { self.0.finalize().to_vec() }
}

pub type Md5Hasher = DigestHasher<md5::Md5>;
pub type Sha1Hasher = DigestHasher<sha1::Sha1>;
pub type Sha256Hasher = DigestHasher<sha2::Sha256>;

enum Inner {
    Md5(Md5Hasher),
    Sha1(Sha1Hasher),
    Sha256(Sha256Hasher),
}

/// Hasher selected at runtime from a [`DigestAlgorithm`].
pub struct AlgorithmHasher {
    algorithm: DigestAlgorithm,
    inner: Inner,
}

impl AlgorithmHasher {
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        let inner = match algorithm {
            DigestAlgorithm::Md5 => Inner::Md5(Md5Hasher::new()),
            DigestAlgorithm::Sha1 => Inner::Sha1(Sha1Hasher::new()),
            DigestAlgorithm::Sha256 => Inner::Sha256(Sha256Hasher::new()),
        };
        Self { algorithm, inner }
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Finalize into a [`Digest`] tagged with the algorithm.
    pub fn finish(self) -> Digest {
        let algorithm = self.algorithm;
        Digest::new(algorithm, self.finalize())
    }
}

impl Hasher for AlgorithmHasher {
    fn update(&mut self, data: &[u8]) {
        match &mut self.inner {
            Inner::Md5(h) => h.update(data),
            Inner::Sha1(h) => h.update(data),
            Inner::Sha256(h) => h.update(data),
        }
    }

    fn finalize(self) -> Vec<u8> {
        match self.inner {
            Inner::Md5(h) => h.finalize(),
            Inner::Sha1(h) => h.finalize(),
            Inner::Sha256(h) => h.finalize(),
        }
    }
}

/// Digest of a fully materialized buffer.
pub fn compute(algorithm: DigestAlgorithm, data: &[u8]) -> Digest {
    let mut hasher = algorithm.hasher();
    hasher.update(data);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_hasher() {
        let mut hasher = Sha256Hasher::new();
        hasher.update(b"hello world");
        let hash = hasher.finalize();

        let expected =
            hex::decode("b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9")
                .unwrap();
        assert_eq!(hash, expected);
    }

    #[test]
    fn test_compute_known_vectors() {
        let script = b"echo 'hello'";
        assert_eq!(
            compute(DigestAlgorithm::Md5, script).to_hex(),
            "a849639cc38d82e3c0ac4e4dfd8186dd"
        );
        assert_eq!(
            compute(DigestAlgorithm::Sha1, script).to_hex(),
            "098f8f78f1e13e2a2eee10d6974daebf892e4a71"
        );
        assert_eq!(
            compute(DigestAlgorithm::Sha256, script).to_hex(),
            "3b084aa6ad2246428c9270825d8631e077b7e7c9bb16f6cafb482bc7fd63e348"
        );
    }

    #[test]
    fn test_incremental_matches_one_shot() {
        let mut hasher = DigestAlgorithm::Sha1.hasher();
        hasher.update(b"echo ");
        hasher.update(b"'hello'");
        assert_eq!(hasher.finish(), compute(DigestAlgorithm::Sha1, b"echo 'hello'"));
    }

    #[test]
    fn test_output_length_follows_algorithm() {
        for alg in DigestAlgorithm::ALL {
            let digest = compute(alg, b"");
            assert_eq!(digest.as_bytes().len(), alg.digest_length());
            assert_eq!(digest.algorithm(), alg);
        }
    }
}
