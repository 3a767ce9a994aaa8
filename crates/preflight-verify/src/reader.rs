use std::io::{self, Read};

use crate::{AlgorithmHasher, Digest, DigestAlgorithm, Hasher};

/// Streaming reader that hashes data as it passes through.
pub struct VerifiedReader<R> {
    reader: R,
    hasher: AlgorithmHasher,
    bytes_read: u64,
}

impl<R> VerifiedReader<R> {
    pub fn new(reader: R, algorithm: DigestAlgorithm) -> Self {
        Self {
            reader,
            hasher: algorithm.hasher(),
            bytes_read: 0,
        }
    }

    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Digest of every byte read so far.
    pub fn finish(self) -> Digest {
        tracing::trace!(
            algorithm = %self.hasher.algorithm(),
            bytes = self.bytes_read,
            "reader digest finalized"
        );
        self.hasher.finish()
    }
}

impl<R: Read> Read for VerifiedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.reader.read(buf)?;
        if n > 0 {
            self.hasher.update(&buf[..n]);
            self.bytes_read += n as u64;
        }
        Ok(n)
    }
}
