//! Streaming interfaces for hashing large inputs.
//!
//! [`StreamingHasher`] drives the incremental sponge from byte slices or
//! any [`Read`] source with a bounded buffer, so memory stays constant
//! regardless of input size. Because the sponge itself is incremental,
//! the streaming digest is bit-identical to the one-shot
//! [`keccak256`](crate::keccak::keccak256) for every chunking.

use std::io::Read;

use crate::keccak::{Keccak256, DIGEST_SIZE};

/// Default read-buffer size for streaming operations (64 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Maximum read-buffer size (1 MiB).
pub const MAX_CHUNK_SIZE: usize = 1024 * 1024;

/// Minimum read-buffer size (1 KiB).
pub const MIN_CHUNK_SIZE: usize = 1024;

/// Errors from streaming operations.
#[derive(Debug)]
pub enum StreamingError {
    /// IO error while reading the input source.
    Io(std::io::Error),
    /// Read-buffer size outside the accepted range.
    InvalidChunkSize,
}

impl core::fmt::Display for StreamingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::InvalidChunkSize => write!(
                f,
                "invalid chunk size (must be {} - {} bytes)",
                MIN_CHUNK_SIZE, MAX_CHUNK_SIZE
            ),
        }
    }
}

impl std::error::Error for StreamingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StreamingError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Configuration for streaming operations.
#[derive(Clone)]
pub struct StreamingConfig {
    /// Size of the read buffer in bytes.
    pub chunk_size: usize,
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl StreamingConfig {
    /// Create a new configuration with a custom read-buffer size.
    pub fn with_chunk_size(chunk_size: usize) -> Result<Self, StreamingError> {
        if !(MIN_CHUNK_SIZE..=MAX_CHUNK_SIZE).contains(&chunk_size) {
            return Err(StreamingError::InvalidChunkSize);
        }
        Ok(Self { chunk_size })
    }
}

/// Streaming hasher computing Keccak-256 over arbitrary data streams.
pub struct StreamingHasher {
    /// The incremental sponge.
    hasher: Keccak256,
    /// Read-buffer size for [`update_reader`](Self::update_reader).
    chunk_size: usize,
    /// Total bytes absorbed so far.
    bytes_processed: u64,
}

impl StreamingHasher {
    /// Create a new streaming hasher with default configuration.
    pub fn new() -> Self {
        Self::with_config(StreamingConfig::default())
    }

    /// Create a new streaming hasher with custom configuration.
    pub fn with_config(config: StreamingConfig) -> Self {
        Self {
            hasher: Keccak256::new(),
            chunk_size: config.chunk_size,
            bytes_processed: 0,
        }
    }

    /// Absorb a slice of data.
    pub fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
        self.bytes_processed += data.len() as u64;
    }

    /// Absorb everything a reader yields, returning the byte count read.
    pub fn update_reader<R: Read>(&mut self, mut reader: R) -> Result<u64, StreamingError> {
        let mut buf = vec![0u8; self.chunk_size];
        let mut total = 0u64;

        loop {
            let n = reader.read(&mut buf)?;
            if n == 0 {
                break;
            }
            self.update(&buf[..n]);
            total += n as u64;
        }

        Ok(total)
    }

    /// Finalize and return the 32-byte digest.
    pub fn finalize(self) -> [u8; DIGEST_SIZE] {
        self.hasher.finalize()
    }

    /// Get the number of bytes absorbed so far.
    pub fn bytes_processed(&self) -> u64 {
        self.bytes_processed
    }
}

impl Default for StreamingHasher {
    fn default() -> Self {
        Self::new()
    }
}
