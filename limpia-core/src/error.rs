use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("batch size must be at least 1")]
    InvalidBatchSize,

    #[error("window length must be at least 2 samples, got {0}")]
    InvalidWindowLen(usize),

    #[error("need at least 2 blocks to form a window, got {0}")]
    TooFewBlocks(usize),

    #[error("clean/noisy shape mismatch: clean is {clean:?}, noisy is {noisy:?}")]
    ShapeMismatch {
        clean: (usize, usize),
        noisy: (usize, usize),
    },

    #[error("batch index {index} out of range: epoch has {count} batches")]
    BatchOutOfRange { index: usize, count: usize },

    #[error("invalid block range {start}..{stop} for {blocks} blocks")]
    InvalidRange {
        start: usize,
        stop: usize,
        blocks: usize,
    },

    #[error("no wave files found in {}", .0.display())]
    EmptyFileSet(PathBuf),

    #[error(
        "unsupported wav format in {}: expected 16-bit integer PCM, got {bits}-bit {format}",
        .path.display()
    )]
    UnsupportedFormat {
        path: PathBuf,
        bits: u16,
        format: &'static str,
    },

    #[error("wav error: {0}")]
    Wav(#[from] hound::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache read error: {0}")]
    CacheRead(#[from] ndarray_npy::ReadNpyError),

    #[error("cache write error: {0}")]
    CacheWrite(#[from] ndarray_npy::WriteNpyError),

    #[error("shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

pub type Result<T> = std::result::Result<T, Error>;
