//! Windowed batch construction over paired sample arrays.
//!
//! Both windowers consume (D, L) arrays of raw int16-range amplitudes,
//! where L is half the model input size, and produce (N, 1, 2L) arrays of
//! normalized windows. [`TrainBatcher`] pairs every block with its
//! successor (overlapping windows, shuffled); [`EvalWindows`] folds
//! adjacent block pairs in order (non-overlapping, exhaustive).

use ndarray::{s, Array2, Array3, ArrayView2, Axis};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::wav::INT16_SCALE;

/// Scale raw int16-range amplitudes into [-1, 1].
///
/// Uniform scaling only; pre-emphasized samples slightly outside the int16
/// range are not clamped.
fn normalized(data: ArrayView2<'_, f32>) -> Array2<f32> {
    data.map(|&v| v * (1.0 / INT16_SCALE))
}

/// Gather overlapping two-block windows at the given start indices.
fn windows_at(data: &Array2<f32>, indices: &[usize]) -> Array3<f32> {
    let l = data.ncols();
    let mut out = Array3::zeros((indices.len(), 1, 2 * l));
    for (row, &k) in indices.iter().enumerate() {
        out.slice_mut(s![row, 0, ..l]).assign(&data.row(k));
        out.slice_mut(s![row, 0, l..]).assign(&data.row(k + 1));
    }
    out
}

/// Shuffled training batches of overlapping two-block windows.
///
/// The shuffle order is fixed at construction: the same instance always
/// returns the same batch for the same index, and re-shuffling means
/// building a new batcher. Pass a seeded RNG for reproducible runs.
pub struct TrainBatcher {
    clean: Array2<f32>,
    noisy: Array2<f32>,
    indices: Vec<usize>,
    batch_size: usize,
    batch_count: usize,
}

impl TrainBatcher {
    /// Build a batcher over a clean/noisy pair of (D, L) sample arrays.
    ///
    /// The index sequence is a shuffled permutation of the window start
    /// positions [0, D-2], then wraps around its own prefix until every
    /// batch is fully populated: `batch_count * batch_size` entries total,
    /// where `batch_count = ceil(D / batch_size)`.
    pub fn new<R: Rng + ?Sized>(
        clean: Array2<f32>,
        noisy: Array2<f32>,
        batch_size: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if batch_size == 0 {
            return Err(Error::InvalidBatchSize);
        }
        if clean.dim() != noisy.dim() {
            return Err(Error::ShapeMismatch {
                clean: clean.dim(),
                noisy: noisy.dim(),
            });
        }
        let blocks = clean.nrows();
        if blocks < 2 {
            return Err(Error::TooFewBlocks(blocks));
        }

        let mut indices: Vec<usize> = (0..blocks - 1).collect();
        indices.shuffle(rng);

        let batch_count = blocks.div_ceil(batch_size);
        let total = batch_count * batch_size;
        // Wrap around the shuffled prefix until every batch is full. One
        // pass suffices unless the batch size exceeds the block count.
        let mut wrap = 0;
        while indices.len() < total {
            indices.push(indices[wrap]);
            wrap += 1;
        }

        Ok(Self {
            clean: normalized(clean.view()),
            noisy: normalized(noisy.view()),
            indices,
            batch_size,
            batch_count,
        })
    }

    /// Number of batches in one epoch.
    pub fn batch_count(&self) -> usize {
        self.batch_count
    }

    /// Number of blocks D in the source arrays.
    pub fn blocks(&self) -> usize {
        self.clean.nrows()
    }

    /// Block length L, half the model input size.
    pub fn block_len(&self) -> usize {
        self.clean.ncols()
    }

    /// Return training batch `i` as a (clean, noisy) pair of
    /// (batch_size, 1, 2L) arrays.
    ///
    /// Window `k` is normalized block `k` followed by block `k+1`; clean
    /// and noisy use the same index set so pairs stay aligned. Calls are
    /// read-only and deterministic: the same `i` always yields the same
    /// batch. An index at or past [`Self::batch_count`] is an error.
    pub fn batch(&self, i: usize) -> Result<(Array3<f32>, Array3<f32>)> {
        if i >= self.batch_count {
            return Err(Error::BatchOutOfRange {
                index: i,
                count: self.batch_count,
            });
        }
        let idx = &self.indices[i * self.batch_size..(i + 1) * self.batch_size];
        Ok((windows_at(&self.clean, idx), windows_at(&self.noisy, idx)))
    }
}

/// The full evaluation set: adjacent non-overlapping block pairs, in
/// order, folded into (N, 1, 2L) windows.
pub struct EvalWindows {
    clean: Array3<f32>,
    noisy: Array3<f32>,
    source_blocks: usize,
}

impl EvalWindows {
    /// Window the full block range.
    pub fn new(clean: &Array2<f32>, noisy: &Array2<f32>) -> Result<Self> {
        Self::with_range(clean, noisy, None, None)
    }

    /// Window the block range `start..stop` (defaults: 0 and D).
    ///
    /// The span is truncated down to an even number of blocks so pairs
    /// fold evenly; a trailing odd block is dropped. An empty span yields
    /// empty arrays rather than an error.
    pub fn with_range(
        clean: &Array2<f32>,
        noisy: &Array2<f32>,
        start: Option<usize>,
        stop: Option<usize>,
    ) -> Result<Self> {
        if clean.dim() != noisy.dim() {
            return Err(Error::ShapeMismatch {
                clean: clean.dim(),
                noisy: noisy.dim(),
            });
        }
        let blocks = clean.nrows();
        let start = start.unwrap_or(0);
        let stop = stop.unwrap_or(blocks);
        if start > stop || stop > blocks {
            return Err(Error::InvalidRange {
                start,
                stop,
                blocks,
            });
        }

        let span = (stop - start) & !1;
        Ok(Self {
            clean: fold_pairs(clean.slice(s![start..start + span, ..]))?,
            noisy: fold_pairs(noisy.slice(s![start..start + span, ..]))?,
            source_blocks: blocks,
        })
    }

    /// Windowed clean data, shape (N, 1, 2L).
    pub fn clean(&self) -> &Array3<f32> {
        &self.clean
    }

    /// Windowed noisy data, shape (N, 1, 2L).
    pub fn noisy(&self) -> &Array3<f32> {
        &self.noisy
    }

    /// Number of windows N.
    pub fn len(&self) -> usize {
        self.clean.len_of(Axis(0))
    }

    /// True when the windowed range is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Block count D of the source arrays, before any range was applied.
    pub fn source_blocks(&self) -> usize {
        self.source_blocks
    }
}

/// Fold an even number of blocks into non-overlapping (N, 1, 2L) windows.
fn fold_pairs(data: ArrayView2<'_, f32>) -> Result<Array3<f32>> {
    let (rows, l) = data.dim();
    let folded = normalized(data).into_shape_with_order((rows / 2, 2 * l))?;
    Ok(folded.insert_axis(Axis(1)))
}
