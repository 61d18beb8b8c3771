//! Dataset loading and on-disk caching.
//!
//! Decoding a full training set of WAV files is slow, so the decoded
//! (D, L) sample arrays are cached as `.npy` files and reloaded on
//! subsequent runs.

use std::fs;
use std::path::{Path, PathBuf};

use ndarray::Array2;
use ndarray_npy::{read_npy, write_npy};
use tracing::{debug, info, warn};

use crate::config::DataConfig;
use crate::error::{Error, Result};
use crate::preemph::pre_emphasis;
use crate::wav;

/// Locations of the WAV sets and their decoded caches.
#[derive(Debug, Clone)]
pub struct DatasetPaths {
    /// Directory of clean WAV files.
    pub clean_dir: PathBuf,
    /// Directory of noisy WAV files.
    pub noisy_dir: PathBuf,
    /// Directory holding the decoded `.npy` caches.
    pub cache_dir: PathBuf,
    /// Clean cache file name within `cache_dir`.
    pub clean_cache: String,
    /// Noisy cache file name within `cache_dir`.
    pub noisy_cache: String,
}

impl DatasetPaths {
    /// Paths with the default cache file names.
    pub fn new(clean_dir: PathBuf, noisy_dir: PathBuf, cache_dir: PathBuf) -> Self {
        Self {
            clean_dir,
            noisy_dir,
            cache_dir,
            clean_cache: "clean.npy".to_string(),
            noisy_cache: "noisy.npy".to_string(),
        }
    }

    /// Full path of the clean cache file.
    pub fn clean_cache_path(&self) -> PathBuf {
        self.cache_dir.join(&self.clean_cache)
    }

    /// Full path of the noisy cache file.
    pub fn noisy_cache_path(&self) -> PathBuf {
        self.cache_dir.join(&self.noisy_cache)
    }
}

/// List the `*.wav` files under `dir`, sorted by name for a deterministic
/// concatenation order. An empty set is an error.
pub fn wav_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.extension()
                .map_or(false, |ext| ext.eq_ignore_ascii_case("wav"))
        })
        .collect();
    files.sort();
    if files.is_empty() {
        return Err(Error::EmptyFileSet(dir.to_path_buf()));
    }
    Ok(files)
}

/// Decode a set of WAV files into one pre-emphasized (D, L) sample array.
///
/// Files are concatenated into a single signal, pre-emphasized as a whole,
/// and reshaped into blocks of length `window_len / 2`. Trailing samples
/// that do not fill a whole block are dropped.
pub fn load_wav_set(paths: &[PathBuf], window_len: usize, preemphasis: f32) -> Result<Array2<f32>> {
    let block_len = window_len / 2;
    if block_len == 0 {
        return Err(Error::InvalidWindowLen(window_len));
    }

    let mut signal = Vec::new();
    for (i, path) in paths.iter().enumerate() {
        debug!("decoding {} ({}/{})", path.display(), i + 1, paths.len());
        signal.extend(wav::read_samples(path)?);
    }
    pre_emphasis(&mut signal, preemphasis);

    let blocks = signal.len() / block_len;
    signal.truncate(blocks * block_len);
    Ok(Array2::from_shape_vec((blocks, block_len), signal)?)
}

/// Load a cached sample array. A missing file is a miss, not an error.
pub fn load_cached(path: &Path) -> Result<Option<Array2<f32>>> {
    if !path.exists() {
        return Ok(None);
    }
    let data: Array2<f32> = read_npy(path)?;
    debug!("cache hit: {} ({:?})", path.display(), data.dim());
    Ok(Some(data))
}

/// Store a sample array under `path`, creating parent directories as needed.
pub fn store(path: &Path, data: &Array2<f32>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    write_npy(path, data)?;
    debug!("cached {} ({:?})", path.display(), data.dim());
    Ok(())
}

/// Load a clean/noisy pair of sample arrays, via the cache when present.
///
/// On a miss both WAV sets are decoded and both caches written, so a
/// subsequent run skips decoding entirely. A clean/noisy block-count
/// mismatch is only warned about here; windower construction rejects it.
pub fn load_pair(config: &DataConfig, paths: &DatasetPaths) -> Result<(Array2<f32>, Array2<f32>)> {
    let clean_cache = paths.clean_cache_path();
    let noisy_cache = paths.noisy_cache_path();

    let pair = match (load_cached(&clean_cache)?, load_cached(&noisy_cache)?) {
        (Some(clean), Some(noisy)) => (clean, noisy),
        _ => {
            info!(
                "cache miss, decoding {} and {}",
                paths.clean_dir.display(),
                paths.noisy_dir.display()
            );
            let clean = load_wav_set(
                &wav_files(&paths.clean_dir)?,
                config.window_len,
                config.preemphasis,
            )?;
            let noisy = load_wav_set(
                &wav_files(&paths.noisy_dir)?,
                config.window_len,
                config.preemphasis,
            )?;
            store(&clean_cache, &clean)?;
            store(&noisy_cache, &noisy)?;
            (clean, noisy)
        }
    };

    if pair.0.dim() != pair.1.dim() {
        warn!(
            "clean/noisy sample arrays differ in shape: {:?} vs {:?}",
            pair.0.dim(),
            pair.1.dim()
        );
    }
    Ok(pair)
}
