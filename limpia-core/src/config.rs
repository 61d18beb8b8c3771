/// Configuration for dataset preparation and windowing.
#[derive(Debug, Clone)]
pub struct DataConfig {
    /// Model input size in samples. Default: 16384 (about 1 s at 16 kHz).
    pub window_len: usize,
    /// Number of windows per training batch. Default: 150.
    pub batch_size: usize,
    /// Pre-emphasis coefficient applied at load time. `<= 0` disables.
    /// Default: 0.95.
    pub preemphasis: f32,
    /// Sample rate in Hz for written output. Default: 16000.
    pub sample_rate: u32,
    /// Seed for the batch shuffle RNG. Default: 0.
    pub seed: u64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            window_len: 16384,
            batch_size: 150,
            preemphasis: 0.95,
            sample_rate: 16000,
            seed: 0,
        }
    }
}

impl DataConfig {
    /// Block length L: half the model input size. Sample arrays are shaped
    /// (D, L) and two adjacent blocks form one full input window.
    pub fn half_window(&self) -> usize {
        self.window_len / 2
    }
}
