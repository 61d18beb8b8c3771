use clap::{Parser, Subcommand};
use std::path::PathBuf;

use limpia_core::{DataConfig, DatasetPaths};

#[derive(Parser)]
#[command(name = "limpia", about = "Paired clean/noisy speech dataset preparation", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode clean/noisy WAV sets into the on-disk sample cache
    Prepare {
        /// Directory of clean training WAV files
        #[arg(long)]
        clean_dir: PathBuf,

        /// Directory of noisy training WAV files
        #[arg(long)]
        noisy_dir: PathBuf,

        /// Directory for the decoded sample caches
        #[arg(long, default_value = "cache")]
        cache_dir: PathBuf,

        /// Model input size in samples
        #[arg(long, default_value = "16384")]
        window_len: usize,

        /// Pre-emphasis coefficient (<= 0 disables)
        #[arg(long, default_value = "0.95")]
        preemphasis: f32,

        /// Batch size used to report the per-epoch batch count
        #[arg(long, default_value = "150")]
        batch_size: usize,

        /// Seed for the batch shuffle RNG
        #[arg(long, default_value = "0")]
        seed: u64,
    },
    /// Print the shape and value range of one cached sample array
    Info {
        /// Path to a .npy cache file
        cache_file: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Prepare {
            clean_dir,
            noisy_dir,
            cache_dir,
            window_len,
            preemphasis,
            batch_size,
            seed,
        } => {
            let config = DataConfig {
                window_len,
                batch_size,
                preemphasis,
                seed,
                ..DataConfig::default()
            };
            let paths = DatasetPaths::new(clean_dir, noisy_dir, cache_dir);

            let batcher = limpia_core::load_training_set(&config, &paths)?;
            eprintln!(
                "Decoded {} blocks of {} samples per set.",
                batcher.blocks(),
                batcher.block_len()
            );
            eprintln!(
                "Caches written to {} and {}.",
                paths.clean_cache_path().display(),
                paths.noisy_cache_path().display()
            );
            println!(
                "{} batches of {} windows per epoch (window size {}).",
                batcher.batch_count(),
                batch_size,
                2 * batcher.block_len()
            );
        }
        Command::Info { cache_file } => {
            let data = limpia_core::dataset::load_cached(&cache_file)?
                .ok_or_else(|| format!("no cache file at {}", cache_file.display()))?;
            let (blocks, block_len) = data.dim();
            let min = data.iter().copied().fold(f32::INFINITY, f32::min);
            let max = data.iter().copied().fold(f32::NEG_INFINITY, f32::max);
            println!("{}", cache_file.display());
            println!("  blocks:       {blocks}");
            println!("  block length: {block_len}");
            println!("  value range:  [{min:.1}, {max:.1}]");
        }
    }

    Ok(())
}
