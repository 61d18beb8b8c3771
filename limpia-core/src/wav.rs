//! WAV read/write primitives for the dataset pipeline.
//!
//! Reads keep raw int16 amplitudes as `f32`; normalization into [-1, 1]
//! happens later, at windowing time. Writes take normalized samples and
//! denormalize back to 16-bit PCM.

use std::path::Path;

use crate::error::{Error, Result};

/// Scale between normalized floats and 16-bit PCM amplitudes.
pub const INT16_SCALE: f32 = 32767.0;

/// Read a 16-bit PCM WAV file, returning raw int16 amplitudes as `f32`.
///
/// Multi-channel input keeps the first channel only.
pub fn read_samples(path: &Path) -> Result<Vec<f32>> {
    let reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    if spec.sample_format != hound::SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(Error::UnsupportedFormat {
            path: path.to_path_buf(),
            bits: spec.bits_per_sample,
            format: match spec.sample_format {
                hound::SampleFormat::Float => "float",
                hound::SampleFormat::Int => "int",
            },
        });
    }

    let channels = spec.channels as usize;
    let samples = reader
        .into_samples::<i16>()
        .collect::<std::result::Result<Vec<i16>, _>>()?;

    let samples = if channels > 1 {
        samples.chunks(channels).map(|c| c[0] as f32).collect()
    } else {
        samples.into_iter().map(f32::from).collect()
    };
    Ok(samples)
}

/// Write normalized samples in [-1, 1] as a mono 16-bit PCM WAV file.
///
/// Denormalizes by 32767 and rounds to the nearest integer; values outside
/// the representable range saturate.
pub fn write_samples(path: &Path, samples: &[f32], sample_rate: u32) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &s in samples {
        writer.write_sample((s * INT16_SCALE).round() as i16)?;
    }
    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_denormalize_round_trip() {
        let raw = [0.0f32, 16383.0, -16384.0, 32767.0];
        for &v in &raw {
            let denorm = ((v / INT16_SCALE) * INT16_SCALE).round();
            assert!((denorm - v).abs() <= 1.0, "{denorm} vs {v}");
        }
    }

    #[test]
    fn write_then_read_preserves_samples() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let path = dir.path().join("out.wav");

        let raw = [0i16, 100, -100, 16383, -16384, 32767, -32768];
        let normalized: Vec<f32> = raw.iter().map(|&v| v as f32 / INT16_SCALE).collect();
        write_samples(&path, &normalized, 16000).unwrap();

        let back = read_samples(&path).unwrap();
        assert_eq!(back.len(), raw.len());
        for (&got, &want) in back.iter().zip(raw.iter()) {
            assert!((got - want as f32).abs() <= 1.0, "{got} vs {want}");
        }
    }

    #[test]
    fn float_wav_is_rejected() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let path = dir.path().join("float.wav");
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 16000,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        writer.write_sample(0.5f32).unwrap();
        writer.finalize().unwrap();

        assert!(matches!(
            read_samples(&path),
            Err(Error::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn stereo_keeps_first_channel() {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        let path = dir.path().join("stereo.wav");
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 16000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for i in 0..4i16 {
            writer.write_sample(i * 10).unwrap(); // left
            writer.write_sample(-1i16).unwrap(); // right
        }
        writer.finalize().unwrap();

        let samples = read_samples(&path).unwrap();
        assert_eq!(samples, vec![0.0, 10.0, 20.0, 30.0]);
    }
}
