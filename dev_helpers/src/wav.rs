use hound::{SampleFormat, WavReader};
use std::path::Path;

/// Samples read from a WAV file, interleaved if there is more than one channel.
pub struct WavData {
    pub sample_rate: u32,
    pub channel_count: u16,
    pub samples: Vec<f32>,
}

impl WavData {
    /// The first channel of the file.
    pub fn first_channel(&self) -> Vec<f32> {
        self.samples
            .iter()
            .step_by(self.channel_count.max(1) as usize)
            .copied()
            .collect()
    }
}

/// Reads a 16 bit integer or 32 bit float WAV file, scaling integer samples to `[-1, 1]`.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<WavData, hound::Error> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();
    let samples = match spec.sample_format {
        SampleFormat::Float => reader.samples::<f32>().collect::<Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let scale = 1. / (i16::MAX as f32);
            reader
                .samples::<i16>()
                .map(|sample| sample.map(|s| (s as f32) * scale))
                .collect::<Result<Vec<_>, _>>()?
        }
    };
    Ok(WavData {
        sample_rate: spec.sample_rate,
        channel_count: spec.channels,
        samples,
    })
}
