//! Tracks the pitch of a WAV file and prints each reported estimate as a JSON event.
//!
//! Usage:
//!   cargo run --release --example wav_pitch -- <file.wav> ['{"minFrequency": 80, "maxFrequency": 800}']
//!
//! The file is fed to the detector in 128 sample blocks, like an audio callback
//! would. The optional second argument is a detector configuration in JSON.
//! Run with `RUST_LOG=info` to also log note names.

use dev_helpers::{note_number_to_string, read_wav};
use log::info;
use mpm_stream::message::encode_event;
use mpm_stream::{DetectorConfig, PitchDetector};
use std::env;

const BLOCK_SIZE: usize = 128;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let path = args.get(1).ok_or("Usage: wav_pitch <file.wav> [config json]")?;
    let wav = read_wav(path)?;
    info!(
        "Read {} samples, {} channel(s) at {} Hz",
        wav.samples.len(),
        wav.channel_count,
        wav.sample_rate
    );

    let mut config = match args.get(2) {
        Some(json) => DetectorConfig::from_json(json)?,
        None => DetectorConfig::default(),
    };
    config.sample_rate = wav.sample_rate as f32;
    let mut detector = PitchDetector::new(config)?;

    let mut event_count = 0;
    let mut encode_error = None;
    for block in wav.first_channel().chunks(BLOCK_SIZE) {
        detector.process(block, |estimate| {
            if let Some(note_number) = estimate.midi_note_number() {
                info!(
                    "{:8.3} s | {} | confidence {:.2}",
                    estimate.timestamp,
                    note_number_to_string(note_number),
                    estimate.confidence
                );
            }
            match encode_event(estimate) {
                Ok(event) => println!("{}", event),
                Err(error) => encode_error = Some(error),
            }
            event_count += 1;
        });
        if let Some(error) = encode_error.take() {
            return Err(error.into());
        }
    }

    info!(
        "Analyzed {} frames, reported {} estimates",
        detector.processed_frame_count(),
        event_count
    );
    Ok(())
}
