//! JSON messages exchanged with the host.
//!
//! Incoming: `{"type": "config", "minFreq"?: number, "maxFreq"?: number}`
//!
//! Outgoing: `{"type": "pitch", "freq": number | null, "confidence": number, "rms": number, "ts": number}`

use serde::Deserialize;
use serde_json::Value;

use crate::control::ConfigUpdate;
use crate::error::Result;
use crate::mpm::PitchEstimate;

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ControlMessage {
    Config {
        #[serde(rename = "minFreq", default)]
        min_freq: Option<Value>,
        #[serde(rename = "maxFreq", default)]
        max_freq: Option<Value>,
    },
}

/// A frequency field is applied if it is a nonzero number. Values that give
/// no usable lag range, e.g negative ones, make subsequent frames unpitched.
fn frequency_field(value: Option<&Value>) -> Option<f32> {
    let frequency = value?.as_f64()?;
    if frequency != 0.0 && !frequency.is_nan() {
        // Magnitudes beyond f32 saturate to infinity
        Some(frequency as f32)
    } else {
        None
    }
}

/// Parses a control message. Returns `None` for anything that is not a
/// config message with at least one applicable field. Fields are
/// validated independently of each other.
pub fn parse_control_message(message: &str) -> Option<ConfigUpdate> {
    let ControlMessage::Config { min_freq, max_freq } = serde_json::from_str::<ControlMessage>(message).ok()?;
    let update = ConfigUpdate {
        min_frequency: frequency_field(min_freq.as_ref()),
        max_frequency: frequency_field(max_freq.as_ref()),
    };
    if update.is_empty() {
        None
    } else {
        Some(update)
    }
}

/// Encodes an estimate as a pitch event message.
pub fn encode_event(estimate: &PitchEstimate) -> Result<String> {
    Ok(serde_json::to_string(estimate)?)
}
