//! Lock free delivery of configuration updates to a running detector.
//!
//! The sending side lives on a non real time thread, the receiving side is
//! owned by the [`PitchDetector`](crate::mpm::PitchDetector), which drains
//! pending updates once at the start of each frame's analysis.

use rtrb::{Consumer, Producer, RingBuffer};

use crate::config::FrequencyRange;
use crate::error::{Error, Result};
use crate::message::parse_control_message;

/// A change to the frequency bounds. Fields that are `None` are left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConfigUpdate {
    pub min_frequency: Option<f32>,
    pub max_frequency: Option<f32>,
}

impl ConfigUpdate {
    pub fn is_empty(&self) -> bool {
        self.min_frequency.is_none() && self.max_frequency.is_none()
    }

    pub fn apply(&self, range: &mut FrequencyRange) {
        if let Some(min) = self.min_frequency {
            range.min = min;
        }
        if let Some(max) = self.max_frequency {
            range.max = max;
        }
    }
}

/// Creates a single producer, single consumer queue for configuration updates.
pub fn control_channel(capacity: usize) -> (ControlSender, ControlReceiver) {
    let (producer, consumer) = RingBuffer::<ConfigUpdate>::new(capacity).split();
    (ControlSender { producer }, ControlReceiver { consumer })
}

/// Sends configuration updates to a detector.
pub struct ControlSender {
    producer: Producer<ConfigUpdate>,
}

impl ControlSender {
    /// Queues an update. Fails if the queue is full, in which case the
    /// update is dropped.
    pub fn send(&mut self, update: ConfigUpdate) -> Result<()> {
        match self.producer.push(update) {
            Ok(_) => Ok(()),
            Err(_) => {
                log::warn!("Control queue full, dropping {:?}", update);
                Err(Error::ControlQueueFull)
            }
        }
    }

    /// Parses a JSON control message, e.g `{"type": "config", "minFreq": 80}`,
    /// and queues the resulting update. Malformed messages and messages without
    /// applicable fields are ignored. Returns true if an update was queued.
    pub fn send_message(&mut self, message: &str) -> Result<bool> {
        match parse_control_message(message) {
            Some(update) => self.send(update).map(|_| true),
            None => {
                log::debug!("Ignoring control message {}", message);
                Ok(false)
            }
        }
    }
}

/// Receives configuration updates on the audio thread.
pub struct ControlReceiver {
    consumer: Consumer<ConfigUpdate>,
}

impl ControlReceiver {
    /// Applies all pending updates to `range` in the order they were sent.
    /// Returns the number of applied updates. Never blocks.
    pub fn apply_pending(&mut self, range: &mut FrequencyRange) -> usize {
        let mut count = 0;
        while let Ok(update) = self.consumer.pop() {
            update.apply(range);
            count += 1;
        }
        count
    }
}
