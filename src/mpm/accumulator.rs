/// Collects chunks of arbitrary size into fixed size frames.
///
/// At most one frame is completed per call to [`push`](FrameAccumulator::push).
/// When a chunk completes a frame, at most one frame's worth of the samples
/// following the completed frame is carried over to the next frame. Any samples
/// beyond that are dropped.
pub struct FrameAccumulator {
    frame: Box<[f32]>,
    // Always <= frame.len()
    write_index: usize,
}

impl FrameAccumulator {
    pub fn new(frame_size: usize) -> Self {
        assert!(frame_size > 0, "Frame size must be greater than 0");
        FrameAccumulator {
            frame: vec![0.; frame_size].into_boxed_slice(),
            write_index: 0,
        }
    }

    pub fn frame_size(&self) -> usize {
        self.frame.len()
    }

    /// The number of samples currently buffered towards the next frame.
    pub fn write_index(&self) -> usize {
        self.write_index
    }

    /// Discards any buffered samples.
    pub fn reset(&mut self) {
        self.write_index = 0;
    }

    /// Appends `chunk` to the current frame. If the frame becomes full, `handler`
    /// is invoked with the number of samples consumed from `chunk` to complete it
    /// and the complete frame. Returns true if a frame was completed.
    pub fn push<F>(&mut self, chunk: &[f32], mut handler: F) -> bool
    where
        F: FnMut(usize, &[f32]),
    {
        let frame_size = self.frame.len();
        let needed = frame_size - self.write_index;

        if chunk.len() < needed {
            self.frame[self.write_index..self.write_index + chunk.len()].copy_from_slice(chunk);
            self.write_index += chunk.len();
            return false;
        }

        self.frame[self.write_index..].copy_from_slice(&chunk[..needed]);
        handler(needed, &self.frame);
        self.write_index = 0;

        // Carry over the remainder, truncated to one frame.
        let remainder = &chunk[needed..];
        let carried = remainder.len().min(frame_size);
        self.frame[..carried].copy_from_slice(&remainder[..carried]);
        self.write_index = carried;

        true
    }
}
