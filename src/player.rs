//! Blocking playback of sound buffers through an audio sink.

use bb_audio::{AudioError, AudioSink, CpalOutput, Frame};
use bb_sound::SoundBuffer;

/// Presents sampled content on an audio device.
///
/// Playback crosses the engine boundary as the canonical encoded byte
/// stream: the sound is serialized by [`SoundBuffer::encode`] and the
/// bytes are re-framed for the sink, so whatever the device hears is
/// exactly what the encoder produced (clamping included).
pub struct BoomBox {
    sound: SoundBuffer,
}

impl BoomBox {
    pub fn new(sound: SoundBuffer) -> Self {
        Self { sound }
    }

    /// The content this BoomBox presents.
    pub fn sound(&self) -> &SoundBuffer {
        &self.sound
    }

    pub fn into_sound(self) -> SoundBuffer {
        self.sound
    }

    /// Play on the default output device, blocking until the sound has
    /// been presented in full. The device line is opened at the
    /// sound's declared sample rate.
    pub fn play(&self) -> Result<(), AudioError> {
        let mut sink = CpalOutput::open(self.sound.sample_rate() as u32)?;
        self.play_with(&mut sink)
    }

    /// Play through a caller-provided sink, blocking until drained.
    pub fn play_with(&self, sink: &mut dyn AudioSink) -> Result<(), AudioError> {
        let frames = sound_to_frames(&self.sound)?;
        sink.start()?;
        sink.write(&frames);
        sink.drain();
        sink.stop()
    }
}

/// Re-frame a sound's encoded byte stream for a stereo sink.
///
/// Mono material is duplicated onto both legs; more than two channels
/// cannot be presented and fails with [`AudioError::Playback`].
pub fn sound_to_frames(sound: &SoundBuffer) -> Result<Vec<Frame>, AudioError> {
    let channels = sound.channel_count();
    if channels > 2 {
        return Err(AudioError::Playback(format!(
            "cannot present {} channels on a stereo line",
            channels
        )));
    }
    if channels == 0 {
        return Ok(Vec::new());
    }

    let raw = sound.encode();
    let frame_size = channels * 2;
    let mut frames = Vec::with_capacity(sound.sample_count());
    for chunk in raw.chunks_exact(frame_size) {
        let left = i16::from_be_bytes([chunk[0], chunk[1]]);
        let frame = if channels == 2 {
            Frame { left, right: i16::from_be_bytes([chunk[2], chunk[3]]) }
        } else {
            Frame::mono(left)
        };
        frames.push(frame);
    }
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockSink {
        rate: u32,
        written: Vec<Frame>,
        started: bool,
        stopped: bool,
        drained: bool,
    }

    impl MockSink {
        fn new(rate: u32) -> Self {
            Self { rate, written: Vec::new(), started: false, stopped: false, drained: false }
        }
    }

    impl AudioSink for MockSink {
        fn sample_rate(&self) -> u32 {
            self.rate
        }
        fn write(&mut self, frames: &[Frame]) {
            self.written.extend_from_slice(frames);
        }
        fn start(&mut self) -> Result<(), AudioError> {
            self.started = true;
            Ok(())
        }
        fn stop(&mut self) -> Result<(), AudioError> {
            self.stopped = true;
            Ok(())
        }
        fn drain(&mut self) {
            self.drained = true;
        }
    }

    #[test]
    fn mono_duplicates_onto_both_legs() {
        let sound = SoundBuffer::from_channels(8000.0, vec![vec![16.0, -16.0]]).unwrap();
        let frames = sound_to_frames(&sound).unwrap();
        assert_eq!(frames, vec![Frame::mono(16), Frame::mono(-16)]);
    }

    #[test]
    fn stereo_maps_channel_order_to_legs() {
        let sound =
            SoundBuffer::from_channels(8000.0, vec![vec![1.0, 2.0], vec![-1.0, -2.0]]).unwrap();
        let frames = sound_to_frames(&sound).unwrap();
        assert_eq!(frames[0], Frame { left: 1, right: -1 });
        assert_eq!(frames[1], Frame { left: 2, right: -2 });
    }

    #[test]
    fn frames_reflect_encoder_clamping() {
        let sound = SoundBuffer::from_channels(8000.0, vec![vec![40000.0]]).unwrap();
        let frames = sound_to_frames(&sound).unwrap();
        assert_eq!(frames[0], Frame::mono(32767));
    }

    #[test]
    fn too_many_channels_rejected() {
        let sound = SoundBuffer::from_channels(
            8000.0,
            vec![vec![0.0], vec![0.0], vec![0.0]],
        )
        .unwrap();
        assert!(matches!(
            sound_to_frames(&sound),
            Err(AudioError::Playback(_))
        ));
    }

    #[test]
    fn play_with_runs_the_full_sink_lifecycle() {
        let sound = SoundBuffer::from_channels(8000.0, vec![vec![100.0, 200.0]]).unwrap();
        let mut sink = MockSink::new(8000);
        BoomBox::new(sound).play_with(&mut sink).unwrap();
        assert!(sink.started);
        assert!(sink.drained);
        assert!(sink.stopped);
        assert_eq!(sink.written.len(), 2);
    }
}
