//! CPAL-based audio output, opened at the sound's declared rate.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleRate, Stream, StreamConfig};
use ringbuf::traits::{Consumer, Observer, Producer, Split};
use ringbuf::{HeapProd, HeapRb};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::frame::Frame;
use crate::sink::{AudioError, AudioSink};

/// CPAL-based audio output.
///
/// Unlike a device-rate mixer feed, the stream is opened at the rate
/// the caller declares — a sound relabeled to twice its original rate
/// therefore plays in half the time. Frames travel through a ring
/// buffer into the device callback; [`drain`](AudioSink::drain) blocks
/// until the callback has consumed everything queued.
pub struct CpalOutput {
    config: StreamConfig,
    stream: Stream,
    producer: HeapProd<Frame>,
    running: Arc<AtomicBool>,
}

impl CpalOutput {
    /// Open the default output device at `sample_rate` Hz, stereo.
    /// The stream starts paused; call [`start`](AudioSink::start).
    pub fn open(sample_rate: u32) -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let device = host.default_output_device().ok_or(AudioError::NoDevice)?;

        let config = StreamConfig {
            channels: 2,
            sample_rate: SampleRate(sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        // About 100ms of queue between producer and callback
        let buffer_size = (sample_rate as usize / 10).max(1024);
        let rb = HeapRb::<Frame>::new(buffer_size);
        let (producer, mut consumer) = rb.split();

        let running = Arc::new(AtomicBool::new(false));
        let active = running.clone();
        let channels = config.channels as usize;

        let stream = device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    if !active.load(Ordering::Relaxed) {
                        data.fill(0.0);
                        return;
                    }
                    for chunk in data.chunks_mut(channels) {
                        if let Some(frame) = consumer.try_pop() {
                            let left = frame.left as f32 / 32768.0;
                            let right = frame.right as f32 / 32768.0;
                            // Write the stereo pair; zero-fill extras
                            for (i, sample) in chunk.iter_mut().enumerate() {
                                *sample = match i {
                                    0 => left,
                                    1 => right,
                                    _ => 0.0,
                                };
                            }
                        } else {
                            chunk.fill(0.0);
                        }
                    }
                },
                |err| eprintln!("Audio stream error: {}", err),
                None,
            )
            .map_err(|e| AudioError::StreamCreate(e.to_string()))?;

        Ok(Self { config, stream, producer, running })
    }

    /// Write a single frame, spinning until the ring buffer has room.
    pub fn write_spin(&mut self, frame: Frame) {
        while self.producer.try_push(frame).is_err() {
            std::hint::spin_loop();
        }
    }
}

impl AudioSink for CpalOutput {
    fn sample_rate(&self) -> u32 {
        self.config.sample_rate.0
    }

    fn write(&mut self, frames: &[Frame]) {
        for &frame in frames {
            self.write_spin(frame);
        }
    }

    fn start(&mut self) -> Result<(), AudioError> {
        self.running.store(true, Ordering::Relaxed);
        self.stream
            .play()
            .map_err(|e| AudioError::Playback(e.to_string()))
    }

    fn stop(&mut self) -> Result<(), AudioError> {
        self.running.store(false, Ordering::Relaxed);
        self.stream
            .pause()
            .map_err(|e| AudioError::Playback(e.to_string()))
    }

    fn drain(&mut self) {
        while self.producer.occupied_len() > 0 {
            std::thread::sleep(Duration::from_millis(1));
        }
        // Let the device play out its own internal buffer
        std::thread::sleep(Duration::from_millis(50));
    }
}
