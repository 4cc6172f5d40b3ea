//! Synthesizes a tone, optionally mangles it, and plays it or writes
//! it to a WAV file.
//!
//! Usage:
//!   cargo run --bin tone -- 440 [--seconds 2] [--reverse] [--noise 500] [--speed 2.0] [--wav out.wav]

use boombox::{sine_wave, sound_to_wav, BinaryOp, BoomBox, SoundBuffer, UnaryOp};
use std::{env, fs};

const SAMPLE_RATE: f32 = 22050.0;
const AMPLITUDE: f64 = 12000.0;

fn main() {
    let args: Vec<String> = env::args().collect();
    let frequency: f64 = args
        .get(1)
        .and_then(|a| a.parse().ok())
        .unwrap_or_else(|| {
            eprintln!("Usage: tone <frequency-hz> [--seconds N] [--reverse] [--noise MAX] [--speed MULT] [--wav out.wav]");
            std::process::exit(1);
        });

    let seconds: u64 = flag_value(&args, "--seconds").unwrap_or(1);
    let micros = seconds * 1_000_000;

    // Root plus a fifth, mixed down
    let root = sine_wave(frequency, micros, SAMPLE_RATE, AMPLITUDE);
    let fifth = sine_wave(frequency * 1.5, micros, SAMPLE_RATE, AMPLITUDE / 2.0);
    let mut sound = BinaryOp::Add.apply(&root, &fifth).unwrap_or_else(|e| {
        eprintln!("Failed to mix: {}", e);
        std::process::exit(1);
    });

    if args.iter().any(|a| a == "--reverse") {
        sound = UnaryOp::Reverse.apply(&sound);
    }
    if let Some(max) = flag_value::<f64>(&args, "--noise") {
        sound = UnaryOp::noise(max).apply(&sound);
    }
    if let Some(mult) = flag_value::<f64>(&args, "--speed") {
        sound = UnaryOp::speed_change(mult).apply(&sound);
    }

    report(&sound);

    if let Some(path) = args.iter().position(|a| a == "--wav").and_then(|i| args.get(i + 1)) {
        if let Err(e) = fs::write(path, sound_to_wav(&sound)) {
            eprintln!("Failed to write {}: {}", path, e);
            std::process::exit(1);
        }
        println!("Wrote {}", path);
        return;
    }

    if let Err(e) = BoomBox::new(sound).play() {
        eprintln!("Playback failed: {}", e);
        std::process::exit(1);
    }
}

fn flag_value<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}

fn report(sound: &SoundBuffer) {
    println!("Rate:     {} Hz", sound.sample_rate());
    println!("Channels: {}", sound.channel_count());
    println!("Samples:  {}", sound.sample_count());
    println!("Length:   {} ms", sound.millisecond_length());
}
