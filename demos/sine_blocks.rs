//! Pull a sine tone through a sample sink and write it to a WAV file.
//!
//! The upstream stage delivers irregularly sized, timestamped chunks; the
//! sink re-chunks them into fixed 512-frame blocks.
//!
//! Usage: cargo run --example sine_blocks [out.wav]

use std::f32::consts::PI;

use anyhow::{Context, Result};
use spigot::{
    AudioSample, FrameSlot, LinkSpec, Rational, ReadSamples, SampleBlock, SinkError, SinkTable,
    Upstream,
};
use tracing::info;

const SAMPLE_RATE: u32 = 48_000;
const TONE_HZ: f32 = 440.0;
const AMPLITUDE: f32 = 0.6;
const TOTAL_FRAMES: usize = 2 * 48_000;
const BLOCK_FRAMES: usize = 512;

/// Delivery sizes cycle through deliberately awkward values.
const CHUNK_SIZES: [usize; 4] = [389, 1024, 57, 700];

/// Generates a mono sine tone in irregular chunks, timestamped in the link
/// time base.
struct SineSource {
    phase: f32,
    produced: usize,
    deliveries: usize,
}

impl SineSource {
    fn new() -> Self {
        Self {
            phase: 0.0,
            produced: 0,
            deliveries: 0,
        }
    }
}

impl Upstream for SineSource {
    type Frame = SampleBlock<i16>;

    fn poll_frames(&mut self) -> Result<usize, SinkError> {
        Ok(usize::from(self.produced < TOTAL_FRAMES))
    }

    fn request_frame(&mut self, slot: &mut FrameSlot<SampleBlock<i16>>) -> Result<(), SinkError> {
        if self.produced >= TOTAL_FRAMES {
            return Err(SinkError::EndOfStream);
        }

        let want = CHUNK_SIZES[self.deliveries % CHUNK_SIZES.len()];
        let frames = want.min(TOTAL_FRAMES - self.produced);
        let phase_inc = 2.0 * PI * TONE_HZ / SAMPLE_RATE as f32;

        let mut data = Vec::with_capacity(frames);
        for _ in 0..frames {
            let value = self.phase.sin() * AMPLITUDE;
            data.push(i16::from_f64_normalized(value as f64));
            self.phase = (self.phase + phase_inc) % (2.0 * PI);
        }

        let pts = self.produced as i64;
        self.produced += frames;
        self.deliveries += 1;

        slot.deliver(SampleBlock::new(data, 1, Some(pts))?);
        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let out_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sine.wav".to_string());

    let table = SinkTable::with_builtins();
    let kind = table.get("samplesink").context("samplesink kind missing")?;

    let spec = LinkSpec::new(SAMPLE_RATE, 1, Rational::new(1, SAMPLE_RATE as i32));
    let mut sink = kind.build_sample_sink(SineSource::new(), spec)?;

    let wav_spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer =
        hound::WavWriter::create(&out_path, wav_spec).with_context(|| format!("creating {out_path}"))?;

    let mut blocks = 0usize;
    loop {
        match sink.read_samples(BLOCK_FRAMES) {
            Ok(block) => {
                if blocks % 50 == 0 {
                    info!(
                        "block {} at pts {:?} ({} frames)",
                        blocks,
                        block.pts(),
                        block.frames()
                    );
                }
                for &sample in block.data() {
                    writer.write_sample(sample)?;
                }
                blocks += 1;
            }
            Err(err) if err.is_eof() => break,
            Err(err) => return Err(err.into()),
        }
    }

    writer.finalize()?;
    info!("wrote {} blocks to {}", blocks, out_path);
    Ok(())
}
