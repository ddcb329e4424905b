//! Fixed-size audio reads over variably-sized upstream deliveries.

use std::fmt;

use tracing::{debug, trace};

use crate::block::SampleBlock;
use crate::error::SinkError;
use crate::fifo::SampleFifo;
use crate::link::{LinkSpec, Upstream};
use crate::sample::AudioSample;
use crate::sink::frame_sink::FrameSink;
use crate::sink::{ReadSamples, Sink};

/// A terminal sink that re-chunks upstream audio into caller-sized blocks.
///
/// Upstream deliveries land in an internal sample queue; `read_samples`
/// returns exactly the requested number of sample frames per call, however
/// the deliveries were sized. Each returned block carries a timestamp
/// interpolated in the link time base from the most recent delivery that
/// had one; blocks drained before any timestamped delivery carry none.
///
/// # Behavior
/// - `read_samples(n)` pulls upstream deliveries until `n` frames are
///   queued, then drains exactly `n`
/// - A timestamped delivery re-anchors the pts cursor, backed up by the
///   duration of the frames still queued ahead of it
/// - At end of stream the queue remainder is drained as one short block;
///   after that, end of stream is reported again
pub struct SampleSink<U, S>
where
    U: Upstream<Frame = SampleBlock<S>>,
    S: AudioSample,
{
    driver: FrameSink<U>,
    spec: LinkSpec,
    fifo: SampleFifo<S>,
    /// Pts of the current queue front, in link time base ticks.
    /// `None` until a timestamped delivery has been seen.
    next_pts: Option<i64>,
    primed: bool,
}

impl<U, S> SampleSink<U, S>
where
    U: Upstream<Frame = SampleBlock<S>>,
    S: AudioSample,
{
    /// Create a sample sink over `upstream` with the link's negotiated
    /// properties.
    ///
    /// Panics if `spec` is not valid.
    pub fn new(upstream: U, spec: LinkSpec) -> Self {
        assert!(spec.is_valid(), "invalid link spec {spec:?}");
        Self {
            driver: FrameSink::new(upstream),
            fifo: SampleFifo::new(spec.channels as usize),
            spec,
            next_pts: None,
            primed: false,
        }
    }

    /// Consumes the sink and returns the upstream stage.
    pub fn into_upstream(self) -> U {
        self.driver.into_upstream()
    }

    fn enqueue(&mut self, block: SampleBlock<S>) -> Result<(), SinkError> {
        assert_eq!(
            block.channels(),
            self.spec.channels,
            "delivery has {} channels, link negotiated {}",
            block.channels(),
            self.spec.channels
        );
        // next_pts tracks the queue front. A delivery's pts dates its own
        // first frame, so back the cursor up past whatever is queued ahead.
        if let Some(pts) = block.pts() {
            self.next_pts = Some(pts - self.spec.frames_to_ticks(self.fifo.frames()));
        }
        trace!(
            "SampleSink: queueing {} frames (pts {:?})",
            block.frames(),
            block.pts()
        );
        self.fifo.append(block.data())
    }

    fn drain_block(&mut self, frames: usize) -> Result<SampleBlock<S>, SinkError> {
        let data = self.fifo.drain_frames(frames)?;
        let pts = self.next_pts;
        if let Some(front) = self.next_pts {
            self.next_pts = Some(front + self.spec.frames_to_ticks(frames));
        }
        Ok(SampleBlock::from_raw(data, self.spec.channels, pts))
    }
}

impl<U, S> fmt::Debug for SampleSink<U, S>
where
    U: Upstream<Frame = SampleBlock<S>>,
    S: AudioSample,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SampleSink")
            .field("driver", &self.driver)
            .field("spec", &self.spec)
            .field("queued_frames", &self.fifo.frames())
            .field("next_pts", &self.next_pts)
            .field("primed", &self.primed)
            .finish()
    }
}

impl<U, S> Sink for SampleSink<U, S>
where
    U: Upstream<Frame = SampleBlock<S>>,
    S: AudioSample,
{
    type Frame = SampleBlock<S>;

    fn poll(&mut self) -> Result<usize, SinkError> {
        self.driver.poll()
    }

    /// Return one upstream-sized block.
    ///
    /// Samples already queued by `read_samples` come back first, as a
    /// single block, so mixed callers still see samples in delivery order.
    /// With an empty queue the delivery passes through untouched.
    fn read(&mut self) -> Result<SampleBlock<S>, SinkError> {
        let queued = self.fifo.frames();
        if queued > 0 {
            return self.drain_block(queued);
        }
        self.driver.read()
    }
}

impl<U, S> ReadSamples for SampleSink<U, S>
where
    U: Upstream<Frame = SampleBlock<S>>,
    S: AudioSample,
{
    fn read_samples(&mut self, frames: usize) -> Result<SampleBlock<S>, SinkError> {
        assert!(frames > 0, "read_samples needs a non-zero frame count");

        if !self.primed {
            // First request sizes the queue; it still grows past this.
            self.fifo.reserve_frames(frames)?;
            self.primed = true;
            debug!("SampleSink: queue primed for {} frames", frames);
        }

        loop {
            if self.fifo.frames() >= frames {
                return self.drain_block(frames);
            }

            match self.driver.read() {
                Ok(block) => self.enqueue(block)?,
                Err(SinkError::EndOfStream) if !self.fifo.is_empty() => {
                    let remaining = self.fifo.frames();
                    debug!(
                        "SampleSink: end of stream, draining final {} frames",
                        remaining
                    );
                    return self.drain_block(remaining);
                }
                Err(err) => return Err(err),
            }
        }
    }
}
