//! Playback of a finished composite signal on the default output device.
//!
//! The audio callback only pops from a lock-free ring; the main thread keeps
//! the ring topped up and waits for it to drain.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::{Duration, Instant},
};

use color_eyre::eyre::{bail, eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::RingBuffer;

/// Ring capacity in samples (≈ 170 ms at 48 kHz)
const RING_CAPACITY: usize = 8192;
/// Sleep between refills of the ring
const FEED_INTERVAL: Duration = Duration::from_millis(10);
/// Extra wait after the ring drains so the device buffer empties too
const DRAIN_TAIL: Duration = Duration::from_millis(250);
/// Slack on top of the ring's nominal play time before draining gives up
const DRAIN_SLACK: Duration = Duration::from_secs(2);

/// Longest wait for `queued` samples to leave the ring at `sample_rate`.
fn drain_deadline(queued: usize, sample_rate: f64) -> Duration {
    Duration::from_secs_f64(queued as f64 / sample_rate) + DRAIN_SLACK
}

/// Play `samples` (mono) on every channel of the default output device.
///
/// The device must already run at `sample_rate`; the sweep is never resampled.
pub fn play(samples: &[f64], sample_rate: f64) -> EyreResult<()> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;

    let device_rate = config.sample_rate().0 as f64;
    if device_rate != sample_rate {
        bail!(
            "output device runs at {device_rate} Hz but the sweep was synthesized at {sample_rate} Hz; \
             pass --sample-rate {device_rate}"
        );
    }
    let channels = config.channels() as usize;
    log::debug!("playing {} samples on {channels} channels", samples.len());

    let (mut producer, mut consumer) = RingBuffer::<f32>::new(RING_CAPACITY);
    let stream_failed = Arc::new(AtomicBool::new(false));
    let failed_flag = Arc::clone(&stream_failed);

    let stream = device.build_output_stream(
        &config.into(),
        move |data: &mut [f32], _| {
            // Silence on underrun; mono duplicated to all channels
            for frame in data.chunks_mut(channels) {
                frame.fill(consumer.pop().unwrap_or(0.0));
            }
        },
        move |err| {
            log::error!("stream error: {err}");
            failed_flag.store(true, Ordering::Relaxed);
        },
        None,
    )?;
    stream.play()?;

    // The callback may stop consuming without reporting an error
    let stall_limit = drain_deadline(RING_CAPACITY, sample_rate);
    let mut last_progress = Instant::now();
    let mut pending = samples.iter().map(|&s| s as f32).peekable();
    while pending.peek().is_some() {
        if stream_failed.load(Ordering::Relaxed) {
            bail!("output stream failed during playback");
        }
        let free = producer.slots();
        if free == 0 {
            if last_progress.elapsed() >= stall_limit {
                bail!("output device stopped consuming samples");
            }
            thread::sleep(FEED_INTERVAL);
            continue;
        }
        last_progress = Instant::now();
        for sample in pending.by_ref().take(free) {
            producer
                .push(sample)
                .map_err(|_| eyre!("playback ring overflowed"))?;
        }
    }

    let queued = RING_CAPACITY - producer.slots();
    let deadline = Instant::now() + drain_deadline(queued, sample_rate);
    while producer.slots() < RING_CAPACITY {
        if stream_failed.load(Ordering::Relaxed) {
            bail!("output stream failed while draining");
        }
        if Instant::now() >= deadline {
            log::warn!(
                "gave up draining with {} samples still queued",
                RING_CAPACITY - producer.slots()
            );
            break;
        }
        thread::sleep(FEED_INTERVAL);
    }
    thread::sleep(DRAIN_TAIL);

    log::info!("playback finished");
    Ok(())
}
