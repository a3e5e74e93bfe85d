use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

struct Config {
    listener_capacity: AtomicUsize,
    stream_interval_us: AtomicU64,
    fill_rate_bits: AtomicU64,
}

static CONFIG: Config = Config {
    listener_capacity: AtomicUsize::new(16),
    stream_interval_us: AtomicU64::new(100_000),
    // 0.3_f64
    fill_rate_bits: AtomicU64::new(0x3fd3_3333_3333_3333),
};

pub struct ConfigSnapshot {
    /// Buffer size of channels made by `generation_channel`.
    pub listener_capacity: usize,
    /// Pacing of the demo driver.
    pub stream_interval: Duration,
    /// Probability of a cell being alive in `patterns::random` by default.
    pub fill_rate: f64,
}

pub fn get_config() -> ConfigSnapshot {
    ConfigSnapshot {
        listener_capacity: CONFIG.listener_capacity.load(Ordering::Relaxed),
        stream_interval: Duration::from_micros(CONFIG.stream_interval_us.load(Ordering::Relaxed)),
        fill_rate: f64::from_bits(CONFIG.fill_rate_bits.load(Ordering::Relaxed)),
    }
}

/// Zero is bumped to one, tokio channels can't be unbuffered.
pub fn set_listener_capacity(capacity: usize) {
    CONFIG
        .listener_capacity
        .store(capacity.max(1), Ordering::Relaxed);
}

pub fn set_stream_interval(interval: Duration) {
    let us = u64::try_from(interval.as_micros()).unwrap_or(u64::MAX);
    CONFIG.stream_interval_us.store(us, Ordering::Relaxed);
}

/// The rate is clamped into `[0, 1]`.
pub fn set_fill_rate(fill_rate: f64) {
    let fill_rate = if fill_rate.is_nan() {
        0.
    } else {
        fill_rate.clamp(0., 1.)
    };
    CONFIG
        .fill_rate_bits
        .store(fill_rate.to_bits(), Ordering::Relaxed);
}
