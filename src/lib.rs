#![warn(clippy::all, clippy::cargo)]

mod error;
mod life;
pub mod patterns;
mod pond;
mod utils;

pub use error::{LifeError, Result};
pub use life::{generation_channel, Generation, Life, Simultaneous, Standard, StreamHandle};
pub use pond::{Board, Cell, Dimensions, LivingIndex, Location, Pond, PondStatus};
pub use utils::{
    get_config, set_fill_rate, set_listener_capacity, set_stream_interval, ConfigSnapshot,
    NiceInt, Processor, Rule, Topology,
};

pub type DefaultProcessor = Simultaneous;
