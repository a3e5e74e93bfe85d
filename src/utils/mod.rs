mod config;
mod format_int;
mod topology;
mod traits;

pub use config::{
    get_config, set_fill_rate, set_listener_capacity, set_stream_interval, ConfigSnapshot,
};
pub use format_int::NiceInt;
pub use topology::Topology;
pub use traits::{Processor, Rule};
