pub mod aggregate;
pub mod config;
pub mod segments;
pub mod window;

pub use aggregate::{aggregate, build_profile, DepthProfile};
pub use config::{AggregationConfig, ConfigError, DepthConfig};
pub use segments::build_segments;
pub use window::{align_range, bucket_count, bucket_size, tick_window};
