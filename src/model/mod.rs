pub mod bucket;
pub mod num;
pub mod pool;
pub mod segment;
pub mod snapshot;
pub mod token;

pub use bucket::{LiquidityBucket, PoolContribution, TickRange};
pub use pool::{InitializedTick, PoolDepthRow};
pub use segment::LiquiditySegment;
pub use snapshot::DepthSnapshot;
pub use token::TokenMeta;
