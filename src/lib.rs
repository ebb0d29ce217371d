pub mod aggregator;
pub mod configuration;
pub mod context;
pub mod decode;
pub mod emitter;
pub mod filter;
pub mod pipeline;
pub mod provider;
pub mod providers;
pub mod sampler;
pub mod source;

pub use aggregator::ConfigAggregator;
pub use pipeline::{run, RunOptions, RunSummary};
