//! @ai:module:intent Benchmark target definitions and loading
//! @ai:module:layer domain
//! @ai:module:public_api BenchmarkTarget, SourceFile, SessionTarget, TargetLoader, default_targets

pub mod fibonacci;
pub mod loader;
pub mod target;

pub use fibonacci::default_targets;
pub use loader::{TargetLoader, TargetLoaderTrait};
pub use target::{BenchmarkTarget, SessionTarget, SourceFile, ToolRequirement};
