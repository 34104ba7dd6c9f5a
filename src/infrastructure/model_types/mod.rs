//! Model type registration and construction

mod builtin;
mod factory;
mod registry;

pub use builtin::{builtin_builders, registry_from_config};
pub use factory::ModelFactory;
pub use registry::{ModelBuilder, ModelTypeRegistry};
