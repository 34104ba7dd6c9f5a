//! Model domain: identity, capability contract, variants, and the store seam

pub mod entity;
pub mod generic;
pub mod lda;
pub mod repository;

pub use entity::{ModelId, PredictionModel};
pub use generic::{GenericModel, GenericModelSpec};
pub use lda::{LdaModel, LdaModelSpec, LdaParameters};
pub use repository::ModelStore;

#[cfg(test)]
pub use repository::MockModelStore;
