//! `lifespan-core` — identity and value building blocks.
//!
//! This crate holds the **pure** primitives shared by the rest of the
//! workspace: identifiers, the entity/value-object split and the error model.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{LifecycleError, LifecycleResult};
pub use id::{EventSequence, InstanceId};
pub use value_object::ValueObject;
