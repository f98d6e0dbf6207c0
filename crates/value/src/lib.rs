//! The value type and the scope that owns its instances.
//!
//! Every special operation on [`ValueType`] is explicit and traced:
//! construction, copy (`Clone`), copy assignment (`clone_from` /
//! [`ValueType::copy_assign`]), move construction ([`ValueType::take_from`]),
//! move assignment and destruction (`Drop`).

pub mod scope;
pub mod value_type;

pub use scope::{Binding, Scope};
pub use value_type::{DEFAULT_NAME, ValueState, ValueType};
