//! `ValueType`: an integer + a text field with fully traced value semantics.

use serde::{Deserialize, Serialize};

use lifespan_core::{Entity, InstanceId, ValueObject};
use lifespan_events::{LifecycleKind, Tracer};

/// Name given by default construction.
///
/// Parameterized construction without a name yields an empty name instead.
pub const DEFAULT_NAME: &str = "Default";

/// Snapshot of an instance's fields, compared by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueState {
    pub data: i32,
    pub name: String,
}

impl ValueState {
    pub fn new(data: i32, name: impl Into<String>) -> Self {
        Self {
            data,
            name: name.into(),
        }
    }

    /// The state a moved-from instance is left in.
    pub fn zeroed() -> Self {
        Self {
            data: 0,
            name: String::new(),
        }
    }
}

impl ValueObject for ValueState {}

/// A value-semantic record with an observable lifecycle.
///
/// Each instance exclusively owns `data` and `name` and carries a [`Tracer`]
/// handle plus the [`InstanceId`] the tracer gave it at construction. The id
/// survives assignment; only construction hands out a new one.
pub struct ValueType {
    id: InstanceId,
    data: i32,
    name: String,
    tracer: Tracer,
}

impl ValueType {
    fn spawn(tracer: &Tracer, data: i32, name: String, kind: LifecycleKind) -> Self {
        let value = Self {
            id: tracer.allocate_instance(),
            data,
            name,
            tracer: tracer.clone(),
        };
        value.emit(kind);
        value
    }

    /// Default construction: `data = 0`, `name = "Default"`.
    pub fn new_default(tracer: &Tracer) -> Self {
        Self::spawn(tracer, 0, DEFAULT_NAME.to_string(), LifecycleKind::DefaultConstruct)
    }

    /// Parameterized construction.
    pub fn new(tracer: &Tracer, data: i32, name: impl Into<String>) -> Self {
        Self::spawn(tracer, data, name.into(), LifecycleKind::Construct)
    }

    /// Parameterized construction with the name left empty.
    pub fn with_data(tracer: &Tracer, data: i32) -> Self {
        Self::new(tracer, data, String::new())
    }

    /// Move construction: the new instance takes `source`'s fields and
    /// `source` is left zeroed but alive (it is still destroyed later).
    pub fn take_from(source: &mut ValueType) -> Self {
        let data = std::mem::take(&mut source.data);
        let name = std::mem::take(&mut source.name);
        Self::spawn(&source.tracer, data, name, LifecycleKind::MoveConstruct)
    }

    /// Copy assignment: replace this instance's fields with independent
    /// copies of `source`'s.
    ///
    /// Same-instance assignment cannot be written with two borrows; see
    /// [`crate::Scope::copy_assign`] for the binding-level form.
    pub fn copy_assign(&mut self, source: &ValueType) -> &mut Self {
        self.data = source.data;
        self.name.clone_from(&source.name);
        self.emit(LifecycleKind::CopyAssign);
        self
    }

    /// Move assignment: take `source`'s fields and zero `source`.
    ///
    /// The previous `name` of this instance is released here.
    pub fn move_assign(&mut self, source: &mut ValueType) -> &mut Self {
        self.data = std::mem::take(&mut source.data);
        self.name = std::mem::take(&mut source.name);
        self.emit(LifecycleKind::MoveAssign);
        self
    }

    /// Copy assignment of an instance to itself: no field changes.
    pub(crate) fn copy_assign_self(&mut self) -> &mut Self {
        self.emit(LifecycleKind::CopyAssign);
        self
    }

    /// Move assignment of an instance to itself: no field changes.
    pub(crate) fn move_assign_self(&mut self) -> &mut Self {
        self.emit(LifecycleKind::MoveAssign);
        self
    }

    /// Location of this instance.
    pub fn address(&self) -> *const ValueType {
        self
    }

    /// Location of this instance, through a mutable borrow.
    pub fn address_mut(&mut self) -> *mut ValueType {
        self
    }

    pub fn data(&self) -> i32 {
        self.data
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_data(&mut self, data: i32) {
        self.data = data;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn state(&self) -> ValueState {
        ValueState::new(self.data, self.name.clone())
    }

    /// True when the fields hold the moved-from sentinel.
    pub fn is_zeroed(&self) -> bool {
        self.data == 0 && self.name.is_empty()
    }

    pub fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    fn emit(&self, kind: LifecycleKind) {
        self.tracer.emit(self.id, kind);
    }
}

impl Clone for ValueType {
    /// Copy construction: a new instance with independent copies of the fields.
    fn clone(&self) -> Self {
        Self::spawn(&self.tracer, self.data, self.name.clone(), LifecycleKind::CopyConstruct)
    }

    fn clone_from(&mut self, source: &Self) {
        self.copy_assign(source);
    }
}

impl Drop for ValueType {
    fn drop(&mut self) {
        self.emit(LifecycleKind::Destruct);
    }
}

impl Entity for ValueType {
    type Id = InstanceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Debug for ValueType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ValueType")
            .field("id", &self.id)
            .field("data", &self.data)
            .field("name", &self.name)
            .finish()
    }
}

impl core::fmt::Display for ValueType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {{ data: {}, name: {:?} }}", self.id, self.data, self.name)
    }
}
