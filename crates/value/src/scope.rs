//! A frame of named `ValueType` instances.
//!
//! A [`Scope`] owns its instances in declaration order and destroys them in
//! reverse declaration order when it is dropped. Operating through
//! [`Binding`] handles is what makes same-instance copy and move assignment
//! expressible: two handles can name the same slot, two borrows cannot.

use std::sync::atomic::{AtomicU64, Ordering};

use lifespan_core::{LifecycleError, LifecycleResult};
use lifespan_events::Tracer;

use crate::value_type::ValueType;

static NEXT_SCOPE: AtomicU64 = AtomicU64::new(1);

/// Handle to one declared instance of a [`Scope`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Binding {
    scope: u64,
    index: usize,
}

impl Binding {
    /// Position in declaration order, starting at 0.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl core::fmt::Display for Binding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "scope{}[{}]", self.scope, self.index)
    }
}

struct Slot {
    name: String,
    value: ValueType,
}

pub struct Scope {
    id: u64,
    tracer: Tracer,
    slots: Vec<Slot>,
}

impl Scope {
    pub fn new(tracer: &Tracer) -> Self {
        Self {
            id: NEXT_SCOPE.fetch_add(1, Ordering::Relaxed),
            tracer: tracer.clone(),
            slots: Vec::new(),
        }
    }

    pub fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    /// Take ownership of `value` under `name`.
    ///
    /// On a duplicate name `value` is dropped here, still exactly once.
    pub fn declare(&mut self, name: impl Into<String>, value: ValueType) -> LifecycleResult<Binding> {
        let name = name.into();
        self.ensure_free(&name)?;
        Ok(self.push(name, value))
    }

    /// Declare a default-constructed instance.
    pub fn declare_default(&mut self, name: impl Into<String>) -> LifecycleResult<Binding> {
        let name = name.into();
        self.ensure_free(&name)?;
        let value = ValueType::new_default(&self.tracer);
        Ok(self.push(name, value))
    }

    /// Declare a copy of the instance bound to `source`.
    pub fn declare_copy(&mut self, name: impl Into<String>, source: Binding) -> LifecycleResult<Binding> {
        let name = name.into();
        self.ensure_free(&name)?;
        let value = self.get(source)?.clone();
        Ok(self.push(name, value))
    }

    /// Declare an instance move-constructed from `source`.
    pub fn declare_move(&mut self, name: impl Into<String>, source: Binding) -> LifecycleResult<Binding> {
        let name = name.into();
        self.ensure_free(&name)?;
        let value = ValueType::take_from(self.get_mut(source)?);
        Ok(self.push(name, value))
    }

    /// `target = source` by copy.
    ///
    /// When both handles name the same instance nothing is mutated, but the
    /// copy assignment is still traced.
    pub fn copy_assign(&mut self, target: Binding, source: Binding) -> LifecycleResult<&mut ValueType> {
        let target_index = self.resolve(target)?;
        let source_index = self.resolve(source)?;

        if target_index == source_index {
            tracing::debug!(binding = %self.slots[target_index].name, "self copy-assignment");
            return Ok(self.slots[target_index].value.copy_assign_self());
        }

        let (target, source) = self.pair_mut(target_index, source_index);
        Ok(target.copy_assign(source))
    }

    /// `target = move(source)`.
    ///
    /// When both handles name the same instance nothing is transferred or
    /// cleared, but the move assignment is still traced.
    pub fn move_assign(&mut self, target: Binding, source: Binding) -> LifecycleResult<&mut ValueType> {
        let target_index = self.resolve(target)?;
        let source_index = self.resolve(source)?;

        if target_index == source_index {
            tracing::debug!(binding = %self.slots[target_index].name, "self move-assignment");
            return Ok(self.slots[target_index].value.move_assign_self());
        }

        let (target, source) = self.pair_mut(target_index, source_index);
        Ok(target.move_assign(source))
    }

    pub fn get(&self, binding: Binding) -> LifecycleResult<&ValueType> {
        let index = self.resolve(binding)?;
        Ok(&self.slots[index].value)
    }

    pub fn get_mut(&mut self, binding: Binding) -> LifecycleResult<&mut ValueType> {
        let index = self.resolve(binding)?;
        Ok(&mut self.slots[index].value)
    }

    /// Find a binding by the name it was declared under.
    pub fn lookup(&self, name: &str) -> Option<Binding> {
        self.slots
            .iter()
            .position(|slot| slot.name == name)
            .map(|index| self.binding(index))
    }

    pub fn name_of(&self, binding: Binding) -> LifecycleResult<&str> {
        let index = self.resolve(binding)?;
        Ok(&self.slots[index].name)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn binding(&self, index: usize) -> Binding {
        Binding {
            scope: self.id,
            index,
        }
    }

    fn push(&mut self, name: String, value: ValueType) -> Binding {
        self.slots.push(Slot { name, value });
        self.binding(self.slots.len() - 1)
    }

    fn ensure_free(&self, name: &str) -> LifecycleResult<()> {
        if self.slots.iter().any(|slot| slot.name == name) {
            return Err(LifecycleError::duplicate_binding(name));
        }
        Ok(())
    }

    fn resolve(&self, binding: Binding) -> LifecycleResult<usize> {
        if binding.scope != self.id || binding.index >= self.slots.len() {
            return Err(LifecycleError::unknown_binding(binding.to_string()));
        }
        Ok(binding.index)
    }

    /// Disjoint mutable borrows of two distinct slots, in argument order.
    fn pair_mut(&mut self, first: usize, second: usize) -> (&mut ValueType, &mut ValueType) {
        debug_assert_ne!(first, second);
        if first < second {
            let (low, high) = self.slots.split_at_mut(second);
            (&mut low[first].value, &mut high[0].value)
        } else {
            let (low, high) = self.slots.split_at_mut(first);
            (&mut high[0].value, &mut low[second].value)
        }
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        // Reverse declaration order, like locals at the end of a block.
        while let Some(slot) = self.slots.pop() {
            drop(slot);
        }
    }
}

impl core::fmt::Debug for Scope {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for slot in &self.slots {
            map.entry(&slot.name, &slot.value);
        }
        map.finish()
    }
}
