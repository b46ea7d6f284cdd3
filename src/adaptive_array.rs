use std::fmt;
use std::iter::{Enumerate, FusedIterator};
use std::slice;

use tracing::{debug, trace, warn};

use crate::element::ElementOps;
use crate::error::{ArrayError, Result};
use crate::policy::ArrayConfig;

pub struct AdaptiveArray<T, O: ElementOps<T>> {
    slots: Vec<Option<T>>,
    ops: O,
    config: ArrayConfig,
}

impl<T, O: ElementOps<T>> AdaptiveArray<T, O> {
    pub fn new(ops: O) -> Self {
        Self::from_parts(Vec::new(), ops, ArrayConfig::default())
    }

    pub fn create(ops: O, config: ArrayConfig) -> Result<Self> {
        let mut slots = Vec::new();
        if config.initial_capacity > 0 {
            config.check_slots(config.initial_capacity)?;
            slots
                .try_reserve_exact(config.initial_capacity)
                .map_err(|source| ArrayError::AllocationFailed {
                    requested: config.initial_capacity,
                    source,
                })?;
        }
        Ok(Self::from_parts(slots, ops, config))
    }

    fn from_parts(slots: Vec<Option<T>>, ops: O, config: ArrayConfig) -> Self {
        debug!(
            capacity = slots.capacity(),
            growth = ?config.growth,
            max_slots = ?config.max_slots,
            "created adaptive array"
        );
        Self { slots, ops, config }
    }

    pub fn get(&self, index: isize) -> Option<T> {
        self.get_ref(index).map(|element| self.ops.copy(element))
    }

    pub fn get_ref(&self, index: isize) -> Option<&T> {
        let index = usize::try_from(index).ok()?;
        self.slots.get(index)?.as_ref()
    }

    /// Grows to `index + 1` slots when `index` is past the end.
    pub fn set(&mut self, index: isize, element: &T) -> Result<()> {
        let index = usize::try_from(index).map_err(|_| {
            warn!(index, "rejected set at negative index");
            ArrayError::NegativeIndex { index }
        })?;

        let required = index + 1;
        let grows = required > self.slots.len();
        if grows {
            self.reserve_for(required)?;
        }

        let copy = self.ops.copy(element);
        if grows {
            self.slots.resize_with(required, || None);
            trace!(index, size = required, "extended adaptive array");
        }
        if let Some(previous) = self.slots[index].replace(copy) {
            trace!(index, "overwrote occupied slot");
            self.ops.delete(previous);
        }
        Ok(())
    }

    fn reserve_for(&mut self, required: usize) -> Result<()> {
        self.config.check_slots(required).inspect_err(|err| {
            warn!(%err, "rejected set past slot limit");
        })?;
        if let Some(target) = self.config.growth.grow(self.slots.capacity(), required) {
            self.slots
                .try_reserve_exact(target - self.slots.len())
                .map_err(|source| {
                    warn!(requested = required, "failed to grow adaptive array");
                    ArrayError::AllocationFailed {
                        requested: required,
                        source,
                    }
                })?;
            debug!(
                from = self.slots.len(),
                to = required,
                capacity = self.slots.capacity(),
                "grew adaptive array"
            );
        }
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn checked_size(array: Option<&Self>) -> Option<usize> {
        array.map(Self::size)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn print_all(&self) {
        for (_, element) in self.iter() {
            self.ops.print(element);
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.slots.iter().enumerate(),
        }
    }

    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    pub fn ops(&self) -> &O {
        &self.ops
    }

    /// Returns the number of elements deleted.
    pub fn destroy(mut self) -> usize {
        self.release_all()
    }

    fn release_all(&mut self) -> usize {
        let slots = std::mem::take(&mut self.slots);
        if slots.is_empty() {
            return 0;
        }
        let size = slots.len();
        let mut released = 0;
        for element in slots.into_iter().flatten() {
            self.ops.delete(element);
            released += 1;
        }
        debug!(size, released, "tore down adaptive array");
        released
    }
}

impl<T, O: ElementOps<T>> Drop for AdaptiveArray<T, O> {
    fn drop(&mut self) {
        self.release_all();
    }
}

impl<T, O: ElementOps<T> + Clone> Clone for AdaptiveArray<T, O> {
    fn clone(&self) -> Self {
        let mut slots = Vec::with_capacity(self.slots.len());
        for slot in &self.slots {
            slots.push(slot.as_ref().map(|element| self.ops.copy(element)));
        }
        Self {
            slots,
            ops: self.ops.clone(),
            config: self.config,
        }
    }
}

impl<T, O: ElementOps<T> + Default> Default for AdaptiveArray<T, O> {
    fn default() -> Self {
        Self::new(O::default())
    }
}

impl<T: fmt::Debug, O: ElementOps<T>> fmt::Debug for AdaptiveArray<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdaptiveArray")
            .field("size", &self.slots.len())
            .field("slots", &self.slots)
            .finish_non_exhaustive()
    }
}

pub struct Iter<'a, T> {
    slots: Enumerate<slice::Iter<'a, Option<T>>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots
            .find_map(|(index, slot)| slot.as_ref().map(|element| (index, element)))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T, O: ElementOps<T>> IntoIterator for &'a AdaptiveArray<T, O> {
    type Item = (usize, &'a T);
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use crate::element::CloneOps;
    use crate::policy::GrowthPolicy;
    use std::cell::Cell;

    struct Counting<'a> {
        live: &'a Cell<isize>,
    }

    impl ElementOps<i32> for Counting<'_> {
        fn copy(&self, element: &i32) -> i32 {
            self.live.set(self.live.get() + 1);
            *element
        }

        fn delete(&self, _element: i32) {
            self.live.set(self.live.get() - 1);
        }

        fn print(&self, _element: &i32) {}
    }

    proptest! {
        #[test]
        fn behaves_like_a_model_vector(
            steps in prop::collection::vec((-3isize..48, any::<i32>()), 0..64)
        ) {
            let live = Cell::new(0);
            let mut arr = AdaptiveArray::new(Counting { live: &live });
            let mut model: Vec<Option<i32>> = Vec::new();

            for (index, value) in steps {
                let before = arr.size();
                let result = arr.set(index, &value);
                if index < 0 {
                    prop_assert_eq!(result, Err(ArrayError::NegativeIndex { index }));
                    prop_assert_eq!(arr.size(), before);
                    continue;
                }
                prop_assert!(result.is_ok());
                let index = index as usize;
                if index >= model.len() {
                    model.resize(index + 1, None);
                }
                model[index] = Some(value);

                prop_assert_eq!(arr.size(), model.len());
                for (i, expected) in model.iter().enumerate() {
                    prop_assert_eq!(arr.get_ref(i as isize).copied(), *expected);
                }
            }

            let stored = model.iter().flatten().count();
            prop_assert_eq!(live.get(), stored as isize);
            prop_assert_eq!(arr.destroy(), stored);
            prop_assert_eq!(live.get(), 0);
        }

        #[test]
        fn growth_policy_never_changes_size(
            indices in prop::collection::vec(0isize..256, 1..32),
            geometric in any::<bool>(),
        ) {
            let growth = if geometric { GrowthPolicy::Geometric } else { GrowthPolicy::Exact };
            let config = ArrayConfig::new().growth(growth);
            let mut arr = AdaptiveArray::create(CloneOps, config).unwrap();
            let mut expected = 0;
            for index in indices {
                arr.set(index, &(index as i64)).unwrap();
                expected = expected.max(index as usize + 1);
                prop_assert_eq!(arr.size(), expected);
                prop_assert!(arr.capacity() >= arr.size());
            }
        }
    }
}
