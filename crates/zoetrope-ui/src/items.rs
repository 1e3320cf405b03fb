use zoetrope_core::Signal;

/// An entry the carousel can display.
///
/// Items need a stable, unique identifier so the active selection survives
/// reorders and collection edits. Equality on the item itself lets widgets
/// skip redundant writes back into the bound collection.
pub trait CarouselItem: Clone + PartialEq + 'static {
    type Id: PartialEq + Clone + 'static;

    fn id(&self) -> Self::Id;
}

/// Write-through handle to one element of a host-owned collection signal.
///
/// The carousel hands one of these to the caller's card builder. Reads come
/// from the snapshot taken at the top of the compose pass; writes land in the
/// host's `Signal<Vec<T>>`, so the owner (and every other observer) sees them.
/// A write whose index has since left the collection is dropped silently.
pub struct ItemBinding<T: Clone + 'static> {
    value: T,
    items: Signal<Vec<T>>,
    index: usize,
}

impl<T: Clone + 'static> ItemBinding<T> {
    pub(crate) fn new(value: T, items: Signal<Vec<T>>, index: usize) -> Self {
        Self {
            value,
            items,
            index,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn set(&self, value: T) {
        let index = self.index;
        self.items.update(move |xs| {
            if let Some(slot) = xs.get_mut(index) {
                *slot = value;
            } else {
                log::trace!("item binding write at {index} outside collection; dropped");
            }
        });
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let index = self.index;
        self.items.update(move |xs| {
            if let Some(slot) = xs.get_mut(index) {
                f(slot);
            } else {
                log::trace!("item binding write at {index} outside collection; dropped");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zoetrope_core::signal;

    #[test]
    fn binding_writes_through_to_the_collection() {
        let items = signal(vec![1, 2, 3]);
        let binding = ItemBinding::new(2, items.clone(), 1);

        assert_eq!(*binding.value(), 2);
        binding.set(20);
        assert_eq!(items.get(), vec![1, 20, 3]);

        binding.update(|v| *v += 1);
        assert_eq!(items.get(), vec![1, 21, 3]);
    }

    #[test]
    fn binding_to_vacated_index_drops_writes() {
        let items = signal(vec![1, 2, 3]);
        let binding = ItemBinding::new(3, items.clone(), 7);

        binding.set(99);
        binding.update(|v| *v = 100);
        assert_eq!(items.get(), vec![1, 2, 3]);
    }
}
