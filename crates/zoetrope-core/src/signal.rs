use slotmap::SlotMap;
use std::cell::RefCell;
use std::rc::Rc;

slotmap::new_key_type! {
    /// Token returned by [`Signal::subscribe`]; pass it back to
    /// [`Signal::unsubscribe`] to drop the observer.
    pub struct SubKey;
}

/// Observable, cloneable value handle.
///
/// `Signal<T>` is the binding primitive of the kit: hosts own a
/// `Signal<Vec<Item>>`, widgets read it every compose pass and write through
/// it, and anything interested in a value can subscribe to writes.
#[derive(Clone)]
pub struct Signal<T: 'static>(Rc<RefCell<Inner<T>>>);

struct Inner<T> {
    value: T,
    subs: SlotMap<SubKey, Box<dyn Fn(&T)>>,
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            subs: SlotMap::with_key(),
        })))
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().value.clone()
    }

    /// Read without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.borrow().value)
    }

    pub fn set(&self, v: T) {
        let mut inner = self.0.borrow_mut();
        inner.value = v;
        let vref = &inner.value;
        for (_, s) in &inner.subs {
            s(vref);
        }
    }

    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        let mut inner = self.0.borrow_mut();
        f(&mut inner.value);
        let vref = &inner.value;
        for (_, s) in &inner.subs {
            s(vref);
        }
    }

    /// Subscribers run synchronously on every write. They receive the new
    /// value by reference; re-entrant reads of the same signal from inside a
    /// subscriber are not allowed.
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubKey {
        self.0.borrow_mut().subs.insert(Box::new(f))
    }

    pub fn unsubscribe(&self, key: SubKey) {
        self.0.borrow_mut().subs.remove(key);
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
