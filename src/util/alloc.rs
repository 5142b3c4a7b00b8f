use std::cell::Cell;
use std::rc::Rc;

/// Counts how many times it (or any of its clones) has been dropped.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(0)))
    }

    pub fn drops(&self) -> usize {
        self.0.get()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Shared count of live [`Tracked`] instances.
#[derive(Debug, Default, Clone)]
pub struct LiveCounter(Rc<Cell<isize>>);

impl LiveCounter {
    pub fn new() -> LiveCounter {
        LiveCounter::default()
    }

    pub fn live(&self) -> isize {
        self.0.get()
    }

    pub fn track<T>(&self, value: T) -> Tracked<T> {
        self.0.set(self.0.get() + 1);
        Tracked {
            value,
            counter: self.clone(),
        }
    }
}

/// A value registered with a [`LiveCounter`], incrementing it on construction and decrementing it
/// on drop. Deliberately not [`Clone`], so every instance is constructed through
/// [`LiveCounter::track`].
#[derive(Debug)]
pub struct Tracked<T> {
    pub value: T,
    counter: LiveCounter,
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        let live = &self.counter.0;
        live.set(live.get() - 1);
    }
}
