//! Access to view state that controllers mutate and views render.
//!
//! In the app the store is a reactive [`RwSignal`]; tests hand controllers an
//! `Rc<RefCell<_>>` so no reactive runtime is needed.

use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub trait ViewStore<T>: Clone + 'static {
    /// Mutate the state; `None` when the store is gone
    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;

    /// Read the state without subscribing; `None` when the store is gone
    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
}

impl<T> ViewStore<T> for RwSignal<T>
where
    T: Send + Sync + 'static,
{
    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

impl<T: 'static> ViewStore<T> for Rc<RefCell<T>> {
    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}
