//! State Cells
//!
//! Access to a controller's owned state without holding a borrow across an
//! await point. Both methods return `None` once the state is gone (for a
//! UI signal: the page was unmounted while a request was in flight).

use std::cell::RefCell;
use std::rc::Rc;

pub trait StateCell<T> {
    fn peek<O>(&self, f: impl FnOnce(&T) -> O) -> Option<O>;
    fn mutate<O>(&self, f: impl FnOnce(&mut T) -> O) -> Option<O>;
}

impl<T> StateCell<T> for RefCell<T> {
    fn peek<O>(&self, f: impl FnOnce(&T) -> O) -> Option<O> {
        Some(f(&self.borrow()))
    }

    fn mutate<O>(&self, f: impl FnOnce(&mut T) -> O) -> Option<O> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T, C: StateCell<T> + ?Sized> StateCell<T> for &C {
    fn peek<O>(&self, f: impl FnOnce(&T) -> O) -> Option<O> {
        (**self).peek(f)
    }

    fn mutate<O>(&self, f: impl FnOnce(&mut T) -> O) -> Option<O> {
        (**self).mutate(f)
    }
}

impl<T, C: StateCell<T> + ?Sized> StateCell<T> for Rc<C> {
    fn peek<O>(&self, f: impl FnOnce(&T) -> O) -> Option<O> {
        (**self).peek(f)
    }

    fn mutate<O>(&self, f: impl FnOnce(&mut T) -> O) -> Option<O> {
        (**self).mutate(f)
    }
}
