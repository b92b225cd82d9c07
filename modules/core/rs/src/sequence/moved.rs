use std::mem;
use std::ops::{Deref, DerefMut};

/// Move-extraction handle for a mutable element.
///
/// Holding a `Moved` grants the right to move the element out of its slot, leaving it in a
/// moved-from (default) state. Nothing is moved until the handle is consumed, so selecting a
/// field with [Moved::map] moves only that field and leaves its siblings untouched.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Moved<'a, T: ?Sized>(&'a mut T);

impl<'a, T: ?Sized> Moved<'a, T> {
    pub fn new(slot: &'a mut T) -> Self {
        Self(slot)
    }

    /// Narrow the handle to a part of the element.
    pub fn map<U: ?Sized, F>(self, f: F) -> Moved<'a, U>
    where
        F: FnOnce(&'a mut T) -> &'a mut U,
    {
        Moved(f(self.0))
    }

    pub fn into_ref(self) -> &'a T {
        self.0
    }

    pub fn into_mut(self) -> &'a mut T {
        self.0
    }
}

impl<T: Default> Moved<'_, T> {
    /// Move the element out, leaving the default value behind.
    pub fn take(self) -> T {
        mem::take(self.0)
    }
}

impl<T> Moved<'_, T> {
    pub fn replace(self, value: T) -> T {
        mem::replace(self.0, value)
    }
}

impl<T: ?Sized> Deref for Moved<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.0
    }
}

impl<T: ?Sized> DerefMut for Moved<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.0
    }
}
