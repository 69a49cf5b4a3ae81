//! Heap wrapper for enforced shared allocation.
//!
//! The `Heap<T>` type wraps `Rc<T>` and provides the ONLY way to allocate
//! heap payloads in the value system. External code cannot call `Heap::new()`
//! directly since the constructor is `pub(super)` (visible only within the
//! value module), so every allocation goes through `Value`'s factory methods.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// A heap-allocated value payload.
///
/// Cloning a `Heap<T>` bumps the reference count instead of copying `T`,
/// which gives duplicated stack values and variable bindings their shared
/// allocation semantics.
///
/// # Thread Safety
/// `Heap<T>` is NOT thread-safe. It uses `Rc` internally, which is faster
/// than `Arc` but cannot cross threads. The evaluator is single-threaded,
/// so nothing ever needs to.
///
/// # Zero-Cost Abstraction
/// The `#[repr(transparent)]` attribute ensures this has the same memory
/// layout as `Rc<T>`, so there's no overhead from the wrapper.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Rc<T>);

impl<T> Heap<T> {
    /// Create a new heap-allocated payload.
    ///
    /// This is `pub(super)` - only visible within the value module.
    /// External code must use `Value::string()`, `Value::array()`, etc.
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Whether two handles point at the same allocation.
    ///
    /// This is identity, not equality: two equal strings in separate
    /// allocations are `==` but not `ptr_eq`.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: ?Sized + Eq> Eq for Heap<T> {}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: ?Sized> AsRef<T> for Heap<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.0
    }
}
