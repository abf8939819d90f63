//! Shared-ownership handles with identity semantics
//!
//! A [`Handle`] wraps an `Arc<T>`. Two handles are equal only when they point
//! at the same allocation; equal contents in different allocations are
//! different handles.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// Type-erased view of a handle
///
/// Converting a [`Handle`] into an `AnyHandle` keeps the allocation, so the
/// identity survives the round trip through [`BoxingCache::get_value_any`].
///
/// [`BoxingCache::get_value_any`]: super::BoxingCache::get_value_any
pub type AnyHandle = Arc<dyn Any + Send + Sync>;

/// Opaque identity token of a handle's backing allocation
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(usize);

impl fmt::Debug for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HandleId({:#x})", self.0)
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Shared-ownership reference to a heap-allocated value
///
/// # Example
/// ```
/// use boxcache_common::cache::Handle;
///
/// let a = Handle::new(7_i32);
/// let b = a.clone();
/// let c = Handle::new(7_i32);
///
/// assert_eq!(a, b); // same allocation
/// assert_ne!(a, c); // equal contents, different allocation
/// assert_eq!(*a, *c);
/// ```
pub struct Handle<T> {
    inner: Arc<T>,
}

impl<T> Handle<T> {
    /// Allocate a new handle owning `value`
    pub fn new(value: T) -> Self {
        Self { inner: Arc::new(value) }
    }

    /// Returns true when both handles share one allocation
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }

    /// Identity token of the backing allocation
    pub fn id(&self) -> HandleId {
        HandleId(Arc::as_ptr(&self.inner) as usize)
    }

    /// Borrow the underlying `Arc`
    pub fn as_arc(&self) -> &Arc<T> {
        &self.inner
    }

    /// Number of strong references to the backing allocation
    pub fn strong_count(this: &Self) -> usize {
        Arc::strong_count(&this.inner)
    }
}

impl<T> Handle<T>
where
    T: Send + Sync + 'static,
{
    /// Erase the value type, keeping the same allocation
    pub fn into_any(self) -> AnyHandle {
        self.inner
    }

    /// Recover a typed handle from an erased one
    ///
    /// Returns `None` when the allocation does not hold a `T`.
    pub(crate) fn from_any(handle: &AnyHandle) -> Option<Self> {
        Arc::clone(handle).downcast::<T>().ok().map(|inner| Self { inner })
    }
}

impl<T> From<Arc<T>> for Handle<T> {
    fn from(inner: Arc<T>) -> Self {
        Self { inner }
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T> Deref for Handle<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle").field("id", &self.id()).field("value", &*self.inner).finish()
    }
}
