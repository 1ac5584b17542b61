use std::fmt;
use std::marker::PhantomData;
use std::mem::ManuallyDrop;
use std::ptr::{self, NonNull};

use parking_lot::Mutex;

/// A payload behind a heap-allocated [`Mutex`] owned through a `Box`.
///
/// The shared borrow in [`get`](Self::get) applies to the handle, not the
/// pointee: dereferencing `&Box<Mutex<T>>` yields `&Mutex<T>`, and the
/// mutex does the rest. No carve-out beyond the mutex itself is involved,
/// which makes this the general shape for "logically read-only,
/// physically mutates state reachable only through a pointer". The lock
/// keeps a stable address across moves of the holder, and single
/// ownership of the allocation travels with the handle.
#[derive(Debug)]
pub struct BoxedValue<T> {
    slot: Box<Mutex<T>>,
}

impl<T> BoxedValue<T> {
    /// Creates a holder with `value` as payload and the lock unlocked.
    pub fn new(value: T) -> Self {
        Self {
            slot: Box::new(Mutex::new(value)),
        }
    }

    /// Replaces the payload while holding the lock.
    pub fn set(&self, value: T) {
        *self.slot.lock() = value;
    }

    /// Direct payload access through an exclusive borrow. No locking.
    pub fn get_mut(&mut self) -> &mut T {
        self.slot.get_mut()
    }

    /// Consumes the holder and returns the payload, freeing the
    /// allocation.
    pub fn into_inner(self) -> T {
        (*self.slot).into_inner()
    }
}

impl<T: Copy> BoxedValue<T> {
    /// Copies the payload out under the lock.
    #[inline]
    pub fn get(&self) -> T {
        *self.slot.lock()
    }
}

impl<T> From<T> for BoxedValue<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/// Backing record for [`AliasedValue`]. Lives at a stable heap address
/// from construction to drop.
struct Record<T> {
    slot: Mutex<T>,
    /// Always points at `slot` of this same record. Written once during
    /// construction, read-only afterwards.
    slot_alias: *const Mutex<T>,
}

/// A payload whose lock is reached through a stored raw alias to the
/// sibling field that owns it.
///
/// Functionally this is [`GuardedValue`] with an extra indirection: the
/// shared borrow in [`get`](Self::get) covers the handle and the record,
/// while the alias (a plain pointer value, not a borrow of the field)
/// yields the mutex for locking. The price is an invariant the compiler
/// cannot check: the alias must point at the sibling lock for the
/// record's entire lifetime. The record therefore never moves (it stays
/// behind the handle on the heap), the handle is move-only, and `Clone`
/// is deliberately not implemented. Prefer [`GuardedValue`]; this holder
/// exists to show where the aliasing route leads and what it costs to
/// keep sound.
pub struct AliasedValue<T> {
    record: NonNull<Record<T>>,
    _own: PhantomData<Box<Record<T>>>,
}

impl<T> AliasedValue<T> {
    /// Creates a holder with `value` as payload and the lock unlocked.
    pub fn new(value: T) -> Self {
        let record = Box::into_raw(Box::new(Record {
            slot: Mutex::new(value),
            slot_alias: ptr::null(),
        }));
        // The record has reached its final address; aim the alias at the
        // sibling slot. Derived raw-to-raw so no borrow of the record
        // outlives construction.
        // SAFETY: `record` came from `Box::into_raw` just above.
        unsafe { (*record).slot_alias = ptr::addr_of!((*record).slot) };
        Self {
            // SAFETY: `Box::into_raw` never returns null.
            record: unsafe { NonNull::new_unchecked(record) },
            _own: PhantomData,
        }
    }

    fn slot(&self) -> &Mutex<T> {
        // SAFETY: `record` points at the allocation made in `new`, freed
        // only by `drop`/`into_inner` which consume the sole handle.
        // `slot_alias` was aimed at the sibling `slot` field in `new`,
        // is never reassigned, and the record never moves.
        unsafe { &*self.record.as_ref().slot_alias }
    }

    /// Replaces the payload while holding the lock, acquired through the
    /// stored alias.
    pub fn set(&self, value: T) {
        *self.slot().lock() = value;
    }

    /// Direct payload access through an exclusive borrow. No locking.
    pub fn get_mut(&mut self) -> &mut T {
        // SAFETY: sole handle, exclusively borrowed; guards only live
        // inside `get`/`set` call frames, so none is outstanding.
        let record = unsafe { self.record.as_mut() };
        record.slot.get_mut()
    }

    /// Consumes the holder and returns the payload, freeing the record.
    pub fn into_inner(self) -> T {
        let this = ManuallyDrop::new(self);
        // SAFETY: `record` came from `Box::into_raw` in `new`; wrapping
        // `self` in `ManuallyDrop` keeps `drop` from freeing it twice.
        let record = unsafe { Box::from_raw(this.record.as_ptr()) };
        record.slot.into_inner()
    }
}

impl<T: Copy> AliasedValue<T> {
    /// Copies the payload out under the lock, acquired through the
    /// stored alias.
    #[inline]
    pub fn get(&self) -> T {
        *self.slot().lock()
    }
}

impl<T> Drop for AliasedValue<T> {
    fn drop(&mut self) {
        // SAFETY: `record` came from `Box::into_raw` in `new` and no
        // other path frees it while a handle is live.
        drop(unsafe { Box::from_raw(self.record.as_ptr()) });
    }
}

// SAFETY: the handle owns its record exclusively and the raw members are
// never handed out, so the holder is exactly as thread-safe as the
// `Mutex<T>` it stores; `Mutex<T>` is `Send`/`Sync` for `T: Send`.
unsafe impl<T: Send> Send for AliasedValue<T> {}
unsafe impl<T: Send> Sync for AliasedValue<T> {}

impl<T: fmt::Debug> fmt::Debug for AliasedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AliasedValue")
            .field("slot", self.slot())
            .finish()
    }
}
