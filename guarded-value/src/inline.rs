use parking_lot::Mutex;

/// A payload behind an inline [`Mutex`], readable through `&self`.
///
/// The mutex is stored directly in the holder and its interior mutability
/// is what lets [`get`](Self::get) acquire it through a shared reference.
/// This is the recommended default: the accessor advertises exactly the
/// capability it needs, and the lock state mutated inside it stays an
/// implementation detail.
#[derive(Debug)]
pub struct GuardedValue<T> {
    slot: Mutex<T>,
}

impl<T> GuardedValue<T> {
    /// Creates a holder with `value` as payload and the lock unlocked.
    pub fn new(value: T) -> Self {
        Self {
            slot: Mutex::new(value),
        }
    }

    /// Replaces the payload while holding the lock.
    pub fn set(&self, value: T) {
        *self.slot.lock() = value;
    }

    /// Direct payload access through an exclusive borrow.
    ///
    /// No locking: `&mut self` proves no guard or other borrow is live.
    pub fn get_mut(&mut self) -> &mut T {
        self.slot.get_mut()
    }

    /// Consumes the holder and returns the payload.
    pub fn into_inner(self) -> T {
        self.slot.into_inner()
    }
}

impl<T: Copy> GuardedValue<T> {
    /// Copies the payload out under the lock.
    ///
    /// The guard is released when the copy returns, on every exit path.
    /// The returned value is the payload at an instant at which no writer
    /// held the lock.
    #[inline]
    pub fn get(&self) -> T {
        *self.slot.lock()
    }
}

impl<T> From<T> for GuardedValue<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/// A payload behind an inline [`Mutex`] that is never locked at runtime:
/// every accessor demands `&mut self` and goes through [`Mutex::get_mut`],
/// the statically discharged form of acquisition.
///
/// The cost shows up at the call site. A caller holding only a shared
/// reference cannot call [`get`](Self::get) at all:
///
/// ```compile_fail,E0596
/// use guarded_value::ExclusiveValue;
///
/// fn read(holder: &ExclusiveValue<i64>) -> i64 {
///     holder.get() // `get` needs `&mut`; `holder` is a `&` reference
/// }
/// ```
///
/// There is no sanctioned way to discard the shared-ness of a reference
/// and call it anyway: casting `&T` to `&mut T` is immediate undefined
/// behavior, not an escape hatch. When readers only hold shared
/// references, use [`GuardedValue`] instead.
#[derive(Debug)]
pub struct ExclusiveValue<T> {
    slot: Mutex<T>,
}

impl<T> ExclusiveValue<T> {
    /// Creates a holder with `value` as payload and the lock unlocked.
    pub fn new(value: T) -> Self {
        Self {
            slot: Mutex::new(value),
        }
    }

    /// Replaces the payload. Exclusive access stands in for the lock.
    pub fn set(&mut self, value: T) {
        *self.slot.get_mut() = value;
    }

    /// Consumes the holder and returns the payload.
    pub fn into_inner(self) -> T {
        self.slot.into_inner()
    }
}

impl<T: Copy> ExclusiveValue<T> {
    /// Copies the payload out. Exclusive access stands in for the lock.
    #[inline]
    pub fn get(&mut self) -> T {
        *self.slot.get_mut()
    }
}

impl<T> From<T> for ExclusiveValue<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
