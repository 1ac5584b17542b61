//! Value holders pairing a copyable payload with a blocking [`Mutex`],
//! comparing the lock storage strategies that keep the read accessor
//! callable through a shared reference.
//!
//! Reading the payload must hold the lock, so even a pure read transiently
//! mutates the lock's internal state. Rust only permits that mutation
//! through `&self` when the lock is reached via interior mutability or an
//! indirection; a plain field access inherits the shared borrow. Each
//! holder in this crate takes a different route:
//!
//! | Holder | Lock storage | `get` receiver |
//! |--------|--------------|----------------|
//! | [`GuardedValue`] | `Mutex<T>` inline; the mutex's own interior mutability is the carve-out | `&self` |
//! | [`ExclusiveValue`] | `Mutex<T>` inline, discharged statically; no carve-out used | `&mut self` |
//! | [`AliasedValue`] | lock in a heap-pinned record, reached through a stored raw alias to it | `&self` |
//! | [`BoxedValue`] | `Box<Mutex<T>>`; shared borrow of the handle, mutable pointee | `&self` |
//!
//! # Quick Start
//!
//! ```rust
//! use guarded_value::GuardedValue;
//!
//! let holder = GuardedValue::new(10);
//!
//! // A shared reference is all a reader needs.
//! let view = &holder;
//! assert_eq!(view.get(), 10);
//!
//! holder.set(11);
//! assert_eq!(view.get(), 11);
//! ```
//!
//! # The strategy that does not exist
//!
//! Forming a unique reference to the lock field from inside a
//! shared-reference accessor is rejected at compile time: the shared
//! borrow of the holder propagates to its fields.
//!
//! ```compile_fail,E0596
//! use parking_lot::Mutex;
//!
//! struct Holder {
//!     slot: Mutex<i64>,
//! }
//!
//! impl Holder {
//!     fn get(&self) -> i64 {
//!         let slot = &mut self.slot; // cannot borrow `self.slot` as mutable
//!         *slot.get_mut()
//!     }
//! }
//! ```
//!
//! [`GuardedValue`] is the recommended default. [`BoxedValue`] is the
//! general shape for "logically read-only, physically mutates state
//! reachable only through a pointer". [`AliasedValue`] works but carries
//! an invariant the compiler cannot check; its docs spell out the cost.

mod indirect;
mod inline;

pub use indirect::{AliasedValue, BoxedValue};
pub use inline::{ExclusiveValue, GuardedValue};
pub use parking_lot::{Mutex, MutexGuard};
