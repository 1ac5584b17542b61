use guarded_value::{AliasedValue, BoxedValue, ExclusiveValue, GuardedValue};

// --- read after construction ---

#[test]
fn guarded_reads_initial_value() {
    let holder = GuardedValue::new(10);
    assert_eq!(holder.get(), 10);
}

#[test]
fn exclusive_reads_initial_value() {
    let mut holder = ExclusiveValue::new(20);
    assert_eq!(holder.get(), 20);
}

#[test]
fn aliased_reads_initial_value() {
    let holder = AliasedValue::new(30);
    assert_eq!(holder.get(), 30);
}

#[test]
fn boxed_reads_initial_value() {
    let holder = BoxedValue::new(50);
    assert_eq!(holder.get(), 50);
}

// --- access through the narrowest capability ---

#[test]
fn guarded_readable_through_shared_reference() {
    let holder = GuardedValue::new(7);
    let view: &GuardedValue<i64> = &holder;
    assert_eq!(view.get(), 7);
}

#[test]
fn exclusive_requires_unique_reference() {
    let mut holder = ExclusiveValue::new(7);
    let view: &mut ExclusiveValue<i64> = &mut holder;
    assert_eq!(view.get(), 7);
    // Calling through `&ExclusiveValue` is rejected outright; the
    // compile_fail example on the type pins that down.
}

#[test]
fn aliased_readable_through_shared_reference() {
    let holder = AliasedValue::new(7);
    let view: &AliasedValue<i64> = &holder;
    assert_eq!(view.get(), 7);
}

#[test]
fn boxed_readable_through_shared_reference() {
    let holder = BoxedValue::new(7);
    let view: &BoxedValue<i64> = &holder;
    assert_eq!(view.get(), 7);
}

// --- mutation persists across accesses ---

#[test]
fn guarded_set_then_get() {
    let holder = GuardedValue::new(0);
    holder.set(42);
    assert_eq!(holder.get(), 42);
}

#[test]
fn exclusive_set_then_get() {
    let mut holder = ExclusiveValue::new(0);
    holder.set(42);
    assert_eq!(holder.get(), 42);
}

#[test]
fn aliased_set_then_get() {
    let holder = AliasedValue::new(0);
    holder.set(42);
    assert_eq!(holder.get(), 42);
}

#[test]
fn boxed_set_then_get() {
    let holder = BoxedValue::new(0);
    holder.set(42);
    assert_eq!(holder.get(), 42);
}

// --- get_mut: exclusive borrow stands in for the lock ---

#[test]
fn guarded_get_mut_bypasses_lock() {
    let mut holder = GuardedValue::new(1);
    *holder.get_mut() += 9;
    assert_eq!(holder.get(), 10);
}

#[test]
fn aliased_get_mut_bypasses_lock() {
    let mut holder = AliasedValue::new(1);
    *holder.get_mut() += 9;
    assert_eq!(holder.get(), 10);
}

#[test]
fn boxed_get_mut_bypasses_lock() {
    let mut holder = BoxedValue::new(1);
    *holder.get_mut() += 9;
    assert_eq!(holder.get(), 10);
}

// --- into_inner ---

#[test]
fn guarded_into_inner_returns_latest() {
    let holder = GuardedValue::new(1);
    holder.set(2);
    assert_eq!(holder.into_inner(), 2);
}

#[test]
fn exclusive_into_inner_returns_latest() {
    let mut holder = ExclusiveValue::new(1);
    holder.set(2);
    assert_eq!(holder.into_inner(), 2);
}

#[test]
fn aliased_into_inner_returns_latest() {
    let holder = AliasedValue::new(1);
    holder.set(2);
    assert_eq!(holder.into_inner(), 2);
}

#[test]
fn boxed_into_inner_returns_latest() {
    let holder = BoxedValue::new(1);
    holder.set(2);
    assert_eq!(holder.into_inner(), 2);
}

// --- From ---

#[test]
fn from_impls() {
    let guarded: GuardedValue<i64> = 5.into();
    assert_eq!(guarded.get(), 5);

    let mut exclusive: ExclusiveValue<i64> = 5.into();
    assert_eq!(exclusive.get(), 5);

    let boxed: BoxedValue<i64> = 5.into();
    assert_eq!(boxed.get(), 5);
}

// --- moves: single ownership travels with the handle ---

#[test]
fn boxed_move_keeps_single_owner() {
    let holder = BoxedValue::new(50);
    let moved = holder;
    assert_eq!(moved.get(), 50);
    moved.set(51);
    assert_eq!(moved.into_inner(), 51);
}

#[test]
fn aliased_move_keeps_alias_valid() {
    let holder = AliasedValue::new(30);
    let moved = holder;
    assert_eq!(moved.get(), 30);
    moved.set(31);
    assert_eq!(moved.get(), 31);
}

#[test]
fn aliased_moves_through_collections() {
    let mut holders: Vec<AliasedValue<i64>> = (0..8).map(AliasedValue::new).collect();
    holders.rotate_left(3);
    let sum: i64 = holders.iter().map(AliasedValue::get).sum();
    assert_eq!(sum, 28);
    while let Some(holder) = holders.pop() {
        let _ = holder.get();
    }
}

// --- payload genericity ---

#[test]
fn non_integer_payload() {
    let holder = GuardedValue::new('x');
    assert_eq!(holder.get(), 'x');

    let pair = BoxedValue::new((1u8, 2u8));
    assert_eq!(pair.get(), (1, 2));
}

// --- Debug ---

#[test]
fn debug_impls_name_the_holder() {
    assert!(format!("{:?}", GuardedValue::new(1)).contains("GuardedValue"));
    assert!(format!("{:?}", ExclusiveValue::new(1)).contains("ExclusiveValue"));
    assert!(format!("{:?}", AliasedValue::new(1)).contains("AliasedValue"));
    assert!(format!("{:?}", BoxedValue::new(1)).contains("BoxedValue"));
}
