//! Builds one holder per lock storage strategy and prints each payload,
//! read through the narrowest capability the strategy admits.

use guarded_value::{AliasedValue, BoxedValue, ExclusiveValue, GuardedValue};

fn read_guarded(holder: &GuardedValue<i64>) -> i64 {
    holder.get()
}

fn read_exclusive(holder: &mut ExclusiveValue<i64>) -> i64 {
    // A `&ExclusiveValue` caller has no way in; see the type's docs.
    holder.get()
}

fn read_aliased(holder: &AliasedValue<i64>) -> i64 {
    holder.get()
}

fn read_boxed(holder: &BoxedValue<i64>) -> i64 {
    holder.get()
}

fn report() -> Vec<String> {
    let mut lines = Vec::new();

    let guarded = GuardedValue::new(10);
    lines.push(format!("GuardedValue: {}", read_guarded(&guarded)));

    let mut exclusive = ExclusiveValue::new(20);
    lines.push(format!("ExclusiveValue: {}", read_exclusive(&mut exclusive)));

    let aliased = AliasedValue::new(30);
    lines.push(format!("AliasedValue: {}", read_aliased(&aliased)));

    // The fourth strategy would take `&mut` to its lock field inside a
    // `&self` accessor; that type cannot be written. The crate docs keep
    // the rejected pattern as a compile_fail example.
    // lines.push(format!("RejectedValue: {}", read_rejected(&RejectedValue::new(40))));

    let boxed = BoxedValue::new(50);
    lines.push(format!("BoxedValue: {}", read_boxed(&boxed)));

    lines
}

fn main() {
    for line in report() {
        println!("{line}");
    }
}
