use crate::config::DemoConfig;
use crate::error::{DemoError, Result};
use crate::handle::{file_handle, UniqueHandle};
use crate::journal::Journal;
use crate::list::LinkedList;
use crate::shop::{pass_through, Derived, Shop};
use itertools::Itertools;
use std::fs::{self, File};
use std::io::Read;

pub type Demo = fn(&DemoConfig, &Journal) -> Result<()>;

/// Every demo, in the order the driver runs them.
pub const DEMOS: [(&str, Demo); 6] = [
    ("Unique Ownership Semantics Demo", unique_ownership),
    ("Runtime Polymorphism Demo", runtime_polymorphism),
    ("Custom Deleter Demo", custom_deleter),
    ("Custom Lambda Deleter and Exception Safety Demo", lambda_deleter),
    ("Owned Array Demo", owned_array),
    ("Linked List Demo", linked_list),
];

/// Run every demo in order. A demo that fails is reported and the rest
/// still run.
pub fn run_all(config: &DemoConfig, journal: &Journal) {
    for (index, (title, demo)) in DEMOS.iter().enumerate() {
        journal.heading(index + 1, title);
        if let Err(err) = demo(config, journal) {
            journal.failure(format!("{title} failed: {err}"));
        }
    }
}

// =============================================================================
// Demo 1: moving a box in and out of a function
// =============================================================================

pub fn unique_ownership(_config: &DemoConfig, journal: &Journal) -> Result<()> {
    let mut derived = Some(Derived::boxed(journal));
    let _result = derived.take().map(pass_through);
    debug_assert!(derived.is_none(), "derived must be empty after the move");
    Ok(())
}

// =============================================================================
// Demo 2: a concrete box becomes a trait object
// =============================================================================

pub fn runtime_polymorphism(_config: &DemoConfig, journal: &Journal) -> Result<()> {
    let derived = Derived::boxed(journal);
    let base: Box<dyn Shop> = derived;
    base.do_shop();
    Ok(())
}

// =============================================================================
// Demo 3: a file handle closed by a named release function
// =============================================================================

pub fn custom_deleter(config: &DemoConfig, journal: &Journal) -> Result<()> {
    let path = &config.scratch_path;
    let mut encoded = [0u8; 4];
    let expected = config.scratch_byte.encode_utf8(&mut encoded);
    if let Err(err) = fs::write(path, expected.as_bytes()) {
        journal.failure(format!("Could not write {}: {err}", path.display()));
    }

    // An empty handle means the open failed: nothing to read, nothing to close.
    let mut handle = file_handle(File::open(path).ok());
    if let Some(file) = handle.get_mut() {
        let mut buf = vec![0u8; expected.len()];
        file.read_exact(&mut buf).map_err(|err| DemoError::io(path, err))?;
        journal.record(String::from_utf8_lossy(&buf));
    }
    Ok(())
}

// =============================================================================
// Demo 4: a closure releases the object while an error propagates
// =============================================================================

pub fn lambda_deleter(_config: &DemoConfig, journal: &Journal) -> Result<()> {
    if let Err(err) = stock_then_fail(journal) {
        journal.record(format!("Caught exception: {err}"));
    }
    Ok(())
}

fn stock_then_fail(journal: &Journal) -> Result<()> {
    let deleter_journal = journal.clone();
    let _derived = UniqueHandle::new(Some(Derived::boxed(journal)), move |derived: Box<Derived>| {
        deleter_journal.record("Custom lambda deleter is destroying the object...");
        drop(derived);
    });
    simulate_failure()?;
    Ok(())
}

fn simulate_failure() -> Result<()> {
    Err(DemoError::simulated("Simulated error"))
}

// =============================================================================
// Demo 5: one box owning several objects
// =============================================================================

pub fn owned_array(config: &DemoConfig, journal: &Journal) -> Result<()> {
    let _array = Derived::many(config.array_len, journal);
    Ok(())
}

// =============================================================================
// Demo 6: a long list torn down without recursion
// =============================================================================

pub fn linked_list(config: &DemoConfig, journal: &Journal) -> Result<()> {
    let mut list = LinkedList::new();
    list.extend(0..config.node_count);
    journal.record(format!(
        "{} nodes in the linked list (bottles of juice in the shop)...",
        group_thousands(list.len())
    ));
    Ok(())
}

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: usize) -> String {
    let digits: Vec<char> = value.to_string().chars().collect();
    digits
        .rchunks(3)
        .rev()
        .map(|chunk| chunk.iter().collect::<String>())
        .join(",")
}
