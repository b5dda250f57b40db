use std::io::Write;
use std::rc::Rc;

use crate::error::Result;
use crate::records::Record;
use crate::report::Reporter;

/// Shared ownership is the one place Rust counts references at runtime.
/// Returns the strong count after creation, after cloning a handle, and
/// after dropping that handle.
pub fn run<W: Write>(reporter: &mut Reporter<W>) -> Result<[usize; 3]> {
    reporter.banner("Reference Counting Demo")?;

    let record = Rc::new(Record::new(1, "test".to_string(), 1.5));
    let after_create = Rc::strong_count(&record);
    reporter.line(format_args!("Reference count after creation: {after_create}"))?;

    let another = Rc::clone(&record);
    let after_clone = Rc::strong_count(&record);
    reporter.line(format_args!("Reference count after clone: {after_clone}"))?;

    drop(another);
    let after_drop = Rc::strong_count(&record);
    reporter.line(format_args!("Reference count after drop: {after_drop}"))?;

    Ok([after_create, after_clone, after_drop])
}
