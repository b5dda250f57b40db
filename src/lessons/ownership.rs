use std::io::Write;

use crate::error::Result;
use crate::records::Record;
use crate::report::Reporter;

/// Move, then borrow, then use the owner again. The commented-out line is the
/// one the compiler rejects.
pub fn run<W: Write>(reporter: &mut Reporter<W>) -> Result<Record> {
    reporter.banner("Ownership Demo")?;

    let record = Record::new(1, "test".to_string(), 1.5);
    reporter.line(format_args!("Original record: {record:?}"))?;

    let moved = record;
    reporter.line(format_args!("Moved record: {moved:?}"))?;
    // reporter.line(format_args!("{record:?}"))?; // error[E0382]: borrow of moved value

    let borrowed = &moved;
    reporter.line(format_args!("Borrowed: {borrowed:?}"))?;
    reporter.line(format_args!("Owner still accessible: {moved:?}"))?;

    Ok(moved)
}
