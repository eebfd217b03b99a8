//! Houses the `calculate` function
//!
use anyhow::Result;

use crate::lines::line_set_from;

/// Printed between the two halves of the report, on a line of its own.
const SEPARATOR: &[u8] = b"-----";

/// Calculates and prints the two-way difference of the operands. Each operand
/// is treated as an ordered sequence of lines, and `out` receives:
///
/// * the lines of `single` that occur nowhere in `multi`, in operand order,
/// * a `-----` separator line, and
/// * the lines of `multi` that occur nowhere in `single`, in operand order.
///
/// A line that its counterpart lacks is printed once per occurrence. An empty
/// difference contributes nothing, so identical operands produce just the
/// separator line. Output uses the `single` operand's Byte Order Mark (if any)
/// and the line terminator of its first line.
pub fn calculate(single: &[u8], multi: &[u8], mut out: impl std::io::Write) -> Result<()> {
    let single = line_set_from(single);
    let multi = line_set_from(multi);
    let eol = single.line_terminator();

    out.write_all(single.bom())?;
    for line in single.difference(&multi) {
        out.write_all(line)?;
        out.write_all(eol)?;
    }
    out.write_all(SEPARATOR)?;
    out.write_all(eol)?;
    for line in multi.difference(&single) {
        out.write_all(line)?;
        out.write_all(eol)?;
    }
    out.flush()?;
    Ok(())
}
