//! Provides the `LineSet` structure, the ordered lines of one operand together
//! with a hashed index for membership tests.
use bstr::ByteSlice;
use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use memchr::memchr;

/// Iterate over the lines of `slice`. A line is zero or more bytes followed by
/// `\n` or `\r\n`; the terminator is not part of the line. A final line with
/// no terminator still counts.
pub(crate) fn lines_of(slice: &[u8]) -> impl Iterator<Item = &[u8]> + '_ {
    slice.lines()
}

/// The `LineIterator` type is used to return the lines selected from a
/// `LineSet`: `a.difference(&b)` returns an iterator over the lines of `a`
/// that `b` lacks.
pub(crate) type LineIterator<'a> = Box<dyn Iterator<Item = &'a [u8]> + 'a>;

// A `MemberSet` is a set of slices borrowed from an operand's text, each slice
// corresponding to a line.
//
type MemberSet<'data> = IndexSet<&'data [u8], FxBuildHasher>;

/// A `LineSet` holds the lines of one operand, borrowed from its contents.
/// * `lines` keeps every line in operand order — a line that occurs three
///   times in the operand occurs three times in `lines`.
/// * `members` indexes the same slices so membership tests are O(1).
/// * A `LineSet` also keeps information about whether its operand began with
///   a Unicode Byte Order Mark, and what line terminator was used on the
///   operand's first line. On output, the caller prints a Byte Order Mark if
///   the "single" operand had one, and uses the same line terminator as that
///   operand's first line.
pub(crate) struct LineSet<'data> {
    lines: Vec<&'data [u8]>,
    members: MemberSet<'data>,
    bom: &'static [u8],             // Byte Order Mark or empty
    line_terminator: &'static [u8], // \n or \r\n
}

/// Creates a new `LineSet` whose lines are borrowed from `slice`, skipping a
/// leading Byte Order Mark if there is one.
pub(crate) fn line_set_from(slice: &[u8]) -> LineSet<'_> {
    let (bom, line_terminator) = output_info(slice);
    let lines: Vec<&[u8]> = lines_of(&slice[bom.len()..]).collect();
    let mut members = MemberSet::default();
    members.extend(lines.iter().copied());
    LineSet { lines, members, bom, line_terminator }
}

impl<'data> LineSet<'data> {
    /// Does any line of `self` equal `line`?
    pub(crate) fn contains(&self, line: &[u8]) -> bool {
        self.members.contains(line)
    }

    /// The lines of `self` that occur nowhere in `other`, in the order they
    /// occur in `self`. Each occurrence is tested independently, so a line
    /// that `other` lacks shows up once per occurrence.
    pub(crate) fn difference<'a>(&'a self, other: &'a LineSet<'_>) -> LineIterator<'a> {
        let lines = self.lines.iter().map(|line| -> &'a [u8] { line });
        Box::new(lines.filter(move |line| !other.contains(line)))
    }

    /// The operand's Byte Order Mark, or an empty slice
    pub(crate) fn bom(&self) -> &'static [u8] {
        self.bom
    }

    /// The line terminator of the operand's first line
    pub(crate) fn line_terminator(&self) -> &'static [u8] {
        self.line_terminator
    }
}

/// Returns `(bom, line_terminator)`, where `bom` is the (UTF-8) Byte Order
/// Mark, or the empty string if `slice` has none, and `line_terminator` is
/// `\r\n` if the first line of `slice` ends with `\r\n`, and `\n` if the first
/// line ends just with `\n` (or is the only line in the file and has no line
/// terminator).
fn output_info(slice: &[u8]) -> (&'static [u8], &'static [u8]) {
    let mut bom: &'static [u8] = b"";
    let mut line_terminator: &'static [u8] = b"\n";
    if has_bom(slice) {
        bom = BOM_BYTES;
    }
    if let Some(n) = memchr(b'\n', slice) {
        if n > 0 && slice[n - 1] == b'\r' {
            line_terminator = b"\r\n";
        }
    }
    (bom, line_terminator)
}

const BOM_0: u8 = b'\xEF';
const BOM_1: u8 = b'\xBB';
const BOM_2: u8 = b'\xBF';
const BOM_BYTES: &[u8] = b"\xEF\xBB\xBF";
/// Does `operand` begin with a (UTF-8) Byte Order Mark?
fn has_bom(operand: &[u8]) -> bool {
    operand.len() >= 3 && operand[0] == BOM_0 && operand[1] == BOM_1 && operand[2] == BOM_2
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;

    const UTF8_BOM: &str = "\u{FEFF}";

    #[test]
    fn utf8_bom_is_correct() {
        assert_eq!([BOM_0, BOM_1, BOM_2], UTF8_BOM.as_bytes());
    }

    fn collected<'a>(lines: LineIterator<'a>) -> Vec<&'a [u8]> {
        lines.collect()
    }

    #[test]
    fn a_final_line_needs_no_terminator() {
        let lines: Vec<&[u8]> = lines_of(b"a\nb").collect();
        assert_eq!(lines, vec![&b"a"[..], &b"b"[..]]);
    }

    #[test]
    fn crlf_and_lf_terminated_lines_are_equal() {
        let crlf = line_set_from(b"a\r\nb\r\n");
        let lf = line_set_from(b"a\nb\nc\n");
        assert!(collected(crlf.difference(&lf)).is_empty());
        assert_eq!(collected(lf.difference(&crlf)), vec![&b"c"[..]]);
    }

    #[test]
    fn difference_with_itself_is_empty() {
        let set = line_set_from(b"a\nb\na\n");
        assert!(collected(set.difference(&set)).is_empty());
    }

    #[test]
    fn difference_keeps_order_and_multiplicity() {
        let a = line_set_from(b"x\nq\nx\ny\n");
        let b = line_set_from(b"y\n");
        assert_eq!(collected(a.difference(&b)), vec![&b"x"[..], &b"q"[..], &b"x"[..]]);
    }

    #[test]
    fn the_first_line_sets_the_output_terminator() {
        let crlf = line_set_from(b"a\r\nb\n");
        assert_eq!(crlf.line_terminator(), b"\r\n");
        let lf = line_set_from(b"a\nb\r\n");
        assert_eq!(lf.line_terminator(), b"\n");
    }

    #[test]
    fn a_byte_order_mark_is_not_part_of_the_first_line() {
        let set = line_set_from(b"\xEF\xBB\xBFa\nb\n");
        assert_eq!(set.bom(), BOM_BYTES);
        assert!(set.contains(b"a"));
    }
}
