/// A single source line with its 1-based number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    pub number: usize,
    /// Line text without the `\n` terminator or a trailing `\r`.
    pub text: &'a str,
}

/// Splits a document into lines.
///
/// A final `\n` terminates the last line rather than starting an empty one,
/// so `"a\n"` yields one line and `""` yields none.
pub fn lines(input: &str) -> impl Iterator<Item = LineRef<'_>> {
    input
        .split_terminator('\n')
        .enumerate()
        .map(|(idx, raw)| LineRef {
            number: idx + 1,
            text: raw.strip_suffix('\r').unwrap_or(raw),
        })
}
