//! Byte cursor over parser input.
//!
//! Every delimiter in the grammar is ASCII, so the cursor works on bytes and
//! only ever stops on ASCII positions. Any position it reports is therefore a
//! valid `char` boundary and can be used to slice the source `str`.
//!
//! Delimiter searches (`"`/`\` in strings, bracket and paren pairs in balanced
//! scans) use `memchr` to skip ordinary content.

/// Returns `true` for the whitespace bytes that separate tokens.
#[inline]
pub(crate) fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Returns `true` for bytes that end an atom.
#[inline]
pub(crate) fn is_atom_end(byte: u8) -> bool {
    is_whitespace(byte) || matches!(byte, b'(' | b')' | b'[' | b']' | b'"')
}

/// Outcome of scanning a string body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StringEnd {
    /// Cursor sits on the closing `"`.
    Closed,
    /// Input ran out before the closing `"`.
    MissingQuote,
    /// Input ran out right after a `\`.
    DanglingEscape,
}

/// Cursor over `src[pos..end]`.
///
/// A nested `[...]` body is read with a cursor limited to the body's range,
/// so it cannot see past its closing bracket and every position it reports
/// is an offset into the whole source text.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    src: &'a str,
    pos: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Cursor {
            src,
            pos: 0,
            end: src.len(),
        }
    }

    /// A cursor over `src[start..end]`; both must be `char` boundaries.
    pub(crate) fn range(src: &'a str, start: usize, end: usize) -> Self {
        Cursor {
            src,
            pos: start,
            end,
        }
    }

    /// The byte at the current position, or `None` at the end of the range.
    #[inline]
    pub(crate) fn current(&self) -> Option<u8> {
        if self.pos < self.end {
            self.src.as_bytes().get(self.pos).copied()
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// End of the range this cursor reads.
    #[inline]
    pub(crate) fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.pos += 1;
    }

    /// Move to `pos`, a `char` boundary within the range.
    #[inline]
    pub(crate) fn seek(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Source text between two positions previously reported by the cursor.
    #[inline]
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.src[start..end]
    }

    fn remaining(&self) -> &'a [u8] {
        self.src.as_bytes().get(self.pos..self.end).unwrap_or_default()
    }

    pub(crate) fn eat_whitespace(&mut self) {
        while self.current().is_some_and(is_whitespace) {
            self.pos += 1;
        }
    }

    /// Advance to the first byte that ends an atom, or to EOF.
    pub(crate) fn eat_atom(&mut self) {
        while self.current().is_some_and(|b| !is_atom_end(b)) {
            self.pos += 1;
        }
    }

    /// Skip a balanced `open ... close` region.
    ///
    /// The cursor must sit just past an `open` byte (depth 1). On success the
    /// cursor sits just past the matching `close` and the function returns
    /// `true`. At EOF with depth still open it returns `false` with the cursor
    /// at EOF.
    ///
    /// Nesting is counted on raw bytes: delimiters inside strings or other
    /// constructs still count. The parser uses this for comments; bracket
    /// pairs are matched once up front by [`match_brackets`].
    pub(crate) fn skip_balanced(&mut self, open: u8, close: u8) -> bool {
        let mut depth = 1usize;
        while let Some(offset) = memchr::memchr2(open, close, self.remaining()) {
            self.pos += offset;
            if self.src.as_bytes()[self.pos] == open {
                depth += 1;
            } else {
                depth -= 1;
            }
            self.pos += 1;
            if depth == 0 {
                return true;
            }
        }
        self.pos = self.end;
        false
    }

    /// Scan a string body up to its closing `"`.
    ///
    /// The cursor must sit just past the opening `"`. A `\` consumes itself
    /// and the following byte without interpretation.
    pub(crate) fn eat_string_body(&mut self) -> StringEnd {
        loop {
            let Some(offset) = memchr::memchr2(b'"', b'\\', self.remaining()) else {
                self.pos = self.end;
                return StringEnd::MissingQuote;
            };
            self.pos += offset;
            if self.src.as_bytes()[self.pos] == b'"' {
                return StringEnd::Closed;
            }
            // backslash: it and the next byte are opaque
            if self.pos + 1 >= self.end {
                self.pos = self.end;
                return StringEnd::DanglingEscape;
            }
            self.pos += 2;
        }
    }
}

/// Pair every `[` in `text` with its matching `]`, counting raw bytes.
///
/// Returns `(open, close)` offsets sorted by `open`. A `[` with no match is
/// absent. Matching with a single stack gives the same partner as a depth
/// count forward from each `[`.
pub(crate) fn match_brackets(text: &str) -> Vec<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut open = Vec::new();
    let mut pairs = Vec::new();
    let mut pos = 0;
    while let Some(offset) = memchr::memchr2(b'[', b']', bytes.get(pos..).unwrap_or_default()) {
        pos += offset;
        if bytes[pos] == b'[' {
            open.push(pos);
        } else if let Some(start) = open.pop() {
            pairs.push((start, pos));
        }
        pos += 1;
    }
    pairs.sort_unstable();
    pairs
}
