//! Delimiter-balancing scanner over raw source text
//!
//! Every extractor that needs a body span (class members, component hooks,
//! SFC sections) goes through this scanner, so its comment/string skipping
//! bounds the correctness of everything above it.

/// Result of scanning for a delimiter-balanced block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A block was found. `open` is the offset of the opening delimiter,
    /// `end` the offset one past the matching close (or the text length
    /// when the input ran out first, in which case `closed` is false).
    Block {
        open: usize,
        end: usize,
        closed: bool,
    },
    /// A statement terminator (`;` or newline) appeared before any opening
    /// delimiter: single-line or expression form, no block to scan.
    NoBlock,
}

/// Scan forward from `start` for the first `{` or `(` and return the span
/// of its balanced block.
///
/// Nesting depth is tracked for the chosen delimiter type only; the other
/// delimiter kind inside the block is ignored. Single-line comments, block
/// comments, and single/double/backtick string literals are skipped, with
/// backslash-escape awareness inside strings. Interpolation braces inside
/// template literals are deliberately not balanced.
pub fn scan_balanced(text: &str, start: usize) -> ScanOutcome {
    let bytes = text.as_bytes();
    let mut i = start.min(bytes.len());

    let mut open: Option<(u8, u8, usize)> = None;
    let mut depth = 0usize;

    while i < bytes.len() {
        let b = bytes[i];

        // Comment and string skipping applies in every state.
        match b {
            b'/' if i + 1 < bytes.len() && bytes[i + 1] == b'/' => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
                continue;
            }
            b'/' if i + 1 < bytes.len() && bytes[i + 1] == b'*' => {
                i += 2;
                while i + 1 < bytes.len() && !(bytes[i] == b'*' && bytes[i + 1] == b'/') {
                    i += 1;
                }
                i = (i + 2).min(bytes.len());
                continue;
            }
            b'"' | b'\'' | b'`' => {
                let quote = b;
                i += 1;
                while i < bytes.len() {
                    if bytes[i] == b'\\' {
                        i += 2;
                        continue;
                    }
                    if bytes[i] == quote {
                        break;
                    }
                    i += 1;
                }
                i = (i + 1).min(bytes.len());
                continue;
            }
            _ => {}
        }

        match open {
            None => match b {
                b'{' | b'(' => {
                    let close = if b == b'{' { b'}' } else { b')' };
                    open = Some((b, close, i));
                    depth = 1;
                }
                b';' | b'\n' => return ScanOutcome::NoBlock,
                _ => {}
            },
            Some((open_byte, close_byte, open_at)) => {
                if b == open_byte {
                    depth += 1;
                } else if b == close_byte {
                    depth -= 1;
                    if depth == 0 {
                        return ScanOutcome::Block {
                            open: open_at,
                            end: i + 1,
                            closed: true,
                        };
                    }
                }
            }
        }

        i += 1;
    }

    // Ran out of text: best-effort scan to end of file.
    match open {
        Some((_, _, open_at)) => ScanOutcome::Block {
            open: open_at,
            end: bytes.len(),
            closed: false,
        },
        None => ScanOutcome::NoBlock,
    }
}

/// Interior text of the first balanced block at/after `start`, without the
/// delimiters themselves. Returns `None` in the no-block case; an
/// unterminated block yields everything to end-of-text.
pub fn body_of(text: &str, start: usize) -> Option<&str> {
    match scan_balanced(text, start) {
        ScanOutcome::Block { open, end, closed } => {
            let inner_end = if closed { end - 1 } else { end };
            Some(&text[open + 1..inner_end])
        }
        ScanOutcome::NoBlock => None,
    }
}
