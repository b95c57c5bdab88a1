use std::fmt;

/// A point in the source: 1-based line and column (in characters) plus the
/// byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset }
    }

    /// The position just past `ch`.
    pub fn advance(self, ch: char) -> Self {
        if ch == '\n' {
            Self {
                line: self.line + 1,
                column: 1,
                offset: self.offset + ch.len_utf8(),
            }
        } else {
            Self {
                line: self.line,
                column: self.column + 1,
                offset: self.offset + ch.len_utf8(),
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1, 0)
    }
}

/// Source range of a token. `line`/`column` is where it starts,
/// `end_line`/`end_column` just past its last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
    pub start: usize,
    pub end: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl Span {
    pub fn between(from: Position, to: Position) -> Self {
        Self {
            line: from.line,
            column: from.column,
            start: from.offset,
            end: to.offset,
            end_line: to.line,
            end_column: to.column,
        }
    }

    pub fn start_position(&self) -> Position {
        Position::new(self.line, self.column, self.start)
    }

    pub fn end_position(&self) -> Position {
        Position::new(self.end_line, self.end_column, self.end)
    }

    /// Zero-width span just past this one, used for the EOF sentinel.
    pub fn after(&self) -> Self {
        let end = self.end_position();
        Self::between(end, end)
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::between(Position::default(), Position::default())
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn advance_counts_characters_not_bytes() {
        let pos = Position::default().advance('স').advance('a');
        assert_eq!(pos, Position::new(1, 3, 4));
    }

    #[test]
    fn newline_moves_to_next_line() {
        let pos = Position::new(1, 7, 6).advance('\n');
        assert_eq!(pos, Position::new(2, 1, 7));
    }

    #[test]
    fn after_starts_at_end() {
        let span = Span::between(Position::new(1, 5, 4), Position::new(1, 10, 19));
        let eof = span.after();
        assert_eq!(eof.start_position(), Position::new(1, 10, 19));
        assert_eq!(eof.end_position(), Position::new(1, 10, 19));
    }
}
