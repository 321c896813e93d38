//! Seed-pattern files: parsing, rendering, and the one-shot batch step.
//!
//! A pattern file names its two display markers and carries the board as a
//! block of marker glyphs wrapped in `"` lines:
//!
//! ```text
//! dead_cell: "."
//! live_cell: "#"
//! board:
//! "
//! .....
//! .###.
//! .....
//! "
//! ```

use std::path::Path;

use log::debug;

use crate::error::{PatternError, UniverseError};
use crate::universe::Universe;

/// A parsed seed pattern: a rectangular boolean board plus the two marker
/// characters used to render it back to text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedPattern {
    live_marker: char,
    dead_marker: char,
    rows: Vec<Vec<bool>>,
}

impl SeedPattern {
    /// Parse the pattern file format.
    ///
    /// Lines that match no known key are ignored, so files can carry
    /// free-form notes alongside the board.
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let mut live_marker = None;
        let mut dead_marker = None;
        let mut board_lines = Vec::new();

        let mut lines = text.lines().map(str::trim);
        while let Some(line) = lines.next() {
            if line.starts_with("board:") {
                if lines.next() != Some("\"") {
                    return Err(PatternError::UnterminatedBoard);
                }
                loop {
                    match lines.next() {
                        Some("\"") => break,
                        Some(row) => board_lines.push(row.to_owned()),
                        None => return Err(PatternError::UnterminatedBoard),
                    }
                }
            } else if let Some(value) = marker_value(line, "dead_cell:") {
                dead_marker = Some(value);
            } else if let Some(value) = marker_value(line, "live_cell:") {
                live_marker = Some(value);
            }
        }

        let live_marker = live_marker.ok_or(PatternError::MissingLiveMarker)?;
        let dead_marker = dead_marker.ok_or(PatternError::MissingDeadMarker)?;

        let mut rows = Vec::with_capacity(board_lines.len());
        let mut width = None;
        for (row_index, line) in board_lines.iter().enumerate() {
            let mut row = Vec::new();
            for glyph in line.chars() {
                if glyph == live_marker {
                    row.push(true);
                } else if glyph == dead_marker {
                    row.push(false);
                } else {
                    return Err(PatternError::UnknownGlyph {
                        row: row_index,
                        glyph,
                    });
                }
            }
            let expected = *width.get_or_insert(row.len());
            if row.len() != expected {
                return Err(PatternError::RaggedRow {
                    row: row_index,
                    expected,
                    got: row.len(),
                });
            }
            rows.push(row);
        }

        if rows.is_empty() || rows[0].is_empty() {
            return Err(PatternError::EmptyBoard);
        }

        debug!("parsed {}x{} seed pattern", rows[0].len(), rows.len());
        Ok(Self {
            live_marker,
            dead_marker,
            rows,
        })
    }

    /// Read and parse a pattern file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PatternError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn live_marker(&self) -> char {
        self.live_marker
    }

    #[inline]
    pub fn dead_marker(&self) -> char {
        self.dead_marker
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Construct a universe of the pattern's dimensions and seed it.
    pub fn to_universe(&self) -> Result<Universe, UniverseError> {
        let mut universe = Universe::new(self.width(), self.height())?;
        for (y, row) in self.rows.iter().enumerate() {
            for (x, &alive) in row.iter().enumerate() {
                if alive {
                    universe.set_cell(x, y, true)?;
                }
            }
        }
        Ok(universe)
    }

    /// Advance the pattern by exactly one generation: build a universe, seed
    /// it, tick once, and re-wrap the result with the same markers.
    pub fn next_generation(&self) -> Result<SeedPattern, UniverseError> {
        let mut universe = self.to_universe()?;
        universe.tick()?;
        Ok(Self {
            live_marker: self.live_marker,
            dead_marker: self.dead_marker,
            rows: universe.snapshot(),
        })
    }

    /// The board rendered with this pattern's markers, one row per line.
    pub fn board_string(&self) -> String {
        render_board(&self.rows, self.live_marker, self.dead_marker)
    }
}

/// Render a committed board matrix as marker text, one row per line.
pub fn render_board(rows: &[Vec<bool>], live: char, dead: char) -> String {
    let mut out = String::new();
    for row in rows {
        for &alive in row {
            out.push(if alive { live } else { dead });
        }
        out.push('\n');
    }
    out
}

fn marker_value(line: &str, key: &str) -> Option<char> {
    let rest = line.strip_prefix(key)?.trim();
    let rest = rest.strip_prefix('"')?.strip_suffix('"')?;
    let mut glyphs = rest.chars();
    let value = glyphs.next()?;
    if glyphs.next().is_some() || value.is_whitespace() {
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::SeedPattern;
    use crate::error::PatternError;

    const BLINKER: &str = r##"
dead_cell: "."
live_cell: "#"
board:
"
.....
.###.
.....
"
"##;

    #[test]
    fn parses_markers_and_board() {
        let pattern = SeedPattern::parse(BLINKER).unwrap();
        assert_eq!(pattern.live_marker(), '#');
        assert_eq!(pattern.dead_marker(), '.');
        assert_eq!((pattern.width(), pattern.height()), (5, 3));
        assert!(pattern.rows()[1][2]);
        assert!(!pattern.rows()[0][0]);
    }

    #[test]
    fn board_string_round_trips() {
        let pattern = SeedPattern::parse(BLINKER).unwrap();
        assert_eq!(pattern.board_string(), ".....\n.###.\n.....\n");
        let reparsed = SeedPattern::parse(&format!(
            "dead_cell: \".\"\nlive_cell: \"#\"\nboard:\n\"\n{}\"",
            pattern.board_string()
        ))
        .unwrap();
        assert_eq!(reparsed, pattern);
    }

    #[test]
    fn unknown_lines_are_ignored() {
        let text = format!("just a note\n{BLINKER}\nanother note");
        assert!(SeedPattern::parse(&text).is_ok());
    }

    #[test]
    fn missing_markers_are_rejected() {
        let text = "live_cell: \"#\"\nboard:\n\"\n#\n\"";
        assert!(matches!(
            SeedPattern::parse(text),
            Err(PatternError::MissingDeadMarker)
        ));
        let text = "dead_cell: \".\"\nboard:\n\"\n.\n\"";
        assert!(matches!(
            SeedPattern::parse(text),
            Err(PatternError::MissingLiveMarker)
        ));
    }

    #[test]
    fn malformed_marker_lines_count_as_missing() {
        // No quotes, two characters, whitespace: none of these bind a marker.
        for bad in ["live_cell: #", "live_cell: \"##\"", "live_cell: \" \""] {
            let text = format!("dead_cell: \".\"\n{bad}\nboard:\n\"\n.\n\"");
            assert!(matches!(
                SeedPattern::parse(&text),
                Err(PatternError::MissingLiveMarker)
            ));
        }
    }

    #[test]
    fn stray_glyphs_are_rejected() {
        let text = "dead_cell: \".\"\nlive_cell: \"#\"\nboard:\n\"\n.#x\n\"";
        assert!(matches!(
            SeedPattern::parse(text),
            Err(PatternError::UnknownGlyph { row: 0, glyph: 'x' })
        ));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let text = "dead_cell: \".\"\nlive_cell: \"#\"\nboard:\n\"\n...\n....\n\"";
        assert!(matches!(
            SeedPattern::parse(text),
            Err(PatternError::RaggedRow {
                row: 1,
                expected: 3,
                got: 4
            })
        ));
    }

    #[test]
    fn empty_boards_are_rejected() {
        let text = "dead_cell: \".\"\nlive_cell: \"#\"\nboard:\n\"\n\"";
        assert!(matches!(
            SeedPattern::parse(text),
            Err(PatternError::EmptyBoard)
        ));
    }

    #[test]
    fn unclosed_board_blocks_are_rejected() {
        let text = "dead_cell: \".\"\nlive_cell: \"#\"\nboard:\n\"\n...";
        assert!(matches!(
            SeedPattern::parse(text),
            Err(PatternError::UnterminatedBoard)
        ));
        // The opening `"` line is just as mandatory.
        let text = "dead_cell: \".\"\nlive_cell: \"#\"\nboard:\n...\n\"";
        assert!(matches!(
            SeedPattern::parse(text),
            Err(PatternError::UnterminatedBoard)
        ));
    }
}
