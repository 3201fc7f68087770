//! Bidirectional, resumable iteration over grapheme clusters.

use crate::breaks::{BackBreaks, Breaks};
use crate::state::{STATE_DONE, STATE_EOT_NO_BREAK, STATE_SOT_NO_BREAK};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// A bidirectional iterator over the grapheme clusters of a string.
///
/// The cursor is positioned on a current cluster `[start, end)`, initially
/// the empty range at offset 0, and moves one cluster at a time in either
/// direction. Alongside the range it stores the automaton state of the
/// last move and the small byte distance between the automaton's position
/// and the range edge: finding a boundary requires consuming the first
/// character of the *following* cluster, so the automaton usually sits a
/// little past the cluster it just reported. Together these let a move in
/// the same direction resume without re-reading any text, and a move in
/// the other direction restart from the adjacent known boundary, both in
/// O(1).
///
/// Cloning gives an independent cursor with identical position and state,
/// so two traversals can proceed separately.
#[derive(Debug, Clone)]
pub struct ClusterCursor<'a> {
    text: &'a str,
    start: usize,
    end: usize,
    state: u8,
    delta: u8,
    direction: Direction,
}

impl<'a> ClusterCursor<'a> {
    /// Creates a cursor over `text`, collapsed to the empty range at the
    /// start.
    pub fn new(text: &'a str) -> Self {
        ClusterCursor {
            text,
            start: 0,
            end: 0,
            state: STATE_SOT_NO_BREAK,
            delta: 0,
            direction: Direction::Forward,
        }
    }

    /// The string being iterated.
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// The current cluster. Empty before the first move and after moving
    /// off either end.
    pub fn current(&self) -> &'a str {
        &self.text[self.start..self.end]
    }

    /// Byte offset of the start of the current cluster.
    pub fn cluster_start(&self) -> usize {
        self.start
    }

    /// Byte offset just past the end of the current cluster.
    pub fn cluster_end(&self) -> usize {
        self.end
    }

    /// The code units (UTF-8 bytes) of the current cluster.
    pub fn code_units(&self) -> &'a [u8] {
        self.current().as_bytes()
    }

    /// The code points of the current cluster.
    pub fn runes(&self) -> core::str::Chars<'a> {
        self.current().chars()
    }

    /// Advances to the next cluster, returning whether one was produced.
    /// On `false` the cursor collapses to the empty range at the end of
    /// the current position.
    pub fn move_next(&mut self) -> bool {
        let mut breaks = match self.direction {
            Direction::Forward => Breaks::new(
                self.text,
                self.end + self.delta as usize,
                self.text.len(),
                self.state,
            ),
            Direction::Backward => {
                Breaks::new(self.text, self.end, self.text.len(), STATE_SOT_NO_BREAK)
            }
        };
        self.direction = Direction::Forward;
        match breaks.next_break() {
            Some(boundary) => {
                self.start = self.end;
                self.end = boundary;
                self.delta = (breaks.cursor() - boundary) as u8;
                self.state = breaks.state();
                true
            }
            None => {
                self.start = self.end;
                self.delta = 0;
                self.state = STATE_DONE;
                false
            }
        }
    }

    /// Moves to the previous cluster, returning whether one was produced.
    /// On `false` the cursor collapses to the empty range at the start of
    /// the current position.
    pub fn move_prev(&mut self) -> bool {
        let mut breaks = match self.direction {
            Direction::Backward => BackBreaks::new(
                self.text,
                self.start - self.delta as usize,
                0,
                self.state,
            ),
            Direction::Forward => BackBreaks::new(self.text, self.start, 0, STATE_EOT_NO_BREAK),
        };
        self.direction = Direction::Backward;
        match breaks.next_break() {
            Some(boundary) => {
                self.end = self.start;
                self.start = boundary;
                self.delta = (boundary - breaks.cursor()) as u8;
                self.state = breaks.state();
                true
            }
            None => {
                self.end = self.start;
                self.delta = 0;
                self.state = STATE_DONE;
                false
            }
        }
    }

    /// Collapses the cursor to the empty range at byte offset `index`,
    /// ready to move in either direction.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds or splits a character.
    pub fn reset(&mut self, index: usize) {
        assert!(
            index <= self.text.len(),
            "index {index} out of bounds for a string of length {}",
            self.text.len()
        );
        assert!(
            self.text.is_char_boundary(index),
            "index {index} splits a character"
        );
        self.start = index;
        self.end = index;
        self.state = STATE_SOT_NO_BREAK;
        self.delta = 0;
        self.direction = Direction::Forward;
    }

    /// Collapses to the start of the text.
    pub fn reset_start(&mut self) {
        self.reset(0);
    }

    /// Collapses to the end of the text.
    pub fn reset_end(&mut self) {
        self.start = self.text.len();
        self.end = self.text.len();
        self.state = STATE_EOT_NO_BREAK;
        self.delta = 0;
        self.direction = Direction::Backward;
    }
}
