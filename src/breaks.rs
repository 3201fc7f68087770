//! Low-level break iterators over a string, plus the local boundary
//! predicate that the search operations in [`crate::GraphemeClusters`]
//! are built on.
//!
//! All positions are byte offsets into the UTF-8 text. A boundary can only
//! sit on a `char` boundary, so the multi-byte continuation handling here
//! plays the role that surrogate-pair handling would play for a UTF-16
//! string.

use crate::properties::GraphemeCategory;
use crate::state::{
    STATE_DONE, STATE_EOT_NO_BREAK, STATE_EXTEND, STATE_LOOKAHEAD_MIN, STATE_NO_BREAK,
    STATE_REGIONAL_EVEN, STATE_REGIONAL_LOOKAHEAD, STATE_REGIONAL_ODD, STATE_SOT,
    STATE_ZWJ_PICTOGRAPHIC, STATE_ZWJ_PICTOGRAPHIC_LOOKAHEAD, backward_move, forward_move,
};

/// Iterator over the grapheme cluster boundaries of `text[cursor..end]`,
/// walking left to right.
///
/// Each call to [`Self::next_break`] yields the next boundary, strictly
/// increasing, in `cursor..=end`, then `None` forever. With an initial
/// state of [`STATE_SOT`] the starting position itself is reported first
/// (for a non-empty range); [`crate::state::STATE_SOT_NO_BREAK`] suppresses
/// that, which is what resuming mid-string wants.
///
/// Cloning gives an independent cursor with identical state.
#[derive(Debug, Clone)]
pub struct Breaks<'a> {
    text: &'a str,
    cursor: usize,
    end: usize,
    state: u8,
}

impl<'a> Breaks<'a> {
    /// Creates a forward break iterator over `text[cursor..end]`.
    ///
    /// # Panics
    ///
    /// Panics if `cursor..end` is not a valid char-boundary range of `text`.
    pub fn new(text: &'a str, cursor: usize, end: usize, initial_state: u8) -> Self {
        assert!(
            cursor <= end && end <= text.len(),
            "invalid break range {cursor}..{end} for a string of length {}",
            text.len()
        );
        assert!(
            text.is_char_boundary(cursor) && text.is_char_boundary(end),
            "break range {cursor}..{end} splits a character"
        );
        Breaks {
            text,
            cursor,
            end,
            state: initial_state,
        }
    }

    /// Returns the next boundary, or `None` once the range is exhausted.
    pub fn next_break(&mut self) -> Option<usize> {
        if self.state == STATE_DONE {
            return None;
        }
        while self.cursor < self.end {
            let break_at = self.cursor;
            let c = self.text[self.cursor..].chars().next().unwrap();
            self.cursor += c.len_utf8();
            self.state = forward_move(self.state, GraphemeCategory::of(c));
            if self.state & STATE_NO_BREAK == 0 {
                return Some(break_at);
            }
        }
        let last = forward_move(self.state, GraphemeCategory::EoT);
        self.state = STATE_DONE;
        (last & STATE_NO_BREAK == 0).then_some(self.end)
    }

    /// Current position of the automaton. After a boundary was yielded this
    /// sits up to one character *past* it, because discovering a boundary
    /// requires consuming the first character of the following cluster.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current automaton state, suitable for resuming another iterator.
    pub fn state(&self) -> u8 {
        self.state
    }
}

/// Iterator over the grapheme cluster boundaries of `text[start..cursor]`,
/// walking right to left: the mirror image of [`Breaks`].
///
/// Unlike the forward automaton, the backward one cannot always decide a
/// boundary from the two adjacent characters: `RI, RI` needs the parity of
/// the Regional_Indicator run further left, and `ZWJ, Pictographic` needs
/// to know whether a Pictographic starts the joining sequence. In those
/// cases the transition table hands back a lookahead sentinel and the
/// iterator resolves it with a bounded scan before continuing.
#[derive(Debug, Clone)]
pub struct BackBreaks<'a> {
    text: &'a str,
    cursor: usize,
    start: usize,
    state: u8,
}

impl<'a> BackBreaks<'a> {
    /// Creates a backward break iterator over `text[start..cursor]`.
    ///
    /// # Panics
    ///
    /// Panics if `start..cursor` is not a valid char-boundary range of
    /// `text`.
    pub fn new(text: &'a str, cursor: usize, start: usize, initial_state: u8) -> Self {
        assert!(
            start <= cursor && cursor <= text.len(),
            "invalid break range {start}..{cursor} for a string of length {}",
            text.len()
        );
        assert!(
            text.is_char_boundary(start) && text.is_char_boundary(cursor),
            "break range {start}..{cursor} splits a character"
        );
        BackBreaks {
            text,
            cursor,
            start,
            state: initial_state,
        }
    }

    /// Returns the next boundary, strictly decreasing, or `None` once the
    /// range is exhausted.
    pub fn next_break(&mut self) -> Option<usize> {
        if self.state == STATE_DONE {
            return None;
        }
        while self.cursor > self.start {
            let break_at = self.cursor;
            let c = self.text[..self.cursor].chars().next_back().unwrap();
            self.cursor -= c.len_utf8();
            let mut state = backward_move(self.state, GraphemeCategory::of(c));
            if state >= STATE_LOOKAHEAD_MIN {
                state = resolve_lookahead(state, self.text, self.start, self.cursor);
            }
            self.state = state;
            if state & STATE_NO_BREAK == 0 {
                return Some(break_at);
            }
        }
        let last = backward_move(self.state, GraphemeCategory::EoT);
        self.state = STATE_DONE;
        (last & STATE_NO_BREAK == 0).then_some(self.start)
    }

    /// Current position of the automaton; after a boundary was yielded this
    /// sits up to one character before it.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current automaton state, suitable for resuming another iterator.
    pub fn state(&self) -> u8 {
        self.state
    }
}

fn resolve_lookahead(sentinel: u8, text: &str, start: usize, cursor: usize) -> u8 {
    match sentinel {
        STATE_REGIONAL_LOOKAHEAD => lookahead_regional(text, start, cursor),
        STATE_ZWJ_PICTOGRAPHIC_LOOKAHEAD => lookahead_zwj_pictographic(text, start, cursor),
        _ => unreachable!("lookahead sentinel {sentinel:#04x} outside the defined band"),
    }
}

/// Resolves `RI, RI` seen by the backward machine. `cursor` is the offset
/// of the earlier of the two Regional_Indicators; the parity of the run of
/// Regional_Indicators before it decides whether the two form a flag.
fn lookahead_regional(text: &str, start: usize, cursor: usize) -> u8 {
    let mut count = 0usize;
    for c in text[start..cursor].chars().rev() {
        if GraphemeCategory::of(c) != GraphemeCategory::RegionalIndicator {
            break;
        }
        count += 1;
    }
    if count % 2 == 0 {
        STATE_REGIONAL_EVEN | STATE_NO_BREAK
    } else {
        STATE_REGIONAL_ODD
    }
}

/// Resolves `ZWJ, Pictographic` seen by the backward machine. `cursor` is
/// the offset of the ZWJ; GB11 joins iff a Pictographic precedes it with
/// only Extend and ZWJ characters in between.
fn lookahead_zwj_pictographic(text: &str, start: usize, cursor: usize) -> u8 {
    for c in text[start..cursor].chars().rev() {
        match GraphemeCategory::of(c) {
            GraphemeCategory::Pictographic => return STATE_ZWJ_PICTOGRAPHIC | STATE_NO_BREAK,
            GraphemeCategory::Extend | GraphemeCategory::ZWJ => {}
            _ => break,
        }
    }
    STATE_EXTEND
}

/// Reports whether `index` is a grapheme cluster boundary of
/// `text[start..end]`.
///
/// The start and end of a non-empty range are always boundaries. Interior
/// positions are decided by feeding the two adjacent characters to the
/// backward automaton, so the query reads a small local window plus at
/// most one lookahead scan and never rescans from the start of the string.
/// An `index` inside a multi-byte character is never a boundary.
///
/// # Panics
///
/// Panics unless `start <= index <= end <= text.len()`.
pub fn is_grapheme_cluster_boundary(text: &str, start: usize, end: usize, index: usize) -> bool {
    assert!(
        start <= index && index <= end && end <= text.len(),
        "boundary query at {index} outside range {start}..{end}"
    );
    if !text.is_char_boundary(index) {
        return false;
    }
    if index == start || index == end {
        return start != end;
    }
    let after = text[index..].chars().next().unwrap();
    let before = text[..index].chars().next_back().unwrap();
    let state = backward_move(STATE_EOT_NO_BREAK, GraphemeCategory::of(after));
    let mut state = backward_move(state, GraphemeCategory::of(before));
    if state >= STATE_LOOKAHEAD_MIN {
        state = resolve_lookahead(state, text, start, index - before.len_utf8());
    }
    state & STATE_NO_BREAK == 0
}

/// Returns the first boundary of `text[start..end]` at or after `from`,
/// or `None` when the range is empty.
///
/// # Panics
///
/// Panics unless `start <= from <= end <= text.len()`.
pub fn next_break(text: &str, start: usize, end: usize, from: usize) -> Option<usize> {
    assert!(
        start <= from && from <= end && end <= text.len(),
        "break search from {from} outside range {start}..{end}"
    );
    if start == end {
        return None;
    }
    let mut i = from;
    while i < end && !text.is_char_boundary(i) {
        i += 1;
    }
    loop {
        if is_grapheme_cluster_boundary(text, start, end, i) {
            return Some(i);
        }
        i += text[i..].chars().next().unwrap().len_utf8();
    }
}

/// Returns the last boundary of `text[start..end]` at or before `from`,
/// or `None` when the range is empty: the mirror image of [`next_break`].
///
/// # Panics
///
/// Panics unless `start <= from <= end <= text.len()`.
pub fn previous_break(text: &str, start: usize, end: usize, from: usize) -> Option<usize> {
    assert!(
        start <= from && from <= end && end <= text.len(),
        "break search from {from} outside range {start}..{end}"
    );
    if start == end {
        return None;
    }
    let mut i = from;
    while i > start && !text.is_char_boundary(i) {
        i -= 1;
    }
    loop {
        if is_grapheme_cluster_boundary(text, start, end, i) {
            return Some(i);
        }
        i -= text[..i].chars().next_back().unwrap().len_utf8();
    }
}

/// Returns a lazy iterator over every grapheme cluster boundary of
/// `text[start..end]`, in increasing order.
///
/// Both `start` and `end` are included unless the range is empty, in which
/// case the iterator yields nothing at all.
///
/// # Panics
///
/// Panics if `start..end` is not a valid char-boundary range of `text`.
pub fn grapheme_cluster_boundaries(text: &str, start: usize, end: usize) -> Boundaries<'_> {
    Boundaries {
        breaks: Breaks::new(text, start, end, STATE_SOT),
    }
}

/// Lazy iterator over grapheme cluster boundaries, created by
/// [`grapheme_cluster_boundaries`].
#[derive(Debug, Clone)]
pub struct Boundaries<'a> {
    breaks: Breaks<'a>,
}

impl Iterator for Boundaries<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.breaks.next_break()
    }
}

impl core::iter::FusedIterator for Boundaries<'_> {}

#[cfg(test)]
mod tests;
