//! The forward and backward grapheme cluster break automata.
//!
//! A state is a single byte. The high nibble is the logical automaton state
//! and selects a row of the transition tables; the [`STATE_NO_BREAK`] bit is
//! set on a transition result iff the break rules forbid a boundary before
//! the character just consumed. Values at or above [`STATE_LOOKAHEAD_MIN`]
//! are not states at all but sentinels telling the backward machine that it
//! cannot decide locally and must run a lookahead scan first.
//!
//! The forward machine never produces a sentinel: walking left-to-right,
//! everything rules GB11 and GB12/GB13 need has already been seen and is
//! encoded in the state. Walking right-to-left the relevant context lies
//! further left, hence the sentinels and `crate::breaks`'s lookahead
//! routines.

use crate::properties::{CATEGORY_COUNT, GraphemeCategory};

/// Initial state at the start of text. The first transition reports a
/// boundary at the starting position of a non-empty range.
pub const STATE_SOT: u8 = 0x00;
/// The previous character was a control, CR not followed by LF, or LF;
/// every following character starts a new cluster.
pub const STATE_BREAK: u8 = 0x10;
/// Inside a potential CR LF pair: forward, the previous character was CR;
/// backward, the character just consumed was LF.
pub const STATE_CR: u8 = 0x20;
/// The adjacent character needs no special context tracking.
pub const STATE_OTHER: u8 = 0x30;
/// The previous character was a Prepend.
pub const STATE_PREPEND: u8 = 0x40;
/// Hangul: forward, the previous character was L; backward, the consumed
/// character was L, LV, or LVT (each joins only an L on its left).
pub const STATE_L: u8 = 0x50;
/// Hangul: forward, the previous character was V or LV; backward, the
/// consumed character was V.
pub const STATE_LV: u8 = 0x60;
/// Hangul: forward, the previous character was T or LVT; backward, the
/// consumed character was T.
pub const STATE_LVT: u8 = 0x70;
/// The previous character was Extended_Pictographic, possibly followed by
/// Extend characters (a GB11 prefix in progress).
pub const STATE_PICTOGRAPHIC: u8 = 0x80;
/// Forward: a GB11 prefix including its final ZWJ has been seen, so a
/// following Pictographic joins the cluster.
pub const STATE_PICTOGRAPHIC_ZWJ: u8 = 0x90;
/// Backward only: the consumed ZWJ completed a GB11 match (shares the
/// `0x90` row, which the forward table interprets as
/// [`STATE_PICTOGRAPHIC_ZWJ`]).
pub const STATE_ZWJ_PICTOGRAPHIC: u8 = 0x90;
/// Exactly one Regional_Indicator seen, pairing not yet resolved.
pub const STATE_REGIONAL_SINGLE: u8 = 0xA0;
/// Initial state that suppresses the boundary at the starting position,
/// used when resuming mid-string at an already-known boundary.
pub const STATE_SOT_NO_BREAK: u8 = 0xB0;
/// [`STATE_SOT_NO_BREAK`] under its backward-machine name.
pub const STATE_EOT_NO_BREAK: u8 = STATE_SOT_NO_BREAK;
/// Backward only: the consumed character was Extend or ZWJ, so nothing
/// non-control on its left breaks before it.
pub const STATE_EXTEND: u8 = 0xC0;
/// Backward only: the consumed Regional_Indicator is preceded by an even
/// number of Regional_Indicators and pairs with the one on its right.
pub const STATE_REGIONAL_EVEN: u8 = 0xD0;
/// Backward only: the consumed Regional_Indicator is preceded by an odd
/// number of Regional_Indicators and pairs with the one on its left.
pub const STATE_REGIONAL_ODD: u8 = 0xE0;

/// Flag bit set on a transition result iff there is no grapheme cluster
/// boundary before the character just consumed.
pub const STATE_NO_BREAK: u8 = 0x01;

/// Values at or above this are lookahead sentinels, not states.
pub const STATE_LOOKAHEAD_MIN: u8 = 0xF0;
/// The backward machine saw `RI, RI`; Regional_Indicator parity further
/// left decides the boundary.
pub const STATE_REGIONAL_LOOKAHEAD: u8 = 0xF0;
/// The backward machine saw `ZWJ, Pictographic`; context further left
/// decides whether GB11 applies.
pub const STATE_ZWJ_PICTOGRAPHIC_LOOKAHEAD: u8 = 0xF8;

/// Parking value for an exhausted break iterator. No table entry produces
/// it (no transition targets the SoT row), so it cannot be confused with a
/// live state.
pub(crate) const STATE_DONE: u8 = STATE_SOT | STATE_NO_BREAK;

/// Columns are in [`GraphemeCategory`] discriminant order:
/// Other, CR, LF, Control, Extend, ZWJ, RI, Prepend, SpacingMark,
/// L, V, T, LV, LVT, Pictographic, EoT.
#[rustfmt::skip]
const FORWARD: [[u8; CATEGORY_COUNT]; 12] = [
    // SoT
    [0x30, 0x20, 0x10, 0x10, 0x30, 0x30, 0xA0, 0x40, 0x30, 0x50, 0x60, 0x70, 0x60, 0x70, 0x80, 0x11],
    // Break
    [0x30, 0x20, 0x10, 0x10, 0x30, 0x30, 0xA0, 0x40, 0x30, 0x50, 0x60, 0x70, 0x60, 0x70, 0x80, 0x10],
    // CR
    [0x30, 0x20, 0x11, 0x10, 0x30, 0x30, 0xA0, 0x40, 0x30, 0x50, 0x60, 0x70, 0x60, 0x70, 0x80, 0x10],
    // Other
    [0x30, 0x20, 0x10, 0x10, 0x31, 0x31, 0xA0, 0x40, 0x31, 0x50, 0x60, 0x70, 0x60, 0x70, 0x80, 0x10],
    // Prepend
    [0x31, 0x20, 0x10, 0x10, 0x31, 0x31, 0xA1, 0x41, 0x31, 0x51, 0x61, 0x71, 0x61, 0x71, 0x81, 0x10],
    // L
    [0x30, 0x20, 0x10, 0x10, 0x31, 0x31, 0xA0, 0x40, 0x31, 0x51, 0x61, 0x70, 0x61, 0x71, 0x80, 0x10],
    // LV
    [0x30, 0x20, 0x10, 0x10, 0x31, 0x31, 0xA0, 0x40, 0x31, 0x50, 0x61, 0x71, 0x60, 0x70, 0x80, 0x10],
    // LVT
    [0x30, 0x20, 0x10, 0x10, 0x31, 0x31, 0xA0, 0x40, 0x31, 0x50, 0x60, 0x71, 0x60, 0x70, 0x80, 0x10],
    // Pictographic
    [0x30, 0x20, 0x10, 0x10, 0x81, 0x91, 0xA0, 0x40, 0x31, 0x50, 0x60, 0x70, 0x60, 0x70, 0x80, 0x10],
    // PictographicZWJ
    [0x30, 0x20, 0x10, 0x10, 0x81, 0x91, 0xA0, 0x40, 0x31, 0x50, 0x60, 0x70, 0x60, 0x70, 0x81, 0x10],
    // RegionalSingle
    [0x30, 0x20, 0x10, 0x10, 0x31, 0x31, 0x31, 0x40, 0x31, 0x50, 0x60, 0x70, 0x60, 0x70, 0x80, 0x10],
    // SoTNoBreak
    [0x31, 0x21, 0x11, 0x11, 0x31, 0x31, 0xA1, 0x41, 0x31, 0x51, 0x61, 0x71, 0x61, 0x71, 0x81, 0x11],
];

/// Transition table for walking right-to-left. Rows describe the most
/// recently consumed character (which sits to the *right* of the text still
/// to be scanned); columns are the category of the character on its left,
/// in the same order as [`FORWARD`].
#[rustfmt::skip]
const BACKWARD: [[u8; CATEGORY_COUNT]; 15] = [
    // EoT (fresh at the starting position)
    [0x30, 0x10, 0x20, 0x10, 0xC0, 0xC0, 0xA0, 0x40, 0x30, 0x50, 0x60, 0x70, 0x50, 0x50, 0x80, 0x11],
    // Break (consumed Control or CR)
    [0x30, 0x10, 0x20, 0x10, 0xC0, 0xC0, 0xA0, 0x40, 0x30, 0x50, 0x60, 0x70, 0x50, 0x50, 0x80, 0x10],
    // CR (consumed LF, awaiting CR on the left)
    [0x30, 0x11, 0x20, 0x10, 0xC0, 0xC0, 0xA0, 0x40, 0x30, 0x50, 0x60, 0x70, 0x50, 0x50, 0x80, 0x10],
    // Other
    [0x30, 0x10, 0x20, 0x10, 0xC0, 0xC0, 0xA0, 0x41, 0x30, 0x50, 0x60, 0x70, 0x50, 0x50, 0x80, 0x10],
    // Prepend
    [0x30, 0x10, 0x20, 0x10, 0xC0, 0xC0, 0xA0, 0x41, 0x30, 0x50, 0x60, 0x70, 0x50, 0x50, 0x80, 0x10],
    // L (consumed L, LV, or LVT)
    [0x30, 0x10, 0x20, 0x10, 0xC0, 0xC0, 0xA0, 0x41, 0x30, 0x51, 0x60, 0x70, 0x50, 0x50, 0x80, 0x10],
    // LV (consumed V)
    [0x30, 0x10, 0x20, 0x10, 0xC0, 0xC0, 0xA0, 0x41, 0x30, 0x51, 0x61, 0x70, 0x51, 0x50, 0x80, 0x10],
    // LVT (consumed T)
    [0x30, 0x10, 0x20, 0x10, 0xC0, 0xC0, 0xA0, 0x41, 0x30, 0x50, 0x61, 0x71, 0x51, 0x51, 0x80, 0x10],
    // Pictographic (consumed Pictographic; ZWJ on the left needs lookahead)
    [0x30, 0x10, 0x20, 0x10, 0xC0, 0xF8, 0xA0, 0x41, 0x30, 0x50, 0x60, 0x70, 0x50, 0x50, 0x80, 0x10],
    // ZWJPictographic (consumed the ZWJ of a confirmed GB11 sequence)
    [0x31, 0x10, 0x20, 0x10, 0xC1, 0xC1, 0xA1, 0x41, 0x31, 0x51, 0x61, 0x71, 0x51, 0x51, 0x81, 0x10],
    // RegionalSingle (consumed RI; RI on the left needs lookahead)
    [0x30, 0x10, 0x20, 0x10, 0xC0, 0xC0, 0xF0, 0x41, 0x30, 0x50, 0x60, 0x70, 0x50, 0x50, 0x80, 0x10],
    // EoTNoBreak
    [0x31, 0x11, 0x21, 0x11, 0xC1, 0xC1, 0xA1, 0x41, 0x31, 0x51, 0x61, 0x71, 0x51, 0x51, 0x81, 0x11],
    // Extend (consumed Extend or ZWJ)
    [0x31, 0x10, 0x20, 0x10, 0xC1, 0xC1, 0xA1, 0x41, 0x31, 0x51, 0x61, 0x71, 0x51, 0x51, 0x81, 0x10],
    // RegionalEven
    [0x30, 0x10, 0x20, 0x10, 0xC0, 0xC0, 0xE0, 0x41, 0x30, 0x50, 0x60, 0x70, 0x50, 0x50, 0x80, 0x10],
    // RegionalOdd
    [0x30, 0x10, 0x20, 0x10, 0xC0, 0xC0, 0xD1, 0x41, 0x30, 0x50, 0x60, 0x70, 0x50, 0x50, 0x80, 0x10],
];

/// Advances the forward automaton over one character (or `EoT`), returning
/// the next state. The result's [`STATE_NO_BREAK`] bit is clear iff UAX#29
/// places a boundary before the consumed character.
#[inline]
pub fn forward_move(state: u8, category: GraphemeCategory) -> u8 {
    debug_assert!(state < STATE_LOOKAHEAD_MIN);
    FORWARD[(state >> 4) as usize][category as usize]
}

/// Advances the backward automaton over one character (or `EoT`). The
/// result is either a state like [`forward_move`]'s, with the bit deciding
/// the boundary before the *previously* consumed character, or a sentinel
/// `>=` [`STATE_LOOKAHEAD_MIN`] that the caller must resolve with one of
/// the lookahead routines in `crate::breaks`.
#[inline]
pub fn backward_move(state: u8, category: GraphemeCategory) -> u8 {
    debug_assert!(state < STATE_LOOKAHEAD_MIN);
    BACKWARD[(state >> 4) as usize][category as usize]
}

#[cfg(test)]
mod tests;
