use super::*;
use crate::properties::GraphemeCategory::{self, *};

use pretty_assertions::assert_eq;

/// Runs the forward machine over a category sequence, returning the
/// boundary decision for every position `0..=len` (position `i` is before
/// `cats[i]`; position `len` is the end of text).
fn forward_run(cats: &[GraphemeCategory]) -> Vec<bool> {
    let mut state = STATE_SOT;
    let mut out = Vec::with_capacity(cats.len() + 1);
    for &c in cats {
        state = forward_move(state, c);
        out.push(state & STATE_NO_BREAK == 0);
    }
    let last = forward_move(state, EoT);
    out.push(last & STATE_NO_BREAK == 0);
    out
}

/// The same decisions computed by the backward machine, with the two
/// lookahead scans reproduced at the category level.
fn backward_run(cats: &[GraphemeCategory]) -> Vec<bool> {
    let mut state = STATE_SOT;
    let mut out = vec![false; cats.len() + 1];
    for i in (0..cats.len()).rev() {
        let mut next = backward_move(state, cats[i]);
        if next == STATE_REGIONAL_LOOKAHEAD {
            let count = cats[..i]
                .iter()
                .rev()
                .take_while(|&&c| c == RegionalIndicator)
                .count();
            next = if count % 2 == 0 {
                STATE_REGIONAL_EVEN | STATE_NO_BREAK
            } else {
                STATE_REGIONAL_ODD
            };
        } else if next == STATE_ZWJ_PICTOGRAPHIC_LOOKAHEAD {
            next = STATE_EXTEND;
            for &c in cats[..i].iter().rev() {
                match c {
                    Pictographic => {
                        next = STATE_ZWJ_PICTOGRAPHIC | STATE_NO_BREAK;
                        break;
                    }
                    Extend | ZWJ => {}
                    _ => break,
                }
            }
        }
        out[i + 1] = next & STATE_NO_BREAK == 0;
        state = next;
    }
    let last = backward_move(state, EoT);
    out[0] = last & STATE_NO_BREAK == 0;
    out
}

#[test]
fn crlf() {
    assert_eq!(forward_run(&[CR, LF]), [true, false, true]);
    assert_eq!(forward_run(&[LF, CR]), [true, true, true]);
    assert_eq!(forward_run(&[CR, LF, Other]), [true, false, true, true]);
    assert_eq!(forward_run(&[Other, CR, Extend]), [true, true, true, true]);
}

#[test]
fn controls() {
    assert_eq!(forward_run(&[Other, Control, Other]), [true, true, true, true]);
    assert_eq!(forward_run(&[Control, Extend]), [true, true, true]);
    assert_eq!(forward_run(&[Prepend, Control]), [true, true, true]);
}

#[test]
fn hangul() {
    assert_eq!(forward_run(&[L, V, T]), [true, false, false, true]);
    assert_eq!(forward_run(&[L, L, LV, T]), [true, false, false, false, true]);
    assert_eq!(forward_run(&[LV, V, T]), [true, false, false, true]);
    assert_eq!(forward_run(&[LVT, T, T]), [true, false, false, true]);
    assert_eq!(forward_run(&[V, LVT]), [true, true, true]);
    assert_eq!(forward_run(&[T, L]), [true, true, true]);
}

#[test]
fn extend_and_marks() {
    assert_eq!(
        forward_run(&[Other, Extend, Extend, Other]),
        [true, false, false, true, true]
    );
    assert_eq!(forward_run(&[Other, SpacingMark]), [true, false, true]);
    assert_eq!(forward_run(&[SpacingMark]), [true, true]);
    assert_eq!(forward_run(&[Prepend, Other]), [true, false, true]);
    assert_eq!(
        forward_run(&[Prepend, Prepend, Other]),
        [true, false, false, true]
    );
}

#[test]
fn emoji_sequences() {
    assert_eq!(forward_run(&[Pictographic, ZWJ, Pictographic]), [true, false, false, true]);
    assert_eq!(
        forward_run(&[Pictographic, Extend, ZWJ, Pictographic]),
        [true, false, false, false, true]
    );
    assert_eq!(
        forward_run(&[Pictographic, Extend, Pictographic]),
        [true, false, true, true]
    );
    assert_eq!(
        forward_run(&[Pictographic, ZWJ, Other]),
        [true, false, true, true]
    );
    assert_eq!(
        forward_run(&[Other, ZWJ, Pictographic]),
        [true, false, true, true]
    );
    assert_eq!(
        forward_run(&[Pictographic, ZWJ, ZWJ, Pictographic]),
        [true, false, false, false, true]
    );
}

#[test]
fn emoji_flags() {
    assert_eq!(forward_run(&[RegionalIndicator; 1]), [true, true]);
    assert_eq!(forward_run(&[RegionalIndicator; 2]), [true, false, true]);
    assert_eq!(forward_run(&[RegionalIndicator; 3]), [true, false, true, true]);
    assert_eq!(
        forward_run(&[RegionalIndicator; 4]),
        [true, false, true, false, true]
    );
    assert_eq!(
        forward_run(&[
            Other,
            RegionalIndicator,
            RegionalIndicator,
            Extend,
            RegionalIndicator,
        ]),
        [true, true, false, false, true, true]
    );
}

#[test]
fn backward_agrees_with_forward() {
    let sequences: &[&[GraphemeCategory]] = &[
        &[],
        &[Other],
        &[CR, LF, Other],
        &[LF, CR],
        &[Other, Control, Extend],
        &[L, V, T, T],
        &[L, L, LV, T, LVT, T],
        &[Other, Extend, Extend, SpacingMark, Other],
        &[Prepend, Prepend, Other, Extend],
        &[Prepend, CR, LF],
        &[Pictographic, ZWJ, Pictographic, ZWJ, Pictographic],
        &[Pictographic, Extend, Extend, ZWJ, Pictographic],
        &[Pictographic, ZWJ, ZWJ, Pictographic],
        &[Other, ZWJ, Pictographic, Extend],
        &[RegionalIndicator; 5],
        &[RegionalIndicator; 6],
        &[Other, RegionalIndicator, RegionalIndicator, RegionalIndicator],
        &[
            RegionalIndicator,
            RegionalIndicator,
            Extend,
            RegionalIndicator,
            RegionalIndicator,
        ],
        &[Prepend, RegionalIndicator, RegionalIndicator],
    ];
    for cats in sequences {
        assert_eq!(
            forward_run(cats),
            backward_run(cats),
            "direction mismatch for {cats:?}"
        );
    }
}

#[test]
fn table_targets_are_valid() {
    // Every transition result must be a real state row (never a lookahead
    // sentinel in the forward table, never the SoT row in either) so that
    // indexing with `state >> 4` stays in bounds.
    for cat in [
        Other, CR, LF, Control, Extend, ZWJ, RegionalIndicator, Prepend, SpacingMark, L, V, T, LV,
        LVT, Pictographic, EoT,
    ] {
        for row in 0..12u8 {
            let next = forward_move(row << 4, cat);
            assert!(next < STATE_LOOKAHEAD_MIN, "forward {row:#x} x {cat:?}");
            assert!(next & 0xF0 != STATE_SOT, "forward {row:#x} x {cat:?}");
        }
        for row in 0..15u8 {
            let next = backward_move(row << 4, cat);
            if next < STATE_LOOKAHEAD_MIN {
                assert!(next & 0xF0 != STATE_SOT, "backward {row:#x} x {cat:?}");
            } else {
                assert!(
                    next == STATE_REGIONAL_LOOKAHEAD || next == STATE_ZWJ_PICTOGRAPHIC_LOOKAHEAD,
                    "backward {row:#x} x {cat:?} yields stray sentinel {next:#x}"
                );
            }
        }
    }
}
