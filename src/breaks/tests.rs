use super::*;
use crate::state::{STATE_SOT, STATE_SOT_NO_BREAK};

use pretty_assertions::assert_eq;

/// Strings exercising every rule group: combining marks, CRLF, controls,
/// Hangul jamo and syllables, flags (even and odd runs), ZWJ emoji
/// sequences, prepend, and spacing marks.
const SAMPLES: &[&str] = &[
    "",
    "a",
    "ab",
    "Hello!",
    "a\u{0308}b",
    "a\u{0300}\u{0301}b",
    "\r\n",
    "\r\n\r\na",
    "a\t\r\nb",
    "\u{0600}1",
    "\u{0600}\u{0600}ab",
    "\u{0903}x",
    "\u{0915}\u{094D}\u{0924}",
    "\u{1100}\u{1161}\u{11A8}",
    "\u{1100}\u{1100}\u{AC00}\u{11A8}",
    "\u{AC01}x",
    "x\u{200D}y",
    "\u{200D}",
    "\u{1F1E9}",
    "\u{1F1E9}\u{1F1EA}",
    "\u{1F1E9}\u{1F1EA}\u{1F1EB}",
    "\u{1F1E9}\u{1F1EA}\u{1F1EB}\u{1F1F7}",
    "a\u{1F1E9}\u{1F1EA}\u{1F1EB}b",
    "\u{1F9D1}\u{200D}\u{1F33E}",
    "\u{1F469}\u{200D}\u{1F3FD}\u{200D}\u{1F91D}\u{200D}\u{1F468}\u{1F3FB}",
    "\u{1F6D1}\u{0308}\u{200D}\u{1F6D1}",
    "\u{1F476}\u{1F3FF}\u{1F476}",
];

fn forward_boundaries(s: &str) -> Vec<usize> {
    grapheme_cluster_boundaries(s, 0, s.len()).collect()
}

fn backward_boundaries(s: &str) -> Vec<usize> {
    let mut breaks = BackBreaks::new(s, s.len(), 0, STATE_SOT);
    let mut out = Vec::new();
    while let Some(b) = breaks.next_break() {
        out.push(b);
    }
    out.reverse();
    out
}

#[test]
fn boundaries_are_strictly_increasing() {
    for s in SAMPLES {
        let bounds = forward_boundaries(s);
        for pair in bounds.windows(2) {
            assert!(pair[0] < pair[1], "{s:?}: {bounds:?}");
        }
        if !s.is_empty() {
            assert_eq!(bounds.first(), Some(&0), "{s:?}");
            assert_eq!(bounds.last(), Some(&s.len()), "{s:?}");
        } else {
            assert!(bounds.is_empty());
        }
    }
}

#[test]
fn forward_and_backward_agree() {
    for s in SAMPLES {
        assert_eq!(
            forward_boundaries(s),
            backward_boundaries(s),
            "direction mismatch for {s:?}"
        );
    }
}

#[test]
fn predicate_matches_boundary_set() {
    for s in SAMPLES {
        let bounds = forward_boundaries(s);
        for i in 0..=s.len() {
            assert_eq!(
                bounds.contains(&i),
                is_grapheme_cluster_boundary(s, 0, s.len(), i),
                "{s:?} at {i}"
            );
        }
    }
}

#[test]
fn no_boundary_inside_a_character() {
    for s in SAMPLES {
        for b in forward_boundaries(s) {
            assert!(s.is_char_boundary(b), "{s:?} at {b}");
        }
    }
}

#[test]
fn resumes_from_any_boundary() {
    // Starting a fresh forward iterator at a known boundary with the
    // suppressed initial state must reproduce the rest of the stream.
    for s in SAMPLES {
        let bounds = forward_boundaries(s);
        for (k, &b) in bounds.iter().enumerate() {
            let mut breaks = Breaks::new(s, b, s.len(), STATE_SOT_NO_BREAK);
            let mut rest = Vec::new();
            while let Some(next) = breaks.next_break() {
                rest.push(next);
            }
            assert_eq!(rest, bounds[k + 1..], "{s:?} resumed at {b}");
        }
    }
}

#[test]
fn cloned_iterator_is_independent() {
    let s = "\u{1F1E9}\u{1F1EA}\u{1F1EB}\u{1F1F7}x";
    let mut a = Breaks::new(s, 0, s.len(), STATE_SOT);
    assert_eq!(a.next_break(), Some(0));
    let mut b = a.clone();
    assert_eq!(a.next_break(), Some(8));
    assert_eq!(b.next_break(), Some(8));
    assert_eq!(a.next_break(), Some(16));
    assert_eq!(b.next_break(), Some(16));
    assert_eq!(b.next_break(), Some(17));
    assert_eq!(b.next_break(), None);
}

#[test]
fn subrange_boundaries() {
    let s = "abc";
    assert_eq!(
        grapheme_cluster_boundaries(s, 1, 2).collect::<Vec<_>>(),
        [1, 2]
    );
    assert_eq!(
        grapheme_cluster_boundaries(s, 2, 2).collect::<Vec<_>>(),
        Vec::<usize>::new()
    );
    // A range edge inside a cluster is still reported (GB1/GB2 are about
    // the queried range, not the whole string).
    let t = "a\u{0308}b";
    assert_eq!(
        grapheme_cluster_boundaries(t, 1, t.len()).collect::<Vec<_>>(),
        [1, 3, 4]
    );
}

#[test]
fn next_and_previous_break() {
    let s = "a\u{0308}b";
    assert_eq!(next_break(s, 0, s.len(), 0), Some(0));
    assert_eq!(next_break(s, 0, s.len(), 1), Some(3));
    assert_eq!(next_break(s, 0, s.len(), 3), Some(3));
    assert_eq!(next_break(s, 0, s.len(), 4), Some(4));
    assert_eq!(previous_break(s, 0, s.len(), 1), Some(0));
    assert_eq!(previous_break(s, 0, s.len(), 3), Some(3));
    assert_eq!(previous_break(s, 0, s.len(), 4), Some(4));
    assert_eq!(next_break("", 0, 0, 0), None);
    assert_eq!(previous_break("", 0, 0, 0), None);

    let flags = "\u{1F1E9}\u{1F1EA}\u{1F1EB}\u{1F1F7}";
    assert_eq!(next_break(flags, 0, flags.len(), 4), Some(8));
    assert_eq!(previous_break(flags, 0, flags.len(), 4), Some(0));
    assert_eq!(next_break(flags, 0, flags.len(), 12), Some(16));
    assert_eq!(previous_break(flags, 0, flags.len(), 12), Some(8));
}

#[test]
#[should_panic(expected = "outside range")]
fn boundary_query_out_of_range() {
    is_grapheme_cluster_boundary("abc", 0, 2, 3);
}

#[test]
#[should_panic(expected = "invalid break range")]
fn breaks_range_out_of_bounds() {
    Breaks::new("abc", 2, 5, STATE_SOT);
}
