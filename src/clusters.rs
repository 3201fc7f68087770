//! The user-facing grapheme cluster view of a string.
//!
//! [`GraphemeClusters`] treats a string as an immutable sequence of
//! grapheme cluster substrings. Every "modifying" operation returns a new
//! view; slicing operations borrow from the original string, operations
//! that build new text return an owning view.

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;
use core::ops::Add;

use thiserror::Error;

use crate::breaks::{BackBreaks, Breaks, is_grapheme_cluster_boundary};
use crate::cursor::ClusterCursor;
use crate::state::{STATE_EOT_NO_BREAK, STATE_SOT_NO_BREAK};

/// An immutable sequence of the grapheme clusters of a string.
///
/// All indices taken and returned by this type are byte offsets into the
/// underlying string (available as [`Self::as_str`]), *not* cluster
/// counts, except where an operation is explicitly about cluster counts
/// ([`Self::len`], [`Self::skip`], [`Self::take`] and friends).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GraphemeClusters<'a> {
    string: Cow<'a, str>,
}

/// Error returned by [`GraphemeClusters::single`] when the string does not
/// consist of exactly one grapheme cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SingleError {
    /// The string was empty.
    #[error("no grapheme cluster in an empty string")]
    Empty,
    /// The string held two or more clusters.
    #[error("string contains more than one grapheme cluster")]
    TooMany,
}

impl<'a> GraphemeClusters<'a> {
    /// Creates a view of the grapheme clusters of `s`.
    pub fn new(s: &'a str) -> Self {
        GraphemeClusters {
            string: Cow::Borrowed(s),
        }
    }

    /// The shared empty view.
    pub fn empty() -> GraphemeClusters<'static> {
        GraphemeClusters {
            string: Cow::Borrowed(""),
        }
    }

    /// The underlying string.
    pub fn as_str(&self) -> &str {
        &self.string
    }

    /// Consumes the view, returning the underlying string.
    pub fn into_string(self) -> String {
        self.string.into_owned()
    }

    /// Iterates over the cluster substrings, front to back (or back to
    /// front via [`DoubleEndedIterator`]).
    pub fn iter(&self) -> Clusters<'_> {
        Clusters::new(self.as_str())
    }

    /// Returns a bidirectional, resumable iterator over the clusters.
    pub fn cursor(&self) -> ClusterCursor<'_> {
        ClusterCursor::new(self.as_str())
    }

    /// Number of grapheme clusters. Counted by a forward walk over the
    /// whole string, so this is O(n), not O(1).
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether the string is empty.
    pub fn is_empty(&self) -> bool {
        self.string.is_empty()
    }

    /// The first cluster, or `None` for an empty string.
    pub fn first(&self) -> Option<&str> {
        self.iter().next()
    }

    /// The last cluster, or `None` for an empty string.
    pub fn last(&self) -> Option<&str> {
        self.iter().next_back()
    }

    /// The single cluster making up the whole string, or an error if the
    /// string holds zero or more than one cluster.
    pub fn single(&self) -> Result<&str, SingleError> {
        let mut iter = self.iter();
        let first = iter.next().ok_or(SingleError::Empty)?;
        match iter.next() {
            None => Ok(first),
            Some(_) => Err(SingleError::TooMany),
        }
    }

    /// Whether `cluster` occurs in the string as exactly one grapheme
    /// cluster, aligned on cluster boundaries.
    ///
    /// An occurrence that spans more than one cluster, or one that starts
    /// or ends inside a cluster, does not count; see [`Self::contains_all`]
    /// for the multi-cluster containment query.
    pub fn contains(&self, cluster: &str) -> bool {
        if cluster.is_empty() {
            return false;
        }
        let mut from = 0;
        while let Some(i) = self.string[from..].find(cluster) {
            let found = from + i;
            let end = found + cluster.len();
            if self.is_boundary(found) && self.is_boundary(end) && self.cluster_end_at(found) == end
            {
                return true;
            }
            from = bump(&self.string, found);
        }
        false
    }

    /// Whether the cluster sequence `other` occurs in this one at cluster
    /// boundaries.
    pub fn contains_all(&self, other: &GraphemeClusters<'_>) -> bool {
        self.index_of(other, 0).is_some()
    }

    /// Whether `other`'s string occurs at `start_index` and the end of
    /// that occurrence falls on a cluster boundary.
    ///
    /// # Panics
    ///
    /// Panics if `start_index` is out of bounds or splits a character.
    pub fn starts_with(&self, other: &GraphemeClusters<'_>, start_index: usize) -> bool {
        self.check_index(start_index);
        let needle = other.as_str();
        self.string[start_index..].starts_with(needle)
            && self.is_boundary(start_index + needle.len())
    }

    /// Whether `other`'s string ends at `end_index` and the start of that
    /// occurrence falls on a cluster boundary.
    ///
    /// # Panics
    ///
    /// Panics if `end_index` is out of bounds or splits a character.
    pub fn ends_with(&self, other: &GraphemeClusters<'_>, end_index: usize) -> bool {
        self.check_index(end_index);
        let needle = other.as_str();
        if needle.len() > end_index {
            return false;
        }
        self.string[..end_index].ends_with(needle) && self.is_boundary(end_index - needle.len())
    }

    /// Byte offset of the first occurrence of `other` at or after
    /// `start_index` whose start and end both fall on cluster boundaries,
    /// or `None`.
    ///
    /// The search alternates a plain code-unit substring search with the
    /// O(1) boundary predicate, so rejected candidates never cause a
    /// rescan from the start of the string. An empty `other` matches at
    /// the first cluster boundary at or after `start_index`.
    ///
    /// # Panics
    ///
    /// Panics if `start_index` is out of bounds or splits a character.
    pub fn index_of(&self, other: &GraphemeClusters<'_>, start_index: usize) -> Option<usize> {
        self.check_index(start_index);
        let needle = other.as_str();
        if needle.is_empty() {
            return crate::breaks::next_break(&self.string, 0, self.string.len(), start_index);
        }
        self.find_aligned(needle, start_index)
    }

    /// Byte offset of the last boundary-aligned occurrence of `other`
    /// starting at or before `start_index`, or `None`: the backward twin
    /// of [`Self::index_of`].
    ///
    /// # Panics
    ///
    /// Panics if `start_index` is out of bounds or splits a character.
    pub fn last_index_of(&self, other: &GraphemeClusters<'_>, start_index: usize) -> Option<usize> {
        self.check_index(start_index);
        let needle = other.as_str();
        if needle.is_empty() {
            return crate::breaks::previous_break(&self.string, 0, self.string.len(), start_index);
        }
        let mut region_end = (start_index + needle.len()).min(self.string.len());
        while !self.string.is_char_boundary(region_end) {
            region_end -= 1;
        }
        loop {
            let i = self.string[..region_end].rfind(needle)?;
            let end = i + needle.len();
            if self.is_boundary(i) && self.is_boundary(end) {
                return Some(i);
            }
            // Exclude this candidate: matches can only end on character
            // boundaries, so the next one ends at or before this point.
            let mut re = end - 1;
            while !self.string.is_char_boundary(re) {
                re -= 1;
            }
            region_end = re;
        }
    }

    /// Like [`Self::index_of`], but returns the offset just past the match.
    pub fn index_after(&self, other: &GraphemeClusters<'_>, start_index: usize) -> Option<usize> {
        self.index_of(other, start_index)
            .map(|i| i + other.as_str().len())
    }

    /// Like [`Self::last_index_of`], but returns the offset just past the
    /// match.
    pub fn last_index_after(
        &self,
        other: &GraphemeClusters<'_>,
        start_index: usize,
    ) -> Option<usize> {
        self.last_index_of(other, start_index)
            .map(|i| i + other.as_str().len())
    }

    /// View without the first `count` clusters. Skipping more clusters
    /// than there are yields the empty view.
    pub fn skip(&self, count: usize) -> GraphemeClusters<'_> {
        let start = self.boundary_after_clusters(0, count);
        self.slice(start, self.string.len())
    }

    /// View of the first `count` clusters, or the whole string if it has
    /// fewer.
    pub fn take(&self, count: usize) -> GraphemeClusters<'_> {
        let end = self.boundary_after_clusters(0, count);
        self.slice(0, end)
    }

    /// View of clusters `start..end`, both counted from the front.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub fn get_range(&self, start: usize, end: usize) -> GraphemeClusters<'_> {
        assert!(start <= end, "cluster range {start}..{end} is inverted");
        let lo = self.boundary_after_clusters(0, start);
        let hi = self.boundary_after_clusters(lo, end - start);
        self.slice(lo, hi)
    }

    /// View without the last `count` clusters.
    pub fn skip_last(&self, count: usize) -> GraphemeClusters<'_> {
        let end = self.boundary_before_clusters(count);
        self.slice(0, end)
    }

    /// View of the last `count` clusters, or the whole string if it has
    /// fewer.
    pub fn take_last(&self, count: usize) -> GraphemeClusters<'_> {
        let start = self.boundary_before_clusters(count);
        self.slice(start, self.string.len())
    }

    /// View without the leading clusters that satisfy `pred`.
    pub fn skip_while(&self, mut pred: impl FnMut(&str) -> bool) -> GraphemeClusters<'_> {
        let mut start = 0;
        for cluster in self.iter() {
            if !pred(cluster) {
                break;
            }
            start += cluster.len();
        }
        self.slice(start, self.string.len())
    }

    /// View of the leading clusters that satisfy `pred`.
    pub fn take_while(&self, mut pred: impl FnMut(&str) -> bool) -> GraphemeClusters<'_> {
        let mut end = 0;
        for cluster in self.iter() {
            if !pred(cluster) {
                break;
            }
            end += cluster.len();
        }
        self.slice(0, end)
    }

    /// View without the trailing clusters that satisfy `pred`.
    pub fn skip_last_while(&self, mut pred: impl FnMut(&str) -> bool) -> GraphemeClusters<'_> {
        let mut end = self.string.len();
        for cluster in self.iter().rev() {
            if !pred(cluster) {
                break;
            }
            end -= cluster.len();
        }
        self.slice(0, end)
    }

    /// View of the trailing clusters that satisfy `pred`.
    pub fn take_last_while(&self, mut pred: impl FnMut(&str) -> bool) -> GraphemeClusters<'_> {
        let mut start = self.string.len();
        for cluster in self.iter().rev() {
            if !pred(cluster) {
                break;
            }
            start -= cluster.len();
        }
        self.slice(start, self.string.len())
    }

    /// Eagerly filters the clusters, returning a view over the
    /// concatenation of those that satisfy `pred`.
    pub fn filter(&self, mut pred: impl FnMut(&str) -> bool) -> GraphemeClusters<'static> {
        let mut out = String::new();
        for cluster in self.iter() {
            if pred(cluster) {
                out.push_str(cluster);
            }
        }
        GraphemeClusters {
            string: Cow::Owned(out),
        }
    }

    /// View over the string with `other`'s string inserted at byte offset
    /// `index`. The insertion point need not be a cluster boundary and
    /// clusters may merge or split around it.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds or splits a character.
    pub fn insert_at(&self, index: usize, other: &GraphemeClusters<'_>) -> GraphemeClusters<'static> {
        self.check_index(index);
        let mut out =
            String::with_capacity(self.string.len() + other.string.len());
        out.push_str(&self.string[..index]);
        out.push_str(&other.string);
        out.push_str(&self.string[index..]);
        GraphemeClusters {
            string: Cow::Owned(out),
        }
    }

    /// View over the string with the bytes `start..end` replaced by
    /// `other`'s string. A raw splice: neither edge is required to be a
    /// cluster boundary.
    ///
    /// # Panics
    ///
    /// Panics if `start..end` is not a valid char-boundary range.
    pub fn replace_substring(
        &self,
        start: usize,
        end: usize,
        other: &GraphemeClusters<'_>,
    ) -> GraphemeClusters<'static> {
        self.check_range(start, end);
        let mut out = String::with_capacity(
            self.string.len() - (end - start) + other.string.len(),
        );
        out.push_str(&self.string[..start]);
        out.push_str(&other.string);
        out.push_str(&self.string[end..]);
        GraphemeClusters {
            string: Cow::Owned(out),
        }
    }

    /// View over the bytes `start..end` of the string.
    ///
    /// # Panics
    ///
    /// Panics if `start..end` is not a valid char-boundary range.
    pub fn substring(&self, start: usize, end: usize) -> GraphemeClusters<'_> {
        self.check_range(start, end);
        self.slice(start, end)
    }

    /// Replaces every boundary-aligned, non-overlapping occurrence of
    /// `source` at or after `start_index` with `replacement`.
    ///
    /// When `source` is empty this has explode-replace semantics:
    /// `replacement` is inserted between every pair of adjacent clusters
    /// of `string[start_index..]` *and* at both outer ends of that range.
    /// Callers expecting "insert only between clusters" should slice off
    /// the ends themselves.
    ///
    /// # Panics
    ///
    /// Panics if `start_index` is out of bounds or splits a character.
    pub fn replace_all(
        &self,
        source: &GraphemeClusters<'_>,
        replacement: &GraphemeClusters<'_>,
        start_index: usize,
    ) -> GraphemeClusters<'static> {
        self.check_index(start_index);
        let src = source.as_str();
        let repl = replacement.as_str();
        if src.is_empty() {
            return self.explode_replace(start_index, repl);
        }
        let mut out = String::new();
        let mut prev = 0;
        let mut from = start_index;
        while let Some(found) = self.find_aligned(src, from) {
            out.push_str(&self.string[prev..found]);
            out.push_str(repl);
            prev = found + src.len();
            from = prev;
        }
        out.push_str(&self.string[prev..]);
        GraphemeClusters {
            string: Cow::Owned(out),
        }
    }

    /// Replaces the first boundary-aligned occurrence of `source` at or
    /// after `start_index` with `replacement`. An empty `source` inserts
    /// `replacement` at the first cluster boundary at or after
    /// `start_index`.
    ///
    /// # Panics
    ///
    /// Panics if `start_index` is out of bounds or splits a character.
    pub fn replace_first(
        &self,
        source: &GraphemeClusters<'_>,
        replacement: &GraphemeClusters<'_>,
        start_index: usize,
    ) -> GraphemeClusters<'static> {
        self.check_index(start_index);
        let src = source.as_str();
        if src.is_empty() {
            let at = crate::breaks::next_break(&self.string, 0, self.string.len(), start_index)
                .unwrap_or(start_index);
            return self.replace_substring(at, at, replacement);
        }
        match self.find_aligned(src, start_index) {
            Some(found) => self.replace_substring(found, found + src.len(), replacement),
            None => GraphemeClusters {
                string: Cow::Owned(String::from(&*self.string)),
            },
        }
    }

    /// View over the lowercased string. Case mapping can change the
    /// cluster count.
    pub fn to_lowercase(&self) -> GraphemeClusters<'static> {
        GraphemeClusters {
            string: Cow::Owned(self.string.to_lowercase()),
        }
    }

    /// View over the uppercased string.
    pub fn to_uppercase(&self) -> GraphemeClusters<'static> {
        GraphemeClusters {
            string: Cow::Owned(self.string.to_uppercase()),
        }
    }

    fn is_boundary(&self, index: usize) -> bool {
        is_grapheme_cluster_boundary(&self.string, 0, self.string.len(), index)
    }

    /// End of the cluster starting at the boundary `start`.
    fn cluster_end_at(&self, start: usize) -> usize {
        let mut breaks = Breaks::new(&self.string, start, self.string.len(), STATE_SOT_NO_BREAK);
        breaks.next_break().unwrap_or(start)
    }

    /// Boundary `count` clusters forward of the boundary `from`, clamped
    /// to the end of the string.
    fn boundary_after_clusters(&self, from: usize, count: usize) -> usize {
        let mut breaks = Breaks::new(&self.string, from, self.string.len(), STATE_SOT_NO_BREAK);
        let mut pos = from;
        for _ in 0..count {
            match breaks.next_break() {
                Some(b) => pos = b,
                None => return self.string.len(),
            }
        }
        pos
    }

    /// Boundary `count` clusters back from the end, clamped to the start.
    fn boundary_before_clusters(&self, count: usize) -> usize {
        let mut breaks =
            BackBreaks::new(&self.string, self.string.len(), 0, STATE_EOT_NO_BREAK);
        let mut pos = self.string.len();
        for _ in 0..count {
            match breaks.next_break() {
                Some(b) => pos = b,
                None => return 0,
            }
        }
        pos
    }

    fn find_aligned(&self, needle: &str, from: usize) -> Option<usize> {
        let mut from = from;
        loop {
            let i = from + self.string[from..].find(needle)?;
            let end = i + needle.len();
            if self.is_boundary(i) && self.is_boundary(end) {
                return Some(i);
            }
            from = bump(&self.string, i);
        }
    }

    fn explode_replace(&self, start_index: usize, replacement: &str) -> GraphemeClusters<'static> {
        let mut out = String::new();
        out.push_str(&self.string[..start_index]);
        out.push_str(replacement);
        for cluster in Clusters::new(&self.string[start_index..]) {
            out.push_str(cluster);
            out.push_str(replacement);
        }
        GraphemeClusters {
            string: Cow::Owned(out),
        }
    }

    fn slice(&self, start: usize, end: usize) -> GraphemeClusters<'_> {
        GraphemeClusters {
            string: Cow::Borrowed(&self.string[start..end]),
        }
    }

    fn check_index(&self, index: usize) {
        assert!(
            index <= self.string.len(),
            "index {index} out of bounds for a string of length {}",
            self.string.len()
        );
        assert!(
            self.string.is_char_boundary(index),
            "index {index} splits a character"
        );
    }

    fn check_range(&self, start: usize, end: usize) {
        assert!(start <= end, "range {start}..{end} is inverted");
        self.check_index(start);
        self.check_index(end);
    }
}

impl<'a> From<&'a str> for GraphemeClusters<'a> {
    fn from(s: &'a str) -> Self {
        GraphemeClusters::new(s)
    }
}

impl From<String> for GraphemeClusters<'static> {
    fn from(s: String) -> Self {
        GraphemeClusters {
            string: Cow::Owned(s),
        }
    }
}

impl Default for GraphemeClusters<'_> {
    fn default() -> Self {
        GraphemeClusters {
            string: Cow::Borrowed(""),
        }
    }
}

impl fmt::Display for GraphemeClusters<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string)
    }
}

impl Add<&GraphemeClusters<'_>> for &GraphemeClusters<'_> {
    type Output = GraphemeClusters<'static>;

    /// View over the concatenation of the two strings. Clusters may join
    /// across the seam.
    fn add(self, rhs: &GraphemeClusters<'_>) -> GraphemeClusters<'static> {
        let mut out = String::with_capacity(self.string.len() + rhs.string.len());
        out.push_str(&self.string);
        out.push_str(&rhs.string);
        GraphemeClusters {
            string: Cow::Owned(out),
        }
    }
}

impl<'b> IntoIterator for &'b GraphemeClusters<'_> {
    type Item = &'b str;
    type IntoIter = Clusters<'b>;

    fn into_iter(self) -> Clusters<'b> {
        self.iter()
    }
}

/// Double-ended iterator over the grapheme clusters of a string, front and
/// back cursors converging in the middle.
#[derive(Debug, Clone)]
pub struct Clusters<'a> {
    text: &'a str,
    front: usize,
    back: usize,
    fwd: Breaks<'a>,
    bwd: BackBreaks<'a>,
}

impl<'a> Clusters<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Clusters {
            text,
            front: 0,
            back: text.len(),
            fwd: Breaks::new(text, 0, text.len(), STATE_SOT_NO_BREAK),
            bwd: BackBreaks::new(text, text.len(), 0, STATE_EOT_NO_BREAK),
        }
    }

    /// The part of the string not yet yielded from either end.
    pub fn as_str(&self) -> &'a str {
        &self.text[self.front..self.back]
    }
}

impl<'a> Iterator for Clusters<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.front >= self.back {
            return None;
        }
        let start = self.front;
        let end = self.fwd.next_break()?;
        self.front = end;
        Some(&self.text[start..end])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining.min(1), Some(remaining))
    }
}

impl DoubleEndedIterator for Clusters<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let end = self.back;
        let start = self.bwd.next_break()?;
        self.back = start;
        Some(&self.text[start..end])
    }
}

impl core::iter::FusedIterator for Clusters<'_> {}

/// First candidate position after a rejected match at `i`: the next
/// character boundary.
fn bump(s: &str, i: usize) -> usize {
    i + s[i..].chars().next().map_or(1, |c| c.len_utf8())
}
