//! Segmentation of strings into extended grapheme clusters — user-perceived
//! characters — per the Grapheme Cluster portion of
//! [UAX #29: Unicode Text Segmentation](https://www.unicode.org/reports/tr29/),
//! with search, slicing, and replacement operations that respect cluster
//! boundaries.
//!
//! [`GraphemeClusters`] is the main type in this library: an immutable view
//! of a string as a sequence of cluster substrings.
//!
//! ```
//! use grapheme_clusters::GraphemeClusters;
//!
//! let text = GraphemeClusters::new("A\u{0308}B\r\n\u{1F1E9}\u{1F1EA}");
//! let seen: Vec<&str> = text.iter().collect();
//! assert_eq!(seen, ["A\u{0308}", "B", "\r\n", "\u{1F1E9}\u{1F1EA}"]);
//! assert_eq!(text.len(), 4);
//! ```
//!
//! Search and replacement only consider occurrences whose ends both fall on
//! cluster boundaries, so a combining sequence can never be torn apart:
//!
//! ```
//! use grapheme_clusters::GraphemeClusters;
//!
//! let text = GraphemeClusters::new("e\u{0301}le\u{0300}ve");
//! // The "e"s at offsets 0 and 4 carry combining accents; only the final
//! // bare "e" stands alone as a cluster.
//! assert_eq!(text.index_of(&GraphemeClusters::new("e"), 0), Some(8));
//! ```
//!
//! Underneath the view sit two table-driven automata, one walking forward
//! and one walking backward, exposed as [`Breaks`] and [`BackBreaks`]
//! together with the [`is_grapheme_cluster_boundary`] predicate and the lazy
//! [`grapheme_cluster_boundaries`] iterator. The backward machine is what
//! makes [`ClusterCursor`] cheap to run in both directions and lets the
//! predicate answer from a small local window instead of rescanning from
//! the start of the string.
//!
//! # Indices
//!
//! The text is UTF-8 (`&str`), and every index taken or returned by this
//! library is a byte offset. A boundary can only fall on a `char` boundary;
//! querying inside a multi-byte sequence reports "not a boundary". The
//! cluster-counting operations ([`GraphemeClusters::len`],
//! [`GraphemeClusters::skip`], [`GraphemeClusters::take`], ...) are the
//! only ones that count clusters rather than bytes.
//!
//! # Sharing
//!
//! A [`GraphemeClusters`] view is immutable and freely shareable between
//! readers. The iterators ([`Breaks`], [`BackBreaks`], [`ClusterCursor`])
//! are mutable single-owner cursors; clone one when two traversals need to
//! proceed independently.
//!
//! The canonical Rust library for UAX #29 is
//! [`unicode_segmentation`](https://docs.rs/unicode-segmentation/latest/unicode_segmentation/);
//! if all you need is to iterate the clusters of an in-memory string, it is
//! probably what you want. This library differs in carrying the backward
//! automaton as a first-class citizen, which is what the boundary-aligned
//! search/slice/replace operations and the resumable bidirectional cursor
//! are built from.
#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod breaks;
mod clusters;
mod cursor;
mod properties;
pub mod state;

pub use breaks::{
    BackBreaks, Boundaries, Breaks, grapheme_cluster_boundaries, is_grapheme_cluster_boundary,
    next_break, previous_break,
};
pub use clusters::{Clusters, GraphemeClusters, SingleError};
pub use cursor::ClusterCursor;
pub use properties::GraphemeCategory;

/// The [Unicode version](https://www.unicode.org/versions/) of the
/// character database tables embedded in this library.
pub const UNICODE_VERSION: (u64, u64, u64) = (15, 0, 0);
