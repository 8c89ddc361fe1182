//! Shape-level views of the stream, before any binding semantics.
//!
//! The Telesis grammar has no fixed field positions: where a
//! reference-designator list ends and a definition clause begins, and which
//! part of a pin word is the designator, is inferred from the words
//! themselves. This module does only that splitting; `parse` gives the
//! pieces meaning.

/// One `;`-separated segment of the package section, split at the
/// ref-list / definition-clause boundary.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct PackageSegment<'a> {
    pub(crate) refs: Vec<&'a str>,
    pub(crate) clause: Option<Vec<&'a str>>,
}

impl<'a> PackageSegment<'a> {
    /// The boundary sits at the first word containing `!`. When that word
    /// *starts* with `!` its first field is empty and the word before it is
    /// the clause's footprint, so the boundary moves one word back.
    pub(crate) fn from_words(mut words: Vec<&'a str>) -> Self {
        let Some(idx) = words.iter().position(|w| w.contains('!')) else {
            return Self {
                refs: words,
                clause: None,
            };
        };
        let boundary = if words[idx].starts_with('!') {
            idx.saturating_sub(1)
        } else {
            idx
        };
        let clause = words.split_off(boundary);
        Self {
            refs: words,
            clause: Some(clause),
        }
    }
}

/// Split a net-section pin word into `(ref, pin)` at the first `.`, falling
/// back to the first `-` only when no dot exists. The pin part may itself
/// contain further separators. Words with no separator, or nothing before
/// it, carry no usable designator.
pub(crate) fn split_pin(word: &str) -> Option<(&str, &str)> {
    let (refdes, pin) = word.split_once('.').or_else(|| word.split_once('-'))?;
    if refdes.is_empty() {
        return None;
    }
    Some((refdes, pin))
}
