//! Review domain types.
//!
//! A [`Review`] is the immutable input pair the scraper hands to the core:
//! free text plus a rating of unspecified original type. [`Verdict`] is the
//! per-review output, carrying the original text and rating through
//! untransformed for display alongside the [`Label`].

use serde::{Deserialize, Serialize};

/// Raw rating as received from the serving layer.
///
/// Upstream sources emit ratings as numbers, strings ("4", "4.0 out of 5"),
/// or not at all. Parsing into a usable number happens in
/// [`parse_rating`](crate::features::parse_rating); anything unparseable
/// degrades to the neutral default rather than failing the review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRating {
    /// Numeric rating, e.g. `4` or `4.5`.
    Number(f64),
    /// Textual rating, parsed leniently.
    Text(String),
    /// No rating field supplied.
    Absent,
}

impl Default for RawRating {
    fn default() -> Self {
        RawRating::Absent
    }
}

/// A single product review to classify.
///
/// `text` is required: a payload without it is a collaborator-level error
/// and is rejected at the deserialization boundary rather than deep inside
/// the pipeline. A missing `rating` deserializes to [`RawRating::Absent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Raw review text.
    pub text: String,
    /// Raw rating value (may be malformed).
    #[serde(default)]
    pub rating: RawRating,
}

impl Review {
    /// Creates a review with a numeric rating.
    pub fn new(text: impl Into<String>, rating: f64) -> Self {
        Self {
            text: text.into(),
            rating: RawRating::Number(rating),
        }
    }

    /// Creates a review with no rating.
    pub fn unrated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rating: RawRating::Absent,
        }
    }
}

/// Binary classification outcome for one review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    /// Genuine, human-written review (raw classifier output 0).
    Real,
    /// Computer-generated review (raw classifier output 1).
    Fake,
}

impl Label {
    /// Maps the classifier's raw binary output to a label.
    pub fn from_raw(raw: u8) -> Self {
        if raw == 1 { Label::Fake } else { Label::Real }
    }

    /// Human-readable description used in user-facing output.
    pub fn describe(&self) -> &'static str {
        match self {
            Label::Real => "Real (Original)",
            Label::Fake => "Fake (Computer Generated)",
        }
    }

    /// Returns `true` for [`Label::Fake`].
    pub fn is_fake(&self) -> bool {
        matches!(self, Label::Fake)
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe())
    }
}

/// Classification result for one review, with the input passed through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Original review text (untransformed).
    pub text: String,
    /// Original raw rating (untransformed).
    pub rating: RawRating,
    /// Classification outcome.
    pub label: Label,
}
