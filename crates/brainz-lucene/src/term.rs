// SPDX-License-Identifier: GPL-3.0-or-later

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::error::{QueryError, Result};
use crate::escape::{escape_into, escape_regex_into, escape_slashes_into};
use crate::expression::BoolOp;
use crate::range::Range;
use crate::render::{display_via_render, render_joined, OperatorStyle, Render};

/// Max edits used by [`Term::fuzzy_default`].
pub const DEFAULT_MAX_EDITS: u8 = 2;

/// A single searchable value: a word, a quoted phrase or a regular expression,
/// possibly wrapped in modifiers or grouped with other terms.
///
/// Terms are immutable. Every modifier consumes the term and returns a new one.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// A single token such as `test` or `hello`.
    Word { text: String, escape: bool },
    /// A group of words surrounded by double quotes such as `"hello dolly"`.
    Phrase { text: String, escape: bool },
    /// A regular expression written between `/` delimiters.
    Regex(String),
    Modified { term: Box<Term>, modifier: Modifier },
    /// Terms joined with `AND`/`OR` inside parentheses.
    Group { op: BoolOp, terms: Vec<Term> },
}

/// Prefix or suffix operator applied to a term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Modifier {
    /// `+term`: the term must appear.
    Required,
    /// `-term`: the term must not appear.
    Prohibited,
    /// `NOT term`.
    Not,
    /// `term^factor`: relevance weight.
    Boost(f64),
    /// `word~n`: Damerau-Levenshtein distance of at most `n`.
    Fuzzy(u8),
    /// `"a phrase"~n`: words within `n` positions of each other.
    Proximity(u32),
}

impl Term {
    /// Builds a [`Term::Phrase`] if `text` still contains whitespace after
    /// trimming its ends, otherwise a [`Term::Word`]. Reserved characters in
    /// the text are escaped.
    ///
    /// ```
    /// use brainz_lucene::Term;
    ///
    /// assert_eq!(Term::new("ter?m").to_string(), r"ter\?m");
    /// assert_eq!(Term::new(" a phrase ").to_string(), r#""a phrase""#);
    /// ```
    pub fn new(text: impl AsRef<str>) -> Self {
        Self::classify(text.as_ref(), true)
    }

    /// Like [`Term::new`] but the text is written as given, so wildcards
    /// (`?`, `*`) keep their meaning.
    pub fn verbatim(text: impl AsRef<str>) -> Self {
        Self::classify(text.as_ref(), false)
    }

    /// An escaped single word. Text that is blank or contains whitespace
    /// cannot be written as one unquoted token and is classified as by
    /// [`Term::new`] instead.
    pub fn word(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() || has_whitespace(&text) {
            return Self::classify(&text, true);
        }
        Term::Word { text, escape: true }
    }

    /// An escaped phrase, even for a single word.
    pub fn phrase(text: impl Into<String>) -> Self {
        Term::Phrase {
            text: text.into(),
            escape: true,
        }
    }

    /// A regular expression term. The pattern is not trimmed since
    /// whitespace at either end may be part of the expression.
    pub fn regex(pattern: impl Into<String>) -> Self {
        Term::Regex(pattern.into())
    }

    /// Blank text becomes the empty phrase `""` so a field never ends in a
    /// bare colon.
    fn classify(text: &str, escape: bool) -> Self {
        let text = text.trim();
        if text.is_empty() || has_whitespace(text) {
            Term::Phrase {
                text: text.to_string(),
                escape,
            }
        } else {
            Term::Word {
                text: text.to_string(),
                escape,
            }
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Term::Word { .. })
    }

    fn is_single_word(&self) -> bool {
        matches!(self, Term::Word { text, .. } if !text.is_empty() && !has_whitespace(text))
    }

    fn is_multi_word_phrase(&self) -> bool {
        matches!(self, Term::Phrase { text, .. } if has_whitespace(text.trim()))
    }

    pub fn is_phrase(&self) -> bool {
        matches!(self, Term::Phrase { .. })
    }

    fn modified(self, modifier: Modifier) -> Term {
        Term::Modified {
            term: Box::new(self),
            modifier,
        }
    }

    pub fn require(self) -> Term {
        self.modified(Modifier::Required)
    }

    pub fn prohibit(self) -> Term {
        self.modified(Modifier::Prohibited)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Term {
        self.modified(Modifier::Not)
    }

    /// Weights the term by `factor`, which must be a finite number above zero.
    pub fn boost(self, factor: f64) -> Result<Term> {
        if !(factor.is_finite() && factor > 0.0) {
            debug!(target: "lucene", factor, "rejected boost factor");
            return Err(QueryError::InvalidBoost(factor));
        }
        Ok(self.modified(Modifier::Boost(factor)))
    }

    /// Fuzzy match with up to `max_edits` (0, 1 or 2) edits. Only a single
    /// [`Term::Word`] may be fuzzy.
    pub fn fuzzy(self, max_edits: u8) -> Result<Term> {
        if !self.is_single_word() {
            debug!(target: "lucene", term = %self, "fuzzy requested on a non-word term");
            return Err(QueryError::FuzzyOnPhrase(self.to_string()));
        }
        if max_edits > 2 {
            debug!(target: "lucene", max_edits, "rejected fuzzy max edits");
            return Err(QueryError::InvalidMaxEdits(max_edits));
        }
        Ok(self.modified(Modifier::Fuzzy(max_edits)))
    }

    pub fn fuzzy_default(self) -> Result<Term> {
        self.fuzzy(DEFAULT_MAX_EDITS)
    }

    /// Proximity search: the words of the phrase must be within `slop`
    /// positions of each other. Only a [`Term::Phrase`] of two or more words
    /// may have a proximity.
    pub fn proximity(self, slop: u32) -> Result<Term> {
        if !self.is_multi_word_phrase() {
            debug!(target: "lucene", term = %self, "proximity requested on a non-phrase term");
            return Err(QueryError::ProximityOnWord(self.to_string()));
        }
        if slop == 0 {
            return Err(QueryError::InvalidSlop(slop));
        }
        Ok(self.modified(Modifier::Proximity(slop)))
    }

    /// `(self AND other)`.
    pub fn and(self, other: impl Into<Term>) -> Term {
        Term::Group {
            op: BoolOp::And,
            terms: vec![self, other.into()],
        }
    }

    /// `(self OR other)`.
    pub fn or(self, other: impl Into<Term>) -> Term {
        Term::Group {
            op: BoolOp::Or,
            terms: vec![self, other.into()],
        }
    }

    pub fn all_of<I, T>(terms: I) -> Result<Term>
    where
        I: IntoIterator<Item = T>,
        T: Into<Term>,
    {
        Self::group(BoolOp::And, terms)
    }

    pub fn any_of<I, T>(terms: I) -> Result<Term>
    where
        I: IntoIterator<Item = T>,
        T: Into<Term>,
    {
        Self::group(BoolOp::Or, terms)
    }

    fn group<I, T>(op: BoolOp, terms: I) -> Result<Term>
    where
        I: IntoIterator<Item = T>,
        T: Into<Term>,
    {
        let terms: Vec<Term> = terms.into_iter().map(Into::into).collect();
        if terms.is_empty() {
            return Err(QueryError::EmptyGroup);
        }
        Ok(Term::Group { op, terms })
    }

    /// `[self TO upper]`
    pub fn inclusive(self, upper: impl Into<Term>) -> Range {
        Range::inclusive(self, upper.into())
    }

    /// `{self TO upper}`
    pub fn exclusive(self, upper: impl Into<Term>) -> Range {
        Range::exclusive(self, upper.into())
    }
}

fn has_whitespace(text: &str) -> bool {
    text.chars().any(char::is_whitespace)
}

fn push_text(out: &mut String, text: &str, escape: bool) {
    if escape {
        escape_into(out, text);
    } else {
        out.push_str(text);
    }
}

impl Render for Term {
    fn render_into(&self, out: &mut String, style: OperatorStyle) {
        match self {
            Term::Word { text, escape } => push_text(out, text, *escape),
            Term::Phrase { text, escape } => {
                out.push('"');
                push_text(out, text, *escape);
                out.push('"');
            }
            Term::Regex(pattern) => match style {
                OperatorStyle::Escaped => {
                    out.push_str("\\/");
                    escape_regex_into(out, pattern);
                    out.push_str("\\/");
                }
                OperatorStyle::Bare => {
                    out.push('/');
                    escape_slashes_into(out, pattern);
                    out.push('/');
                }
            },
            Term::Modified { term, modifier } => match modifier {
                Modifier::Required => {
                    style.push_operator(out, '+');
                    term.render_into(out, style);
                }
                Modifier::Prohibited => {
                    style.push_operator(out, '-');
                    term.render_into(out, style);
                }
                Modifier::Not => {
                    out.push_str("NOT ");
                    term.render_into(out, style);
                }
                Modifier::Boost(factor) => {
                    term.render_into(out, style);
                    style.push_operator(out, '^');
                    out.push_str(&factor.to_string());
                }
                Modifier::Fuzzy(max_edits) => {
                    term.render_into(out, style);
                    style.push_operator(out, '~');
                    out.push_str(&max_edits.to_string());
                }
                Modifier::Proximity(slop) => {
                    term.render_into(out, style);
                    style.push_operator(out, '~');
                    out.push_str(&slop.to_string());
                }
            },
            Term::Group { op, terms } => {
                out.push('(');
                render_joined(out, terms, op.separator(), style);
                out.push(')');
            }
        }
    }
}

display_via_render!(Term);

/// A calendar year, searched as a single word (`1997`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(pub u16);

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl From<&str> for Term {
    fn from(text: &str) -> Self {
        Term::new(text)
    }
}

impl From<String> for Term {
    fn from(text: String) -> Self {
        Term::new(text)
    }
}

impl From<&String> for Term {
    fn from(text: &String) -> Self {
        Term::new(text)
    }
}

// A leading '-' would read as the prohibit operator, so negative numbers are quoted.
macro_rules! integer_terms {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Term {
                #[allow(unused_comparisons)]
                fn from(value: $ty) -> Self {
                    let text = value.to_string();
                    if value < 0 {
                        Term::Phrase { text, escape: false }
                    } else {
                        Term::Word { text, escape: false }
                    }
                }
            }
        )+
    };
}

integer_terms!(i32, i64, u32, u64);

impl From<f64> for Term {
    fn from(value: f64) -> Self {
        Term::Phrase {
            text: value.to_string(),
            escape: false,
        }
    }
}

impl From<bool> for Term {
    fn from(value: bool) -> Self {
        Term::Word {
            text: value.to_string(),
            escape: false,
        }
    }
}

impl From<NaiveDate> for Term {
    fn from(date: NaiveDate) -> Self {
        Term::Phrase {
            text: date.format("%Y-%m-%d").to_string(),
            escape: false,
        }
    }
}

impl From<Year> for Term {
    fn from(year: Year) -> Self {
        Term::Word {
            text: year.to_string(),
            escape: false,
        }
    }
}

/// MusicBrainz identifiers (MBIDs) are searched as single words.
impl From<Uuid> for Term {
    fn from(mbid: Uuid) -> Self {
        Term::Word {
            text: mbid.hyphenated().to_string(),
            escape: false,
        }
    }
}
