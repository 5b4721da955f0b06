// SPDX-License-Identifier: GPL-3.0-or-later

use tracing::trace;

use crate::expression::Expression;
use crate::field::Field;
use crate::render::{display_via_render, render_joined, OperatorStyle, Render};
use crate::term::Term;

/// Ordered list of top-level clauses making up one search.
///
/// Clauses are joined with a single space, leaving the combination to the
/// backend's default operator. A query is built within one call stack and
/// then turned into a string; mutation needs `&mut self`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    clauses: Vec<Expression>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clause(clause: impl Into<Expression>) -> Self {
        Self {
            clauses: vec![clause.into()],
        }
    }

    /// Builds one field clause per `(name, text)` pair, in order.
    ///
    /// ```
    /// use brainz_lucene::Query;
    ///
    /// let query = Query::from_pairs([("title", "Hey Joe"), ("artist", "Jimi Hendrix")]);
    /// assert_eq!(query.to_string(), r#"title:"Hey Joe" artist:"Jimi Hendrix""#);
    /// ```
    pub fn from_pairs<I, N, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: AsRef<str>,
    {
        let clauses = pairs
            .into_iter()
            .map(|(name, text)| Field::new(name, Term::new(text)).into())
            .collect();
        Self { clauses }
    }

    pub fn append(&mut self, clause: impl Into<Expression>) -> &mut Self {
        self.clauses.push(clause.into());
        self
    }

    /// Replaces the first clause structurally equal to `target` with
    /// `replacement`, keeping its position. When no clause matches,
    /// `replacement` is appended; `target` itself is never added.
    pub fn replace_or_add(
        &mut self,
        target: &Expression,
        replacement: impl Into<Expression>,
    ) -> &mut Self {
        let replacement = replacement.into();
        match self.clauses.iter().position(|clause| clause == target) {
            Some(index) => {
                trace!(target: "lucene", index, "replacing query clause");
                self.clauses[index] = replacement;
            }
            None => {
                trace!(target: "lucene", "no clause to replace, appending");
                self.clauses.push(replacement);
            }
        }
        self
    }

    /// Removes the first clause equal to `target`, returning whether one was
    /// found.
    pub fn remove(&mut self, target: &Expression) -> bool {
        match self.clauses.iter().position(|clause| clause == target) {
            Some(index) => {
                self.clauses.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clauses(&self) -> &[Expression] {
        &self.clauses
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl Render for Query {
    fn render_into(&self, out: &mut String, style: OperatorStyle) {
        render_joined(out, &self.clauses, " ", style);
        trace!(target: "lucene", clauses = self.clauses.len(), query = %out, "rendered query");
    }
}

display_via_render!(Query);

impl<E: Into<Expression>> Extend<E> for Query {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.clauses.extend(iter.into_iter().map(Into::into));
    }
}

impl<E: Into<Expression>> FromIterator<E> for Query {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            clauses: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title() -> Expression {
        Field::new("title", Term::new("Hey Joe")).into()
    }

    fn artist() -> Expression {
        Field::new("artist", Term::new("Jimi Hendrix")).into()
    }

    fn unused() -> Expression {
        Field::new("no", Term::new("no")).into()
    }

    #[test]
    fn test_query_append() {
        assert_eq!(Query::from_pairs([("title", "Hey Joe")]).to_string(), r#"title:"Hey Joe""#);

        let mut query = Query::new();
        query.append(title()).append(artist());
        assert_eq!(query.to_string(), r#"title:"Hey Joe" artist:"Jimi Hendrix""#);
    }

    #[test]
    fn test_empty_query_is_empty_string() {
        assert_eq!(Query::new().to_string(), "");
        assert!(Query::new().is_empty());
    }

    #[test]
    fn test_blank_value_keeps_clauses_apart() {
        let query = Query::from_pairs([("album", "   "), ("artist", "x")]);
        assert_eq!(query.to_string(), r#"album:"" artist:x"#);
    }

    #[test]
    fn test_query_replace_in_place() {
        let title_and_artist = title().and(artist());
        let mut query = Query::with_clause(title());
        assert_eq!(query.to_string(), r#"title:"Hey Joe""#);

        query.replace_or_add(&title(), title_and_artist);
        assert_eq!(query.to_string(), r#"(title:"Hey Joe" AND artist:"Jimi Hendrix")"#);
        assert_eq!(query.len(), 1);
    }

    #[test]
    fn test_replace_preserves_position() {
        let mut query: Query = [unused(), title(), artist()].into_iter().collect();
        query.replace_or_add(&title(), title().prohibit());
        assert_eq!(
            query.render(OperatorStyle::Bare),
            r#"no:no -title:"Hey Joe" artist:"Jimi Hendrix""#
        );
    }

    #[test]
    fn test_replace_without_match_appends() {
        let mut query = Query::new();
        query.replace_or_add(&unused(), title());
        assert_eq!(query.to_string(), r#"title:"Hey Joe""#);
        query.replace_or_add(&title(), title().and(artist()));
        assert_eq!(query.to_string(), r#"(title:"Hey Joe" AND artist:"Jimi Hendrix")"#);

        let mut query = Query::new();
        query.replace_or_add(&unused(), title());
        query.replace_or_add(&unused(), artist());
        assert_eq!(query.to_string(), r#"title:"Hey Joe" artist:"Jimi Hendrix""#);
    }

    #[test]
    fn test_remove() {
        let mut query = Query::from_pairs([("title", "Hey Joe"), ("artist", "Jimi Hendrix")]);
        assert!(query.remove(&title()));
        assert!(!query.remove(&title()));
        assert_eq!(query.clauses(), &[artist()]);
    }
}
