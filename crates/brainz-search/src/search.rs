// SPDX-License-Identifier: GPL-3.0-or-later

use std::marker::PhantomData;

use brainz_lucene::{Expression, Field, FieldValue, OperatorStyle, Query, Range, Render, Term};
use tracing::trace;
use uuid::Uuid;

use crate::entity::{Entity, SearchField};
use crate::error::Result;
use crate::fields::{ArtistField, RecordingField, ReleaseField, ReleaseGroupField};
use crate::request::SearchRequest;

pub type ArtistSearch = Search<ArtistField>;
pub type ReleaseSearch = Search<ReleaseField>;
pub type ReleaseGroupSearch = Search<ReleaseGroupField>;
pub type RecordingSearch = Search<RecordingField>;

/// Builds a query against the fields of one entity type.
///
/// Every `add*` call appends a field clause and returns it as a handle. The
/// handles are used as match keys by [`Search::and`], [`Search::or`],
/// [`Search::require`] and [`Search::prohibit`], which replace the clause in
/// place instead of tracking positions.
///
/// ```
/// use brainz_search::{ReleaseField, ReleaseSearch};
///
/// let mut search = ReleaseSearch::new();
/// let title = search.add(ReleaseField::Release, "Hey Joe");
/// let artist = search.add(ReleaseField::Artist, "Jimi Hendrix");
/// search.and(&title, &artist);
///
/// assert_eq!(
///     search.to_string(),
///     r#"(release:"Hey Joe" AND artist:"Jimi Hendrix")"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Search<F: SearchField> {
    query: Query,
    _field: PhantomData<F>,
}

impl<F: SearchField> Default for Search<F> {
    fn default() -> Self {
        Self::with_query(Query::new())
    }
}

impl<F: SearchField> Search<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continues building on an existing query.
    pub fn with_query(query: Query) -> Self {
        Self {
            query,
            _field: PhantomData,
        }
    }

    pub fn entity(&self) -> Entity {
        F::ENTITY
    }

    pub fn add(&mut self, field: F, term: impl Into<Term>) -> Expression {
        self.push(Field::new(field.name(), term.into()))
    }

    pub fn add_range(&mut self, field: F, range: Range) -> Expression {
        self.push(Field::new(field.name(), range))
    }

    /// Adds `field:(v1 v2 ...)`. Fails when `values` is empty.
    pub fn add_values<I, V>(&mut self, field: F, values: I) -> Result<Expression>
    where
        I: IntoIterator<Item = V>,
        V: Into<FieldValue>,
    {
        let field = Field::try_from_values(field.name(), values)?;
        Ok(self.push(field))
    }

    fn push(&mut self, field: Field) -> Expression {
        let clause = Expression::from(field);
        trace!(target: "search", entity = %F::ENTITY, clause = %clause, "adding clause");
        self.query.append(clause.clone());
        clause
    }

    /// Replaces `left` with `(left AND right)`. `right` is removed from the
    /// query first since it was most likely added on its own.
    pub fn and(&mut self, left: &Expression, right: &Expression) -> Expression {
        self.query.remove(right);
        self.replace(left, left.clone().and(right.clone()))
    }

    /// Replaces `left` with `(left OR right)`, removing `right` first.
    pub fn or(&mut self, left: &Expression, right: &Expression) -> Expression {
        self.query.remove(right);
        self.replace(left, left.clone().or(right.clone()))
    }

    pub fn require(&mut self, clause: &Expression) -> Expression {
        self.replace(clause, clause.clone().require())
    }

    pub fn prohibit(&mut self, clause: &Expression) -> Expression {
        self.replace(clause, clause.clone().prohibit())
    }

    fn replace(&mut self, target: &Expression, replacement: Expression) -> Expression {
        self.query.replace_or_add(target, replacement.clone());
        replacement
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn into_query(self) -> Query {
        self.query
    }

    /// Request for this search with the query rendered in `style`.
    pub fn request(&self, style: OperatorStyle) -> SearchRequest {
        SearchRequest::new(F::ENTITY, self.query.render(style))
    }
}

impl<F: SearchField> std::fmt::Display for Search<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.query, f)
    }
}

impl ArtistSearch {
    pub fn artist(&mut self, name: &str) -> Expression {
        self.add(ArtistField::Artist, name)
    }

    pub fn artist_id(&mut self, mbid: Uuid) -> Expression {
        self.add(ArtistField::ArtistId, mbid)
    }

    pub fn country(&mut self, code: &str) -> Expression {
        self.add(ArtistField::Country, code)
    }
}

impl ReleaseSearch {
    pub fn release(&mut self, title: &str) -> Expression {
        self.add(ReleaseField::Release, title)
    }

    pub fn artist(&mut self, name: &str) -> Expression {
        self.add(ReleaseField::Artist, name)
    }

    pub fn release_id(&mut self, mbid: Uuid) -> Expression {
        self.add(ReleaseField::ReleaseId, mbid)
    }

    pub fn catalog_number(&mut self, number: &str) -> Expression {
        self.add(ReleaseField::CatalogNumber, number)
    }
}

impl ReleaseGroupSearch {
    pub fn release_group(&mut self, title: &str) -> Expression {
        self.add(ReleaseGroupField::ReleaseGroup, title)
    }

    pub fn artist(&mut self, name: &str) -> Expression {
        self.add(ReleaseGroupField::Artist, name)
    }

    pub fn primary_type(&mut self, kind: &str) -> Expression {
        self.add(ReleaseGroupField::PrimaryType, kind)
    }
}

impl RecordingSearch {
    pub fn recording(&mut self, title: &str) -> Expression {
        self.add(RecordingField::Recording, title)
    }

    pub fn artist(&mut self, name: &str) -> Expression {
        self.add(RecordingField::Artist, name)
    }

    pub fn isrc(&mut self, isrc: &str) -> Expression {
        self.add(RecordingField::Isrc, isrc)
    }
}
