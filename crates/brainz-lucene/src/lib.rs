// SPDX-License-Identifier: GPL-3.0-or-later

//! Lucene query expression builder for the MusicBrainz search API.
//!
//! Terms are grouped into fields, fields are combined with `AND`/`OR`
//! expressions, and expressions are collected into a [`Query`] whose string
//! form is the value of the `query` parameter sent to the search endpoint.
//!
//! ```
//! use brainz_lucene::{Expression, Field, Query, Term};
//!
//! let title = Expression::from(Field::new("title", Term::new("Hey Joe")));
//! let artist = Expression::from(Field::new("artist", Term::new("Jimi Hendrix")));
//!
//! let mut query = Query::with_clause(title.clone());
//! query.replace_or_add(&title, title.clone().and(artist));
//! assert_eq!(query.to_string(), r#"(title:"Hey Joe" AND artist:"Jimi Hendrix")"#);
//! ```

pub mod error;
pub mod escape;
pub mod expression;
pub mod field;
pub mod query;
pub mod range;
pub mod render;
pub mod term;

pub use error::{QueryError, Result};
pub use expression::{BoolOp, Expression};
pub use field::{Field, FieldValue};
pub use query::Query;
pub use range::{Bounds, Range};
pub use render::{OperatorStyle, Render};
pub use term::{Modifier, Term, Year, DEFAULT_MAX_EDITS};
