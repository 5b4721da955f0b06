// SPDX-License-Identifier: GPL-3.0-or-later

use brainz_lucene::QueryError;
use thiserror::Error;

use crate::entity::Entity;
use crate::fields::UnknownFieldName;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid query: {0}")]
    Query(#[from] QueryError),

    #[error("unknown entity: {0}")]
    UnknownEntity(String),

    #[error("unknown {entity} search field: {name}")]
    UnknownField {
        entity: Entity,
        name: String,
        #[source]
        source: UnknownFieldName,
    },

    #[error("limit must be between 1 and {max}, got {limit}")]
    InvalidLimit { limit: u32, max: u32 },

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}
