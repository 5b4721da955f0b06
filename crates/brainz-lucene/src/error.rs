// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueryError>;

/// Invalid-argument failures raised while constructing query values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("only single-word terms may be fuzzy, got {0}")]
    FuzzyOnPhrase(String),

    #[error("fuzzy max edits must be 0, 1 or 2, got {0}")]
    InvalidMaxEdits(u8),

    #[error("only phrases of two or more words may have a proximity, got {0}")]
    ProximityOnWord(String),

    #[error("proximity slop must be positive, got {0}")]
    InvalidSlop(u32),

    #[error("boost factor must be a positive number, got {0}")]
    InvalidBoost(f64),

    #[error("field {0:?} needs at least one term")]
    EmptyField(String),

    #[error("boolean group needs at least one member")]
    EmptyGroup,

    #[error("unknown operator style {0:?}, expected escaped or bare")]
    UnknownOperatorStyle(String),
}
