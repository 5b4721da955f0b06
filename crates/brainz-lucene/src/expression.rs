// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{QueryError, Result};
use crate::field::Field;
use crate::render::{display_via_render, render_joined, OperatorStyle, Render};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolOp {
    And,
    Or,
}

impl BoolOp {
    pub fn separator(self) -> &'static str {
        match self {
            BoolOp::And => " AND ",
            BoolOp::Or => " OR ",
        }
    }
}

/// A top-level query clause: a field, or fields combined with `AND`/`OR`.
///
/// Groups are always written inside their own parentheses and are never
/// flattened or reordered, so the output mirrors the order of construction
/// instead of relying on the backend's operator precedence:
///
/// ```
/// use brainz_lucene::{Expression, Field};
///
/// let a = Expression::from(Field::new("artist", "The Beatles"));
/// let b = Expression::from(Field::new("album", "Revolver"));
/// let c = Expression::from(Field::new("album", "Rubber Soul"));
///
/// assert_eq!(
///     a.clone().and(b.clone().or(c.clone())).to_string(),
///     r#"(artist:"The Beatles" AND (album:Revolver OR album:"Rubber Soul"))"#
/// );
/// assert_eq!(
///     a.and(b).or(c).to_string(),
///     r#"((artist:"The Beatles" AND album:Revolver) OR album:"Rubber Soul")"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Field(Field),
    And(Vec<Expression>),
    Or(Vec<Expression>),
    /// `+clause`
    Required(Box<Expression>),
    /// `-clause`
    Prohibited(Box<Expression>),
}

impl Expression {
    /// `(self AND other)`
    pub fn and(self, other: impl Into<Expression>) -> Expression {
        Expression::And(vec![self, other.into()])
    }

    /// `(self OR other)`
    pub fn or(self, other: impl Into<Expression>) -> Expression {
        Expression::Or(vec![self, other.into()])
    }

    /// `(c1 AND c2 AND ...)`. Fails with [`QueryError::EmptyGroup`] when
    /// `children` is empty.
    pub fn all_of<I, E>(children: I) -> Result<Expression>
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        Self::group(BoolOp::And, children)
    }

    /// `(c1 OR c2 OR ...)`
    pub fn any_of<I, E>(children: I) -> Result<Expression>
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        Self::group(BoolOp::Or, children)
    }

    fn group<I, E>(op: BoolOp, children: I) -> Result<Expression>
    where
        I: IntoIterator<Item = E>,
        E: Into<Expression>,
    {
        let children: Vec<Expression> = children.into_iter().map(Into::into).collect();
        if children.is_empty() {
            return Err(QueryError::EmptyGroup);
        }
        Ok(match op {
            BoolOp::And => Expression::And(children),
            BoolOp::Or => Expression::Or(children),
        })
    }

    pub fn require(self) -> Expression {
        Expression::Required(Box::new(self))
    }

    pub fn prohibit(self) -> Expression {
        Expression::Prohibited(Box::new(self))
    }

    pub fn as_field(&self) -> Option<&Field> {
        match self {
            Expression::Field(field) => Some(field),
            _ => None,
        }
    }
}

impl From<Field> for Expression {
    fn from(field: Field) -> Self {
        Expression::Field(field)
    }
}

impl Render for Expression {
    fn render_into(&self, out: &mut String, style: OperatorStyle) {
        match self {
            Expression::Field(field) => field.render_into(out, style),
            Expression::And(children) => {
                out.push('(');
                render_joined(out, children, BoolOp::And.separator(), style);
                out.push(')');
            }
            Expression::Or(children) => {
                out.push('(');
                render_joined(out, children, BoolOp::Or.separator(), style);
                out.push(')');
            }
            Expression::Required(inner) => {
                style.push_operator(out, '+');
                inner.render_into(out, style);
            }
            Expression::Prohibited(inner) => {
                style.push_operator(out, '-');
                inner.render_into(out, style);
            }
        }
    }
}

display_via_render!(Expression);
