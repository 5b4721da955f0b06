// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{QueryError, Result};
use crate::range::Range;
use crate::render::{display_via_render, render_joined, OperatorStyle, Render};
use crate::term::Term;

/// What a field can be matched against.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Term(Term),
    Range(Range),
}

impl Render for FieldValue {
    fn render_into(&self, out: &mut String, style: OperatorStyle) {
        match self {
            FieldValue::Term(term) => term.render_into(out, style),
            FieldValue::Range(range) => range.render_into(out, style),
        }
    }
}

impl From<Term> for FieldValue {
    fn from(term: Term) -> Self {
        FieldValue::Term(term)
    }
}

impl From<Range> for FieldValue {
    fn from(range: Range) -> Self {
        FieldValue::Range(range)
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Term(Term::new(text))
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Term(Term::new(text))
    }
}

/// A named query clause: `name:term` or `name:(term1 term2 ...)`.
///
/// The field applies only to the value(s) directly after the colon, which is
/// why several values are wrapped in parentheses. An empty name targets the
/// entity's default field and is written without the `name:` prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: String,
    values: Vec<FieldValue>,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            name: name.into(),
            values: vec![value.into()],
        }
    }

    pub fn with_values<I, V>(name: impl Into<String>, first: impl Into<FieldValue>, rest: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<FieldValue>,
    {
        let mut values = vec![first.into()];
        values.extend(rest.into_iter().map(Into::into));
        Self {
            name: name.into(),
            values,
        }
    }

    /// Fails with [`QueryError::EmptyField`] when `values` is empty.
    pub fn try_from_values<I, V>(name: impl Into<String>, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<FieldValue>,
    {
        let name = name.into();
        let values: Vec<FieldValue> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(QueryError::EmptyField(name));
        }
        Ok(Self { name, values })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }
}

impl Render for Field {
    fn render_into(&self, out: &mut String, style: OperatorStyle) {
        if !self.name.is_empty() {
            out.push_str(&self.name);
            out.push(':');
        }
        match self.values.as_slice() {
            [single] => single.render_into(out, style),
            values => {
                out.push('(');
                render_joined(out, values, " ", style);
                out.push(')');
            }
        }
    }
}

display_via_render!(Field, FieldValue);
