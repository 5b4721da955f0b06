// SPDX-License-Identifier: GPL-3.0-or-later

//! Serialization of query values into Lucene syntax.

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// How operator characters produced by modifiers and ranges are written.
///
/// `Escaped` backslash-escapes `+ - ^ ~` and the range brackets, matching the
/// reserved character table. `Bare` writes them as plain Lucene operators.
/// Term content is escaped the same way under either style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorStyle {
    #[default]
    Escaped,
    Bare,
}

impl OperatorStyle {
    /// Appends a single operator character, escaped if this style asks for it.
    pub(crate) fn push_operator(self, out: &mut String, op: char) {
        if self == OperatorStyle::Escaped {
            out.push('\\');
        }
        out.push(op);
    }
}

impl std::str::FromStr for OperatorStyle {
    type Err = QueryError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "escaped" => Ok(OperatorStyle::Escaped),
            "bare" => Ok(OperatorStyle::Bare),
            _ => Err(QueryError::UnknownOperatorStyle(s.to_string())),
        }
    }
}

/// A value that can be written as (part of) a query string.
pub trait Render {
    fn render_into(&self, out: &mut String, style: OperatorStyle);

    fn render(&self, style: OperatorStyle) -> String {
        let mut out = String::new();
        self.render_into(&mut out, style);
        out
    }
}

/// Writes `items` separated by `separator`.
pub(crate) fn render_joined<'a, T, I>(
    out: &mut String,
    items: I,
    separator: &str,
    style: OperatorStyle,
) where
    T: Render + 'a,
    I: IntoIterator<Item = &'a T>,
{
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            out.push_str(separator);
        }
        item.render_into(out, style);
    }
}

/// `Display` through the default [`OperatorStyle`].
macro_rules! display_via_render {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&$crate::render::Render::render(self, Default::default()))
                }
            }
        )+
    };
}

pub(crate) use display_via_render;
