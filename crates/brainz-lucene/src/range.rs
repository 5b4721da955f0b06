// SPDX-License-Identifier: GPL-3.0-or-later

use crate::render::{display_via_render, OperatorStyle, Render};
use crate::term::Term;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bounds {
    /// `[lower TO upper]`, both ends included.
    Inclusive,
    /// `{lower TO upper}`, both ends excluded.
    Exclusive,
}

impl Bounds {
    fn brackets(self) -> (char, char) {
        match self {
            Bounds::Inclusive => ('[', ']'),
            Bounds::Exclusive => ('{', '}'),
        }
    }
}

/// Matches documents whose field value sorts between `lower` and `upper`.
/// Sorting is lexicographic on the backend.
///
/// The bounds are not compared; an inverted range is written as given.
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    pub lower: Term,
    pub upper: Term,
    pub bounds: Bounds,
}

impl Range {
    pub fn new(lower: Term, upper: Term, bounds: Bounds) -> Self {
        Self {
            lower,
            upper,
            bounds,
        }
    }

    pub fn inclusive(lower: impl Into<Term>, upper: impl Into<Term>) -> Self {
        Self::new(lower.into(), upper.into(), Bounds::Inclusive)
    }

    pub fn exclusive(lower: impl Into<Term>, upper: impl Into<Term>) -> Self {
        Self::new(lower.into(), upper.into(), Bounds::Exclusive)
    }
}

impl Render for Range {
    fn render_into(&self, out: &mut String, style: OperatorStyle) {
        let (open, close) = self.bounds.brackets();
        style.push_operator(out, open);
        self.lower.render_into(out, style);
        out.push_str(" TO ");
        self.upper.render_into(out, style);
        style.push_operator(out, close);
    }
}

display_via_render!(Range);
