// SPDX-License-Identifier: GPL-3.0-or-later

use brainz_lucene::escape::RESERVED_CHARS;
use brainz_lucene::{Expression, Field, OperatorStyle, Query, QueryError, Render, Term};
use proptest::prelude::*;

fn field(name: &str, text: &str) -> Expression {
    Field::new(name, Term::new(text)).into()
}

#[test]
fn test_reference_scenarios() {
    assert_eq!(Term::new("ter?m").to_string(), r"ter\?m");
    assert_eq!(Term::new(" a phrase ").to_string(), r#""a phrase""#);
    assert_eq!(
        Field::with_values("album", Term::new("Aqualung"), [Term::new("Thick as a Brick")])
            .to_string(),
        r#"album:(Aqualung "Thick as a Brick")"#
    );
    assert_eq!(
        Expression::all_of([field("album", "Revolver"), field("artist", "The Beatles")])
            .unwrap()
            .to_string(),
        r#"(album:Revolver AND artist:"The Beatles")"#
    );
    assert_eq!(
        Term::new("Alice").inclusive(Term::new("Bob")).to_string(),
        r"\[Alice TO Bob\]"
    );

    let unused = field("no", "no");
    let mut query = Query::new();
    query.replace_or_add(&unused, field("title", "Hey Joe"));
    query.replace_or_add(&unused, field("artist", "Jimi Hendrix"));
    assert_eq!(query.to_string(), r#"title:"Hey Joe" artist:"Jimi Hendrix""#);
}

#[test]
fn test_bare_style_is_plain_lucene() {
    let mut query = Query::new();
    query
        .append(Field::new("artist", Term::new("Nirvana").require()))
        .append(Field::new("release", Term::new("Nevermind").fuzzy(1).unwrap()))
        .append(Field::new("date", Term::new("1990").inclusive("1992")))
        .append(Field::new("tag", Term::new("grunge rock").proximity(2).unwrap()))
        .append(Field::new("label", Term::new("DGC").boost(3.0).unwrap()));

    assert_eq!(
        query.render(OperatorStyle::Bare),
        r#"artist:+Nirvana release:Nevermind~1 date:[1990 TO 1992] tag:"grunge rock"~2 label:DGC^3"#
    );
    assert_eq!(
        query.to_string(),
        r#"artist:\+Nirvana release:Nevermind\~1 date:\[1990 TO 1992\] tag:"grunge rock"\~2 label:DGC\^3"#
    );
}

fn plain_word() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{0,8}"
}

fn single_reserved() -> impl Strategy<Value = char> {
    prop::sample::select(RESERVED_CHARS.to_vec())
}

proptest! {
    #[test]
    fn reserved_char_gets_exactly_one_backslash(
        head in plain_word(),
        c in single_reserved(),
        tail in plain_word(),
    ) {
        let raw = format!("{}{}{}", head, c, tail);
        let expected = format!("{}\\{}{}", head, c, tail);
        prop_assert_eq!(Term::new(&raw).to_string(), expected);
    }

    #[test]
    fn whitespace_makes_a_quoted_phrase(
        head in "[a-zA-Z0-9]{1,8}",
        gap in "[ \t]{1,3}",
        tail in "[a-zA-Z0-9]{1,8}",
    ) {
        let raw = format!("{}{}{}", head, gap, tail);
        let term = Term::new(&raw);
        prop_assert!(term.is_phrase());
        prop_assert_eq!(term.to_string(), format!("\"{}\"", raw));
    }

    #[test]
    fn plain_text_is_an_unquoted_word(raw in "[a-zA-Z0-9]{1,12}") {
        let term = Term::new(&raw);
        prop_assert!(term.is_word());
        prop_assert_eq!(term.to_string(), raw);
    }

    #[test]
    fn fuzzy_on_phrase_always_fails(edits in any::<u8>()) {
        let result = Term::new("Bob and Alice").fuzzy(edits);
        prop_assert!(matches!(result, Err(QueryError::FuzzyOnPhrase(_))));
    }

    #[test]
    fn proximity_on_word_always_fails(slop in any::<u32>()) {
        let result = Term::new("Bob").proximity(slop);
        prop_assert!(matches!(result, Err(QueryError::ProximityOnWord(_))));
    }

    #[test]
    fn unmatched_replace_appends_once(misses in prop::collection::vec("[a-z]{1,6}", 0..5)) {
        let mut query = Query::new();
        for (i, miss) in misses.iter().enumerate() {
            query.replace_or_add(&field("missing", miss), field("seen", &i.to_string()));
        }
        let before = query.len();
        query.replace_or_add(&field("never", "there"), field("title", "Hey Joe"));

        prop_assert_eq!(query.len(), before + 1);
        let title = field("title", "Hey Joe");
        let appended = query.clauses().last();
        prop_assert_eq!(appended, Some(&title));
        prop_assert_eq!(
            query.clauses().iter().filter(|clause| **clause == title).count(),
            1
        );
    }
}
