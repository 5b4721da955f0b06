// SPDX-License-Identifier: GPL-3.0-or-later

use brainz_lucene::{OperatorStyle, Range, Render, Term, Year};
use brainz_search::{
    Entity, RecordingField, RecordingSearch, ReleaseField, ReleaseSearch, MUSICBRAINZ_API_BASE,
};
use chrono::NaiveDate;

#[test]
fn test_release_search_with_date_range() {
    let mut search = ReleaseSearch::new();
    let title = search.release("Nevermind");
    let artist = search.artist("Nirvana");
    search.add_range(
        ReleaseField::Date,
        Range::inclusive(
            NaiveDate::from_ymd_opt(1991, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(1991, 12, 31).unwrap(),
        ),
    );
    search.and(&title, &artist);

    assert_eq!(
        search.query().render(OperatorStyle::Bare),
        r#"(release:Nevermind AND artist:Nirvana) date:["1991-01-01" TO "1991-12-31"]"#
    );
    assert_eq!(
        search.to_string(),
        r#"(release:Nevermind AND artist:Nirvana) date:\["1991-01-01" TO "1991-12-31"\]"#
    );
}

#[test]
fn test_recording_search_request_url() {
    let mut search = RecordingSearch::new();
    search.add(RecordingField::Default, Term::new("Teen Spirit").proximity(2).unwrap());
    search.add_range(
        RecordingField::FirstReleaseDate,
        Term::from(Year(1990)).exclusive(Year(1995)),
    );

    let request = search
        .request(OperatorStyle::Bare)
        .limit(5)
        .unwrap();
    assert_eq!(request.entity, Entity::Recording);
    assert_eq!(
        request.query,
        r#""Teen Spirit"~2 firstreleasedate:{1990 TO 1995}"#
    );

    let url = request.to_url(MUSICBRAINZ_API_BASE).unwrap();
    assert_eq!(url.path(), "/ws/2/recording");
    let query = url
        .query_pairs()
        .find(|(key, _)| key == "query")
        .map(|(_, value)| value.into_owned());
    assert_eq!(query.as_deref(), Some(request.query.as_str()));
}

#[test]
fn test_unrelated_requires_fall_back_to_append() {
    let mut search = ReleaseSearch::new();
    let stray = ReleaseSearch::new().release("Bleach");
    search.release("Nevermind");
    search.require(&stray);
    assert_eq!(
        search.query().render(OperatorStyle::Bare),
        "release:Nevermind +release:Bleach"
    );
}
