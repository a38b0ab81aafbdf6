use airdate_core::{Field, ParseError, Show, parse_record, parse_record_silent};

#[test]
fn bracketed_range() {
    let show = parse_record("The Office (2005-2013)").unwrap();
    assert_eq!(show, Show::new("The Office", 2005, 2013));
}

#[test]
fn bracketed_single_year() {
    let show = parse_record("Game of Thrones (2011)").unwrap();
    assert_eq!(show.title, "Game of Thrones");
    assert_eq!(show.start, 2011);
    assert_eq!(show.end, 2011);
}

#[test]
fn comma_shape_is_not_recognized() {
    let err = parse_record("The Simpsons, 1989-2021").unwrap_err();
    assert_eq!(err.field(), Field::Title);
    assert_eq!(err.raw(), "The Simpsons, 1989-2021");
}

#[test]
fn range_shape_for_many_titles() {
    let cases = [
        ("Breaking Bad (2008-2013)", "Breaking Bad", 2008, 2013),
        ("Friends (1994-2004)", "Friends", 1994, 2004),
        ("Mad Men (2007-2015)", "Mad Men", 2007, 2015),
        ("The Wire (2002-2008)", "The Wire", 2002, 2008),
    ];
    for (raw, title, start, end) in cases {
        let show = parse_record(raw).unwrap();
        assert_eq!(show, Show::new(title, start, end), "parsing {raw:?}");
    }
}

#[test]
fn reversed_range_is_kept_as_is() {
    let show = parse_record("Odd (2013-2005)").unwrap();
    assert_eq!(show.start, 2013);
    assert_eq!(show.end, 2005);
}

#[test]
fn hyphenated_title_is_a_known_limitation() {
    // The first '-' sits in the title, so the range is read out of order and
    // the single-year fallback refuses a string containing '-'.
    let err = parse_record("Spider-Man (1994-1998)").unwrap_err();
    assert_eq!(err, ParseError::hyphen_present("Spider-Man (1994-1998)"));
}

#[test]
fn title_failure_short_circuits() {
    // Years would also fail, but the title error is the one reported.
    let err = parse_record("(abc)").unwrap_err();
    assert_eq!(err, ParseError::missing_title("(abc)"));
}

#[test]
fn start_failure_reports_fallback_error() {
    let err = parse_record("Show (abc)").unwrap_err();
    assert!(matches!(
        err,
        ParseError::InvalidYear {
            field: Field::SingleYear,
            ..
        }
    ));
}

#[test]
fn end_failure_reports_fallback_error() {
    // Start resolves via the range, end fails and falls back to single year,
    // which rejects the hyphen.
    let err = parse_record("Show (2005-abc)").unwrap_err();
    assert_eq!(err, ParseError::hyphen_present("Show (2005-abc)"));
}

#[test]
fn silent_matches_diagnostic() {
    let inputs = [
        "The Office (2005-2013)",
        "Game of Thrones (2011)",
        "The Simpsons, 1989-2021",
        "Show ()",
        "Show (2005-)",
        "Spider-Man (1994-1998)",
        "",
    ];
    for raw in inputs {
        assert_eq!(parse_record_silent(raw), parse_record(raw).ok(), "{raw:?}");
    }
}

#[test]
fn empty_input_fails() {
    assert!(parse_record("").is_err());
    assert!(parse_record_silent("").is_none());
}

#[test]
fn show_serializes_to_json() {
    let show = parse_record("Friends (1994-2004)").unwrap();
    let json = serde_json::to_string(&show).unwrap();
    assert_eq!(json, r#"{"title":"Friends","start":1994,"end":2004}"#);
}
