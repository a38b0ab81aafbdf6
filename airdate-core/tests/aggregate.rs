use airdate_core::{
    ParseError, Show, parse_all, parse_all_silent, parse_lenient, parse_report,
};

const SAMPLE: [&str; 5] = [
    "The Office (2005-2013)",
    "Breaking Bad (2008-2013)",
    "Friends (1994-2004)",
    "The Simpsons, 1989-2021",
    "Game of Thrones (2011)",
];

#[test]
fn one_bad_record_fails_the_batch() {
    let err = parse_all(SAMPLE).unwrap_err();
    assert_eq!(err.raw(), "The Simpsons, 1989-2021");
    assert!(parse_all_silent(SAMPLE).is_none());
}

#[test]
fn all_good_records_keep_input_order() {
    let shows = parse_all(["The Office (2005-2013)", "Breaking Bad (2008-2013)"]).unwrap();
    assert_eq!(
        shows,
        vec![
            Show::new("The Office", 2005, 2013),
            Show::new("Breaking Bad", 2008, 2013),
        ]
    );
}

#[test]
fn silent_batch_succeeds_like_diagnostic() {
    let raws = ["Friends (1994-2004)", "Game of Thrones (2011)"];
    assert_eq!(parse_all_silent(raws), parse_all(raws).ok());
    assert_eq!(parse_all_silent(raws).map(|s| s.len()), Some(2));
}

#[test]
fn empty_batch_is_empty_success() {
    let none: [&str; 0] = [];
    assert_eq!(parse_all(none).unwrap(), Vec::<Show>::new());
    assert_eq!(parse_all_silent(none), Some(Vec::new()));
}

#[test]
fn earliest_failure_wins() {
    let err = parse_all(["Good (2000)", "Bad one", "Bad two", "Fine (2001)"]).unwrap_err();
    assert_eq!(err, ParseError::missing_title("Bad one"));
}

#[test]
fn failure_at_end_still_discards_everything() {
    let err = parse_all(["A (2000)", "B (2001)", "C"]).unwrap_err();
    assert_eq!(err.raw(), "C");
}

#[test]
fn accepts_owned_strings() {
    let raws: Vec<String> = vec!["Friends (1994-2004)".to_string()];
    let shows = parse_all(&raws).unwrap();
    assert_eq!(shows[0].title, "Friends");
}

#[test]
fn lenient_keeps_successes_in_order() {
    let shows = parse_lenient(SAMPLE);
    let titles: Vec<&str> = shows.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["The Office", "Breaking Bad", "Friends", "Game of Thrones"]
    );
}

#[test]
fn report_keeps_every_failure() {
    let report = parse_report(["Bad one", "Friends (1994-2004)", "Bad two"]);
    assert!(!report.is_complete());
    assert_eq!(report.shows, vec![Show::new("Friends", 1994, 2004)]);
    let raws: Vec<&str> = report.failures.iter().map(|e| e.raw()).collect();
    assert_eq!(raws, vec!["Bad one", "Bad two"]);
}

#[test]
fn report_into_result_matches_parse_all() {
    assert_eq!(parse_report(SAMPLE).into_result(), parse_all(SAMPLE));

    let good = ["The Office (2005-2013)", "Game of Thrones (2011)"];
    let report = parse_report(good);
    assert!(report.is_complete());
    assert_eq!(report.into_result(), parse_all(good));
}
