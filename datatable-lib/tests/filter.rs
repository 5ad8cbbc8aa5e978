use datatable_lib::filter::GlobalFilter;
use datatable_lib::model::{athlete_columns, Athlete};

fn thorpe() -> Athlete {
    Athlete {
        id: 11,
        athlete: "Ian Thorpe".to_string(),
        country: "Australia".to_string(),
        age: Some(17),
        year: 2000,
    }
}

#[test]
fn test_empty_query_matches_everything() {
    let mut filter = GlobalFilter::new("");
    assert!(filter.is_empty());
    assert!(filter.matches_text(""));
    assert!(filter.matches_row(&thorpe(), &athlete_columns()));
}

#[test]
fn test_substring_match() {
    let mut filter = GlobalFilter::new("thor");
    assert!(filter.matches_text("Ian Thorpe"));
    assert!(!filter.matches_text("Michael Phelps"));
}

#[test]
fn test_case_insensitive() {
    let mut filter = GlobalFilter::new("AUSTRAL");
    assert!(filter.matches_text("Australia"));
}

#[test]
fn test_not_fuzzy() {
    // Characters in order but not contiguous.
    let mut filter = GlobalFilter::new("itp");
    assert!(!filter.matches_text("Ian Thorpe"));
}

#[test]
fn test_any_column_matches() {
    let columns = athlete_columns();
    let row = thorpe();
    assert!(GlobalFilter::new("17").matches_row(&row, &columns));
    assert!(GlobalFilter::new("11").matches_row(&row, &columns));
    assert!(!GlobalFilter::new("2012").matches_row(&row, &columns));
}

#[test]
fn test_match_within_single_column() {
    // The query spans two columns, which is not a match.
    let mut filter = GlobalFilter::new("Thorpe Australia");
    assert!(!filter.matches_row(&thorpe(), &athlete_columns()));
}

#[test]
fn test_whitespace_query_is_a_real_filter() {
    let pele = Athlete {
        id: 12,
        athlete: "Pele".to_string(),
        country: "Brazil".to_string(),
        age: None,
        year: 1970,
    };
    let columns = athlete_columns();
    let mut filter = GlobalFilter::new(" ");
    assert!(!filter.is_empty());
    assert!(filter.matches_row(&thorpe(), &columns));
    assert!(!filter.matches_row(&pele, &columns));
}
