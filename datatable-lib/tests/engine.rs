//! Tests for the in-memory table engine.

use datatable_lib::engine::{ClientEngine, ColumnSort, SortDirection, TableEngine};
use datatable_lib::error::FieldError;
use datatable_lib::model::{athlete_columns, Athlete, Column, TableRow};

fn athlete(id: u32, name: &str, country: &str, age: Option<u32>, year: u32) -> Athlete {
    Athlete {
        id,
        athlete: name.to_string(),
        country: country.to_string(),
        age,
        year,
    }
}

fn five() -> Vec<Athlete> {
    vec![
        athlete(1, "Michael Phelps", "United States", Some(23), 2008),
        athlete(2, "Ian Thorpe", "Australia", Some(17), 2000),
        athlete(3, "Natalie Coughlin", "United States", Some(25), 2008),
        athlete(4, "Sun Yang", "China", Some(20), 2012),
        athlete(5, "Marit Bjørgen", "Norway", None, 2010),
    ]
}

fn engine() -> ClientEngine<Athlete> {
    ClientEngine::new(athlete_columns(), five())
}

fn ids(engine: &ClientEngine<Athlete>) -> Vec<u32> {
    engine.rows().iter().map(|row| row.key()).collect()
}

fn numbered(count: u32) -> Vec<Athlete> {
    (1..=count)
        .map(|id| athlete(id, &format!("Athlete {}", id), "Country", Some(20), 2000))
        .collect()
}

// =============================================================================
// Filtering
// =============================================================================

#[test]
fn test_filter_narrows_visible_rows() {
    let mut engine = engine();
    assert_eq!(engine.rows().len(), 5);

    engine.set_global_filter("united");
    assert_eq!(engine.filtered_row_count(), 2);
    assert_eq!(ids(&engine), vec![1, 3]);
    assert_eq!(engine.page_count(), 1);
    assert!(!engine.can_next_page());
}

#[test]
fn test_sort_applies_to_filtered_rows_only() {
    let mut engine = engine();
    engine.set_global_filter("united");
    engine.toggle_sort("age");
    engine.toggle_sort("age");
    assert_eq!(ids(&engine), vec![3, 1]);
}

#[test]
fn test_filter_matches_numbers_as_text() {
    let mut engine = engine();
    engine.set_global_filter("2008");
    assert_eq!(ids(&engine), vec![1, 3]);
}

#[test]
fn test_empty_filter_shows_everything() {
    let mut engine = engine();
    engine.set_global_filter("zzz");
    assert_eq!(engine.filtered_row_count(), 0);
    assert!(engine.rows().is_empty());
    assert_eq!(engine.page_count(), 1);

    engine.set_global_filter("");
    assert_eq!(engine.filtered_row_count(), 5);
}

#[test]
fn test_filter_change_returns_to_first_page() {
    let mut engine = ClientEngine::new(athlete_columns(), numbered(25));
    engine.last_page();
    assert_eq!(engine.page_index(), 2);

    engine.set_global_filter("Athlete");
    assert_eq!(engine.page_index(), 0);
}

// =============================================================================
// Sorting
// =============================================================================

#[test]
fn test_header_toggle_cycles_and_restores_order() {
    let mut engine = engine();
    let original = ids(&engine);

    assert_eq!(engine.toggle_sort("athlete"), Some(SortDirection::Ascending));
    assert_eq!(engine.sort_direction("athlete"), Some(SortDirection::Ascending));
    assert_eq!(ids(&engine), vec![2, 5, 1, 3, 4]);

    assert_eq!(engine.toggle_sort("athlete"), Some(SortDirection::Descending));
    assert_eq!(ids(&engine), vec![4, 3, 1, 5, 2]);

    assert_eq!(engine.toggle_sort("athlete"), None);
    assert_eq!(engine.sort_direction("athlete"), None);
    assert_eq!(ids(&engine), original);
}

#[test]
fn test_cycle_restores_filtered_order() {
    let mut engine = engine();
    engine.set_global_filter("a");
    let filtered = ids(&engine);

    for _ in 0..3 {
        engine.toggle_sort("year");
    }
    assert_eq!(ids(&engine), filtered);
}

#[test]
fn test_header_groups_report_sort_state() {
    let mut engine = engine();
    engine.toggle_sort("year");
    engine.toggle_sort_multi("age");

    let groups = engine.header_groups();
    assert_eq!(groups.len(), 1);
    let headers = &groups[0].headers;
    let labels: Vec<&str> = headers.iter().map(|h| h.label.as_str()).collect();
    assert_eq!(labels, vec!["ID", "Athlete", "Country", "Age", "Year"]);

    let year = headers.iter().find(|h| h.column_id == "year").unwrap();
    assert_eq!(year.sort, Some(SortDirection::Ascending));
    assert_eq!(year.sort_index, Some(0));
    let age = headers.iter().find(|h| h.column_id == "age").unwrap();
    assert_eq!(age.sort_index, Some(1));
    let id = headers.iter().find(|h| h.column_id == "id").unwrap();
    assert_eq!(id.sort, None);
}

#[test]
fn test_multi_sort_breaks_ties() {
    let mut engine = engine();
    engine.set_sorting(vec![ColumnSort::desc("year"), ColumnSort::asc("age")]);
    assert_eq!(ids(&engine), vec![4, 5, 1, 3, 2]);

    engine.set_sorting(vec![ColumnSort::desc("year"), ColumnSort::desc("age")]);
    assert_eq!(ids(&engine), vec![4, 5, 3, 1, 2]);
}

#[test]
fn test_nulls_sort_first() {
    let mut engine = engine();
    engine.toggle_sort("age");
    assert_eq!(ids(&engine)[0], 5);
}

#[test]
fn test_plain_toggle_replaces_multi_sort() {
    let mut engine = engine();
    engine.toggle_sort("year");
    engine.toggle_sort_multi("age");
    engine.toggle_sort("country");
    assert_eq!(engine.sorting(), &[ColumnSort::asc("country")]);
}

#[test]
fn test_unsortable_column_ignores_toggle() {
    let columns = vec![Column::new("id", "ID"), Column::new("athlete", "Athlete").unsortable()];
    let mut engine = ClientEngine::new(columns, five());
    assert_eq!(engine.toggle_sort("athlete"), None);
    assert!(engine.sorting().is_empty());
    assert!(!engine.header_groups()[0].headers[1].sortable);
}

// =============================================================================
// Pagination
// =============================================================================

#[test]
fn test_pagination_flags() {
    let mut engine = ClientEngine::new(athlete_columns(), numbered(25));
    assert_eq!(engine.page_size(), 10);
    assert_eq!(engine.page_count(), 3);
    assert!(!engine.can_previous_page());
    assert!(engine.can_next_page());

    engine.next_page();
    assert_eq!(engine.page_index(), 1);
    assert!(engine.can_previous_page());
    assert!(engine.can_next_page());

    engine.last_page();
    assert_eq!(engine.page_index(), 2);
    assert_eq!(engine.rows().len(), 5);
    assert!(!engine.can_next_page());

    engine.next_page();
    assert_eq!(engine.page_index(), 2);

    engine.previous_page();
    assert_eq!(engine.page_index(), 1);

    engine.first_page();
    assert_eq!(engine.page_index(), 0);
    engine.previous_page();
    assert_eq!(engine.page_index(), 0);
}

#[test]
fn test_page_index_is_clamped() {
    let mut engine = ClientEngine::new(athlete_columns(), numbered(25));
    engine.set_page_index(99);
    assert_eq!(engine.page_index(), 2);
}

#[test]
fn test_page_size_change_resets_page() {
    let mut engine = ClientEngine::new(athlete_columns(), numbered(25)).with_page_size(0);
    assert_eq!(engine.page_size(), 1);
    assert_eq!(engine.page_count(), 25);

    engine.set_page_index(4);
    engine.set_page_size(5);
    assert_eq!(engine.page_index(), 0);
    assert_eq!(engine.page_count(), 5);
}

#[test]
fn test_sort_change_returns_to_first_page() {
    let mut engine = ClientEngine::new(athlete_columns(), numbered(25));
    engine.next_page();
    engine.toggle_sort("id");
    assert_eq!(engine.page_index(), 0);
}

// =============================================================================
// Write-back
// =============================================================================

#[test]
fn test_update_cell_rewrites_row() {
    let mut engine = engine();
    engine.update_cell(&2, "athlete", "Ian James Thorpe").unwrap();
    let row = engine.data().iter().find(|a| a.id == 2).unwrap();
    assert_eq!(row.athlete, "Ian James Thorpe");
}

#[test]
fn test_update_cell_reruns_filter() {
    let mut engine = engine();
    engine.set_global_filter("united");
    engine.update_cell(&1, "country", "USA").unwrap();
    assert_eq!(ids(&engine), vec![3]);
}

#[test]
fn test_update_cell_errors() {
    let mut engine = engine();
    assert_eq!(
        engine.update_cell(&99, "athlete", "x"),
        Err(FieldError::unknown_row(99))
    );
    assert_eq!(
        engine.update_cell(&1, "medal", "gold"),
        Err(FieldError::missing("medal"))
    );
    assert_eq!(
        engine.update_cell(&1, "id", "7"),
        Err(FieldError::read_only("id"))
    );
}
