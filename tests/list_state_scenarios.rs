//! End-to-end list scenarios and property tests for selection and paging.

use memberdesk::app::{handle_event, AppState, Event, ListState, PAGE_SIZE};
use memberdesk::domain::{generate_sample_records, EditField, Record, Role};
use memberdesk::source::SourceConfig;
use memberdesk::ui::Theme;
use proptest::prelude::*;
use std::collections::HashSet;

fn loaded(count: usize) -> ListState {
    let mut list = ListState::new();
    list.load(generate_sample_records(count));
    list
}

#[test]
fn search_narrows_and_reclamps_page() {
    let mut list = loaded(50);
    list.set_page(5);
    assert_eq!(list.current_page(), 5);

    list.set_search_term("2");
    // 2, 12, 20..=29, 32, 42
    assert_eq!(list.filtered_count(), 14);
    assert_eq!(list.total_pages(), 2);
    assert_eq!(list.current_page(), 2);
    assert_eq!(list.page_records().len(), 4);
    assert!(list
        .filtered_records()
        .iter()
        .all(|r| r.id.contains('2') || r.name.contains('2') || r.email.contains('2')));
}

#[test]
fn select_all_spans_every_page_and_filter() {
    let mut list = loaded(46);
    list.set_search_term("user 1");
    assert!(list.toggle_select_all());
    assert_eq!(list.selected_ids().len(), 46);
    assert!(list.all_selected());

    assert!(list.delete_selected());
    assert!(list.records().is_empty());
    assert_eq!(list.current_page(), 1);
    assert_eq!(list.total_pages(), 1);
    assert!(!list.all_selected());
    assert!(!list.toggle_select_all());
}

#[test]
fn deleting_under_edit_discards_the_edit() {
    let mut list = loaded(12);
    assert!(list.begin_edit("11"));
    list.update_edit_buffer(EditField::Name, "Changed");
    assert!(list.toggle_row_selected("11"));
    assert!(list.delete_selected());
    assert!(list.editing().is_none());
    assert!(!list.commit_edit());
    assert_eq!(list.records().len(), 11);
}

#[test]
fn edit_round_trip_through_the_handler() {
    let mut state = AppState::new(SourceConfig::Sample { count: 30 }, Theme::default());
    handle_event(&mut state, &Event::Start).unwrap();

    for event in [
        Event::NextPage,
        Event::CursorDown,
        Event::BeginEdit,
        Event::NextField,
        Event::Char('x'),
        Event::NextField,
        Event::Char('r'),
        Event::CancelEdit,
    ] {
        handle_event(&mut state, &event).unwrap();
    }
    assert_eq!(state.list.records(), generate_sample_records(30).as_slice());

    for event in [Event::BeginEdit, Event::NextField, Event::Backspace, Event::CommitEdit] {
        handle_event(&mut state, &event).unwrap();
    }
    let edited = &state.list.records()[11];
    assert_eq!(edited.email, "user12@mailinator.co");
    assert_eq!(edited.role, Role::Admin);
}

#[test]
fn commit_that_leaves_the_filter_reclamps() {
    let mut list = ListState::new();
    let mut records = generate_sample_records(10);
    records.push(Record::new("99", "Zed", "zed@example.com", Role::Member));
    list.load(records);

    list.set_search_term("zed");
    assert!(list.begin_edit("99"));
    list.update_edit_buffer(EditField::Name, "Ann");
    list.update_edit_buffer(EditField::Email, "ann@example.com");
    assert!(list.commit_edit());

    assert_eq!(list.filtered_count(), 0);
    assert_eq!(list.current_page(), 1);
    assert!(list.page_records().is_empty());
}

#[derive(Debug, Clone)]
enum Op {
    Search(String),
    Toggle(usize),
    ToggleAll,
    DeleteOne(usize),
    DeleteSelected,
    BeginEdit(usize),
    Commit,
    Cancel,
    Page(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[0-9a-z ]{0,3}".prop_map(Op::Search),
        (0usize..40).prop_map(Op::Toggle),
        Just(Op::ToggleAll),
        (0usize..40).prop_map(Op::DeleteOne),
        Just(Op::DeleteSelected),
        (0usize..40).prop_map(Op::BeginEdit),
        Just(Op::Commit),
        Just(Op::Cancel),
        (0usize..8).prop_map(Op::Page),
    ]
}

fn apply(list: &mut ListState, op: &Op) {
    let id = |n: usize| (n + 1).to_string();
    match op {
        Op::Search(term) => {
            list.set_search_term(term);
        }
        Op::Toggle(n) => {
            list.toggle_row_selected(&id(*n));
        }
        Op::ToggleAll => {
            list.toggle_select_all();
        }
        Op::DeleteOne(n) => {
            list.delete_one(&id(*n));
        }
        Op::DeleteSelected => {
            list.delete_selected();
        }
        Op::BeginEdit(n) => {
            list.begin_edit(&id(*n));
        }
        Op::Commit => {
            list.commit_edit();
        }
        Op::Cancel => {
            list.cancel_edit();
        }
        Op::Page(p) => {
            list.set_page(*p);
        }
    }
}

#[derive(Debug, Clone)]
enum SelectOp {
    Toggle(String),
    DeleteOne(String),
}

/// Ids of loaded records plus a few that are never present.
fn any_id() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (1usize..=25).prop_map(|n| n.to_string()),
        1 => Just("99".to_string()),
        1 => "[a-z]{1,2}",
    ]
}

fn select_op() -> impl Strategy<Value = SelectOp> {
    prop_oneof![
        3 => any_id().prop_map(SelectOp::Toggle),
        1 => any_id().prop_map(SelectOp::DeleteOne),
    ]
}

proptest! {
    #[test]
    fn selection_is_odd_toggles_among_present_ids(
        count in 0usize..25,
        ops in proptest::collection::vec(select_op(), 0..60),
    ) {
        let mut list = loaded(count);
        let mut toggled_odd: HashSet<String> = HashSet::new();

        for op in &ops {
            match op {
                SelectOp::Toggle(id) => {
                    list.toggle_row_selected(id);
                    if !toggled_odd.remove(id) {
                        toggled_odd.insert(id.clone());
                    }
                }
                SelectOp::DeleteOne(id) => {
                    list.delete_one(id);
                }
            }

            let present: HashSet<String> = list.records().iter().map(|r| r.id.clone()).collect();
            let expected: HashSet<String> = toggled_odd.intersection(&present).cloned().collect();
            prop_assert_eq!(list.selected_ids(), &expected);
        }
    }

    #[test]
    fn toggle_parity_decides_selection(count in 1usize..30, pick in 0usize..30, toggles in 0usize..7) {
        let mut list = loaded(count);
        let id = (pick % count + 1).to_string();
        for _ in 0..toggles {
            list.toggle_row_selected(&id);
        }
        prop_assert_eq!(list.is_selected(&id), toggles % 2 == 1);
    }

    #[test]
    fn set_page_always_lands_in_range(count in 0usize..60, page in 0usize..100) {
        let mut list = loaded(count);
        list.set_page(page);
        let total = list.total_pages();
        prop_assert!(total >= 1);
        prop_assert!((1..=total).contains(&list.current_page()));
        prop_assert_eq!(total, count.div_ceil(PAGE_SIZE).max(1));
    }

    #[test]
    fn invariants_hold_after_any_sequence(count in 0usize..40, ops in proptest::collection::vec(op(), 0..40)) {
        let mut list = loaded(count);
        for op in &ops {
            apply(&mut list, op);

            let ids: HashSet<&str> = list.records().iter().map(|r| r.id.as_str()).collect();
            prop_assert_eq!(ids.len(), list.records().len());
            prop_assert!(list.selected_ids().iter().all(|id| ids.contains(id.as_str())));
            if let Some(editing) = list.editing_id() {
                prop_assert!(ids.contains(editing));
            }
            prop_assert!((1..=list.total_pages()).contains(&list.current_page()));
            prop_assert!(list.page_records().len() <= PAGE_SIZE);
            prop_assert_eq!(
                list.all_selected(),
                !list.records().is_empty() && list.selected_ids().len() == list.records().len()
            );
        }
    }
}
