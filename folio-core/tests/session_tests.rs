use folio_core::model::{
    Complexity, FilterDimension, ProjectId, ProjectRecord, SortMode,
};
use folio_core::query::{CountSummary, FacetRow};
use folio_core::{CatalogStore, QuerySession, SessionError};
use std::sync::Arc;

fn alpha_beta() -> Arc<CatalogStore> {
    let records = vec![
        ProjectRecord {
            id: ProjectId(1),
            title: "Alpha".into(),
            industry: Some("Finance".into()),
            complexity: Some(Complexity::Complex),
            featured: false,
            ..Default::default()
        },
        ProjectRecord {
            id: ProjectId(2),
            title: "Beta".into(),
            industry: Some("Finance".into()),
            complexity: Some(Complexity::Enterprise),
            featured: true,
            ..Default::default()
        },
    ];
    Arc::new(CatalogStore::from_records(records).unwrap())
}

fn ids(session: &mut QuerySession) -> Vec<u32> {
    session.view().ids().into_iter().map(ProjectId::get).collect()
}

#[test]
fn initial_view_orders_featured_first() {
    let mut session = QuerySession::new(alpha_beta());
    assert_eq!(session.generation(), 0);
    assert_eq!(ids(&mut session), vec![2, 1]);
    assert_eq!(
        session.counts(),
        CountSummary {
            total: 2,
            filtered: 2,
        }
    );
}

#[test]
fn each_setter_publishes_a_new_snapshot() {
    let mut session = QuerySession::new(alpha_beta());
    let before = session.state();

    let after = session.set_search_term("beta");

    assert!(!Arc::ptr_eq(&before, &after));
    assert!(before.search_term.is_empty());
    assert_eq!(session.generation(), 1);
    assert_eq!(ids(&mut session), vec![2]);
}

#[test]
fn view_is_memoized_per_snapshot() {
    let mut session = QuerySession::new(alpha_beta());
    let first = session.view();
    let second = session.view();
    assert!(Arc::ptr_eq(&first, &second));

    session.set_sort_mode(SortMode::Newest);
    let third = session.view();
    assert!(!Arc::ptr_eq(&first, &third));
    assert_eq!(third.generation, 1);
    assert!(Arc::ptr_eq(&third.state, &session.state()));
}

#[test]
fn view_always_reflects_the_latest_write() {
    let mut session = QuerySession::new(alpha_beta());
    session.set_filter_selection(FilterDimension::Industry, ["Finance"]);
    session.set_sort_mode(SortMode::Complexity);
    session.set_search_term("alp");

    let view = session.view();
    assert_eq!(view.generation, 3);
    assert_eq!(view.state.search_term, "alp");
    assert_eq!(view.ids(), vec![ProjectId(1)]);
}

#[test]
fn clear_all_keeps_sort_mode_and_selection() {
    let mut session = QuerySession::new(alpha_beta());
    session.set_sort_mode(SortMode::Newest);
    session.set_search_term("alpha");
    session.set_filter_selection(FilterDimension::Type, ["NoSuchType"]);
    session.select_project(ProjectId(2)).unwrap();
    assert!(session.has_active_query());
    assert!(session.view().is_empty());

    session.clear_all();

    assert!(!session.has_active_query());
    assert_eq!(session.state().sort_mode, SortMode::Newest);
    assert_eq!(session.selected_project().unwrap().id, ProjectId(2));
    assert_eq!(ids(&mut session), vec![2, 1]);
}

#[test]
fn toggling_a_filter_value_adds_then_removes_it() {
    let mut session = QuerySession::new(alpha_beta());
    session.toggle_filter_value(FilterDimension::Complexity, "Complex");
    assert_eq!(ids(&mut session), vec![1]);

    session.toggle_filter_value(FilterDimension::Complexity, "Complex");
    assert!(session.state().selections.is_empty());
    assert_eq!(ids(&mut session), vec![2, 1]);
}

#[test]
fn facet_rows_follow_current_results() {
    let mut session = QuerySession::new(alpha_beta());
    session.set_search_term("beta");

    let rows = session.facet_rows(FilterDimension::Complexity);
    assert_eq!(
        rows,
        vec![FacetRow::new("Complex", 0), FacetRow::new("Enterprise", 1)]
    );
    assert_eq!(
        session.facets().values(FilterDimension::Industry),
        ["Finance"]
    );
}

#[test]
fn selecting_an_unknown_project_fails() {
    let mut session = QuerySession::new(alpha_beta());
    let err = session.select_project(ProjectId(99)).unwrap_err();
    assert!(matches!(
        err,
        SessionError::UnknownProject { id } if id == ProjectId(99)
    ));
    assert!(session.selected_project().is_none());

    session.select_project(ProjectId(1)).unwrap();
    session.clear_selection();
    assert!(session.selected_project().is_none());
}
