// End-to-end behavior of the DataTable through the public API

use std::sync::{Arc, Mutex};

use orbitkit::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Contact {
    name: &'static str,
    email: &'static str,
    score: i32,
}

fn contact(name: &'static str, score: i32) -> Contact {
    Contact {
        name,
        email: "x@example.com",
        score,
    }
}

fn columns() -> Vec<ColumnDescriptor<Contact>> {
    vec![
        ColumnDescriptor::builder("name", "Name", |c: &Contact| c.name)
            .sortable(true)
            .build(),
        ColumnDescriptor::builder("email", "Email", |c: &Contact| c.email).build(),
        ColumnDescriptor::builder("score", "Score", |c: &Contact| c.score)
            .sortable(true)
            .align(Alignment::Right)
            .build(),
    ]
}

type Selections = Arc<Mutex<Vec<Vec<Contact>>>>;

fn mounted(
    data: Vec<Contact>,
    mode: SelectionMode,
) -> (LifecycleManager<DataTable<Contact>>, Selections, DataTableProps<Contact>) {
    let selections: Selections = Arc::new(Mutex::new(Vec::new()));
    let sink = selections.clone();

    let mut props = DataTableProps::new(data, columns());
    props.selection = Some(mode);
    props.on_row_select = Some(callback(move |rows: Vec<Contact>| {
        sink.lock().unwrap().push(rows);
    }));

    let mut manager = LifecycleManager::new(props.clone(), Context::new());
    manager.mount().expect("mount should succeed");
    (manager, selections, props)
}

fn names(table: &DataTable<Contact>) -> Vec<(&'static str, usize)> {
    table
        .projection()
        .rows()
        .iter()
        .map(|row| (row.record.name, row.original_index))
        .collect()
}

#[test]
fn header_clicks_follow_the_documented_scenario() {
    let data = vec![contact("Bob", 0), contact("Al", 0), contact("Al", 0)];
    let (mut manager, _, _) = mounted(data, SelectionMode::None);
    let table = manager.component_mut();

    table.handle_event(TableEvent::HeaderClick("name".to_string()));
    assert_eq!(names(table), vec![("Al", 1), ("Al", 2), ("Bob", 0)]);

    // Inverting the comparator keeps equal names in their original order
    table.handle_event(TableEvent::HeaderClick("name".to_string()));
    assert_eq!(names(table), vec![("Bob", 0), ("Al", 1), ("Al", 2)]);

    table.handle_event(TableEvent::HeaderClick("name".to_string()));
    assert_eq!(names(table), vec![("Bob", 0), ("Al", 1), ("Al", 2)]);
    assert_eq!(table.sort_state(), &SortState::none());

    // email is not sortable
    table.handle_event(TableEvent::HeaderClick("email".to_string()));
    assert!(table.sort_state().is_unsorted());
}

#[test]
fn equal_keys_keep_original_relative_order_in_both_directions() {
    let data = vec![
        contact("a", 2),
        contact("b", 1),
        contact("c", 2),
        contact("d", 1),
        contact("e", 2),
    ];
    let (mut manager, _, _) = mounted(data, SelectionMode::None);
    let table = manager.component_mut();

    table.click_header("score");
    let ascending = table.projection().order();
    assert_eq!(ascending, vec![1, 3, 0, 2, 4]);

    table.click_header("score");
    let descending = table.projection().order();
    assert_eq!(descending, vec![0, 2, 4, 1, 3]);
}

#[test]
fn three_clicks_restore_original_order() {
    let data = vec![contact("m", 5), contact("z", 9), contact("a", 1)];
    let (mut manager, _, _) = mounted(data, SelectionMode::None);
    let table = manager.component_mut();

    for _ in 0..3 {
        table.click_header("score");
    }
    assert!(table.sort_state().is_unsorted());
    assert_eq!(table.projection().order(), vec![0, 1, 2]);
}

#[test]
fn selection_travels_with_the_record_when_sorting() {
    let data = vec![contact("c", 3), contact("a", 1), contact("b", 2)];
    let (mut manager, selections, _) = mounted(data, SelectionMode::Multiple);
    let table = manager.component_mut();

    table.click_row(0);
    for key in ["name", "score", "score", "name"] {
        table.click_header(key);
        let selected: Vec<_> = table
            .projection()
            .rows()
            .iter()
            .filter(|row| row.is_selected)
            .map(|row| row.record.name)
            .collect();
        assert_eq!(selected, vec!["c"]);
    }
    assert_eq!(selections.lock().unwrap().len(), 1);
}

#[test]
fn single_mode_keeps_only_the_last_row() {
    let data = (0..6).map(|i| contact("n", i)).collect();
    let (mut manager, selections, _) = mounted(data, SelectionMode::Single);
    let table = manager.component_mut();

    table.click_row(2);
    table.click_row(5);
    assert_eq!(
        table.selection_state().selected().iter().copied().collect::<Vec<_>>(),
        vec![5]
    );

    // select-all is ignored outside multiple mode
    table.handle_event(TableEvent::SelectAll);
    assert_eq!(table.selection_state().len(), 1);

    let calls = selections.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1], vec![contact("n", 5)]);
}

#[test]
fn shrinking_data_reconciles_and_notifies_once() -> Result<(), orbitkit::Error> {
    let five: Vec<Contact> = (0..5).map(|i| contact("old", i)).collect();
    let (mut manager, selections, mut props) = mounted(five, SelectionMode::Multiple);

    manager.component_mut().click_row(0);
    manager.component_mut().click_row(3);
    selections.lock().unwrap().clear();

    props.data = vec![contact("new", 10), contact("new", 11), contact("new", 12)].into();
    manager.update(props)?;

    let table = manager.component();
    assert_eq!(
        table.selection_state().selected().iter().copied().collect::<Vec<_>>(),
        vec![0]
    );
    let calls = selections.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], vec![contact("new", 10)]);
    Ok(())
}

#[test]
fn loading_wins_over_rows() -> Result<(), orbitkit::Error> {
    let (mut manager, _, mut props) = mounted(vec![contact("a", 1)], SelectionMode::None);
    props.loading = Some(true);
    props.empty_message = Some("Nothing yet".to_string());
    manager.update(props)?;

    let table = manager.component();
    assert_eq!(table.projection(), Projection::Loading);

    let markup = orbitkit::render_to_markup(table)?;
    assert!(markup.contains("Loading..."));
    assert!(markup.contains("aria-busy=\"true\""));
    assert!(!markup.contains("Nothing yet"));
    assert!(!markup.contains("data-index"));
    Ok(())
}

#[test]
fn empty_data_shows_the_message() -> Result<(), orbitkit::Error> {
    let (mut manager, _, mut props) = mounted(Vec::new(), SelectionMode::None);
    props.empty_message = Some("No contacts yet".to_string());
    manager.update(props)?;

    let table = manager.component();
    assert_eq!(table.projection(), Projection::Empty("No contacts yet"));

    let nodes = manager.render()?;
    let body = nodes[0].find_all("tbody")[0];
    assert_eq!(body.children().len(), 1);
    assert_eq!(body.text_content(), "No contacts yet");
    Ok(())
}

#[test]
fn options_from_json_configure_the_table() -> Result<(), orbitkit::Error> {
    let options = orbitkit::kit::config::table_options_from_json(
        r#"{ "selection": "multiple", "striped": true, "caption": "Contacts" }"#,
    )?;
    let props = options.apply(DataTableProps::new(
        vec![contact("a", 1), contact("b", 2)],
        columns(),
    ));

    let mut manager = LifecycleManager::<DataTable<Contact>>::new(props, Context::new());
    manager.mount()?;
    manager.component_mut().handle_event(TableEvent::SelectAll);
    assert_eq!(manager.component().selected_records().len(), 2);

    let markup = orbitkit::render_to_markup(manager.component())?;
    assert!(markup.contains("<caption>Contacts</caption>"));
    assert!(markup.contains("orbit-table--striped"));
    assert!(markup.contains("aria-multiselectable=\"true\""));
    Ok(())
}

#[test]
fn shrinking_data_and_switching_to_single_notifies_once() -> Result<(), orbitkit::Error> {
    let five: Vec<Contact> = (0..5).map(|i| contact("old", i)).collect();
    let (mut manager, selections, mut props) = mounted(five, SelectionMode::Multiple);

    manager.component_mut().click_row(3);
    manager.component_mut().click_row(4);
    selections.lock().unwrap().clear();

    props.data = vec![contact("new", 0), contact("new", 1), contact("new", 2)].into();
    props.selection = Some(SelectionMode::Single);
    manager.update(props)?;

    let table = manager.component();
    assert_eq!(table.selection_state().mode(), SelectionMode::Single);
    assert!(table.selection_state().is_empty());
    assert_eq!(*selections.lock().unwrap(), vec![Vec::<Contact>::new()]);
    Ok(())
}

#[test]
fn single_mode_keeps_the_lowest_surviving_row_after_shrink() -> Result<(), orbitkit::Error> {
    let five: Vec<Contact> = (0..5).map(|i| contact("old", i)).collect();
    let (mut manager, selections, mut props) = mounted(five, SelectionMode::Multiple);

    manager.component_mut().click_row(4);
    manager.component_mut().click_row(1);
    manager.component_mut().click_row(2);
    selections.lock().unwrap().clear();

    let three = vec![contact("new", 0), contact("new", 1), contact("new", 2)];
    props.data = three.clone().into();
    props.selection = Some(SelectionMode::Single);
    manager.update(props)?;

    assert_eq!(
        manager.component().selection_state().selected().iter().copied().collect::<Vec<_>>(),
        vec![1]
    );
    let calls = selections.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].iter().all(|record| three.contains(record)));
    assert_eq!(calls[0], vec![contact("new", 1)]);
    Ok(())
}

#[test]
fn shrinking_data_and_disabling_selection_notifies_once() -> Result<(), orbitkit::Error> {
    let five: Vec<Contact> = (0..5).map(|i| contact("old", i)).collect();
    let (mut manager, selections, mut props) = mounted(five, SelectionMode::Multiple);

    manager.component_mut().click_row(0);
    manager.component_mut().click_row(4);
    selections.lock().unwrap().clear();

    props.data = vec![contact("new", 0), contact("new", 1)].into();
    props.selection = Some(SelectionMode::None);
    manager.update(props)?;

    let table = manager.component();
    assert_eq!(table.selection_state().mode(), SelectionMode::None);
    assert!(table.selection_state().is_empty());
    assert_eq!(*selections.lock().unwrap(), vec![Vec::<Contact>::new()]);

    let nodes = manager.render()?;
    assert_eq!(nodes[0].tag(), "table");
    assert!(nodes[0].find_all("input").is_empty());
    Ok(())
}
