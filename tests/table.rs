use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use trestle::column::Column;
use trestle::error::ConfigError;
use trestle::input::{ClickEvent, EventResult, Modifiers, Position};
use trestle::node::{Action, Node, Tag};
use trestle::row::Row;
use trestle::sort::{SortOrder, SortState};
use trestle::table::{Table, TableConfig};
use trestle::value::Value;

fn people() -> Arc<Vec<Row>> {
    Arc::new(vec![
        Row::new().with("id", 3).with("name", "carol").with("age", 41),
        Row::new().with("id", 1).with("name", "alice").with("age", 29),
        Row::new().with("id", 2).with("name", "bob").with("age", 35),
    ])
}

fn config() -> TableConfig {
    TableConfig::new(
        vec![
            Column::new("Name").prop("name"),
            Column::new("Age").prop("age"),
        ],
        vec!["id".into()],
    )
}

fn body_rows(node: &Node) -> Vec<String> {
    let body = node.find_all(Tag::Body);
    body[0]
        .children
        .iter()
        .filter_map(|c| c.as_element())
        .filter(|e| e.tag == Tag::Row)
        .map(|e| e.children[0].text_content())
        .collect()
}

#[test]
fn test_empty_static_heading_is_rejected() {
    let config = TableConfig::new(
        vec![Column::new("Name").prop("name"), Column::new("  ").prop("age")],
        vec!["id".into()],
    );
    let err = Table::new(config, people()).unwrap_err();
    assert_eq!(err, ConfigError::EmptyHeading { index: 1 });
}

#[test]
fn test_duplicate_prop_is_rejected() {
    let config = TableConfig::new(
        vec![Column::new("One").prop("name"), Column::new("Two").prop("name")],
        vec!["id".into()],
    );
    let err = Table::new(config, people()).unwrap_err();
    assert_eq!(err, ConfigError::DuplicateProp { prop: "name".into() });
}

#[test]
fn test_empty_keys_are_rejected() {
    let config = TableConfig::new(vec![Column::new("Name").prop("name")], vec![]);
    let err = Table::new(config, people()).unwrap_err();
    assert_eq!(err, ConfigError::EmptyKeys);
}

#[test]
fn test_zero_item_height_is_rejected() {
    let err = Table::new(config().item_height(0), people()).unwrap_err();
    assert_eq!(err, ConfigError::ZeroItemHeight);
}

#[test]
fn test_zero_content_max_height_is_rejected() {
    let err = Table::new(config().content_max_height(0), people()).unwrap_err();
    assert_eq!(err, ConfigError::ZeroContentMaxHeight);
}

#[test]
fn test_new_table_is_dirty_until_rendered() {
    let table = Table::new(config(), people()).unwrap();
    assert!(table.is_dirty());
    let _ = table.render();
    assert!(!table.is_dirty());
}

#[test]
fn test_initial_sort_with_explicit_order_is_adopted() {
    let table = Table::new(
        config().sort_by(SortState::sorted("name", SortOrder::Asc)),
        people(),
    )
    .unwrap();
    assert_eq!(table.sort_by(), SortState::sorted("name", SortOrder::Asc));
}

#[test]
fn test_initial_sort_with_bare_prop_runs_the_toggle() {
    let table = Table::new(
        config().sort_by(SortState {
            prop: Some("name".into()),
            order: None,
        }),
        people(),
    )
    .unwrap();
    assert_eq!(table.sort_by(), SortState::sorted("name", SortOrder::Desc));
}

#[test]
fn test_initial_sort_fires_callback_with_previous_empty_state() {
    let seen: Arc<Mutex<Vec<SortState>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let config = config()
        .sort_by(SortState::sorted("age", SortOrder::Desc))
        .on_sort(Arc::new(move |previous: &SortState| {
            sink.lock().unwrap().push(previous.clone());
        }));
    let _table = Table::new(config, people()).unwrap();
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], SortState::unsorted());
}

#[test]
fn test_click_header_toggles_desc_then_asc() {
    let table = Table::new(config(), people()).unwrap();
    assert_eq!(table.click_header("name"), EventResult::Consumed);
    assert_eq!(table.sort_by(), SortState::sorted("name", SortOrder::Desc));
    assert_eq!(table.click_header("name"), EventResult::Consumed);
    assert_eq!(table.sort_by(), SortState::sorted("name", SortOrder::Asc));
    assert_eq!(table.click_header("name"), EventResult::Consumed);
    assert_eq!(table.sort_by(), SortState::sorted("name", SortOrder::Desc));
}

#[test]
fn test_click_on_unsortable_column_is_ignored() {
    let config = TableConfig::new(
        vec![
            Column::new("Name").prop("name").sortable(false),
            Column::new("Actions"),
        ],
        vec!["id".into()],
    );
    let table = Table::new(config, people()).unwrap();
    assert_eq!(table.click_header("name"), EventResult::Ignored);
    assert_eq!(table.click_header("missing"), EventResult::Ignored);
    assert_eq!(table.sort_by(), SortState::unsorted());
}

#[test]
fn test_callback_observes_the_replaced_state() {
    let seen: Arc<Mutex<Vec<SortState>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let config = config().on_sort(Arc::new(move |previous: &SortState| {
        sink.lock().unwrap().push(previous.clone());
    }));
    let table = Table::new(config, people()).unwrap();
    table.click_header("name");
    table.click_header("age");
    let seen = seen.lock().unwrap();
    assert_eq!(seen[0], SortState::unsorted());
    assert_eq!(seen[1], SortState::sorted("name", SortOrder::Desc));
}

#[test]
fn test_set_sort_bypasses_the_toggle() {
    let table = Table::new(config(), people()).unwrap();
    table.set_sort(SortState::sorted("age", SortOrder::Asc));
    assert_eq!(table.sort_by(), SortState::sorted("age", SortOrder::Asc));
}

#[test]
fn test_set_data_with_same_handle_does_not_dirty() {
    let data = people();
    let table = Table::new(config(), Arc::clone(&data)).unwrap();
    let _ = table.render();
    table.set_data(Arc::clone(&data));
    assert!(!table.is_dirty());
}

#[test]
fn test_set_data_with_new_allocation_dirties() {
    let data = people();
    let table = Table::new(config(), Arc::clone(&data)).unwrap();
    let _ = table.render();
    // Equal contents, different allocation.
    table.set_data(Arc::new(data.as_ref().clone()));
    assert!(table.is_dirty());
}

#[test]
fn test_render_sorts_without_mutating_source() {
    let data = people();
    let table = Table::new(
        config().sort_by(SortState::sorted("name", SortOrder::Desc)),
        Arc::clone(&data),
    )
    .unwrap();
    let node = table.render();
    assert_eq!(body_rows(&node), vec!["alice", "bob", "carol"]);
    assert_eq!(
        data[0].get("name"),
        Some(&Value::Str("carol".into()))
    );
}

#[test]
fn test_empty_data_renders_placeholder_row() {
    let table = Table::new(config(), Arc::new(vec![])).unwrap();
    let node = table.render();
    let rows = node.find_all(Tag::Body)[0].children.clone();
    assert_eq!(rows.len(), 1);
    let cell = rows[0].as_element().unwrap().children[0].as_element().unwrap();
    assert_eq!(cell.span, Some(2));
    assert_eq!(rows[0].text_content(), "No data.");
}

#[test]
fn test_sortable_headers_carry_sort_action_and_focusability() {
    let table = Table::new(config(), people()).unwrap();
    let node = table.render();
    let headers = node.find_all(Tag::HeaderCell);
    assert_eq!(headers.len(), 2);
    assert_eq!(
        headers[0].action,
        Some(Action::Sort { prop: "name".into() })
    );
    assert_eq!(headers[0].attrs.get("tabindex").map(String::as_str), Some("0"));
    // Unsorted table exposes no direction yet.
    assert!(headers[0].attrs.get("aria-sort").is_none());
    assert_eq!(
        headers[0].attrs.get("aria-label").map(String::as_str),
        Some("name: activate to sort column")
    );
}

#[test]
fn test_sorted_headers_expose_the_direction() {
    let table = Table::new(
        config().sort_by(SortState::sorted("name", SortOrder::Desc)),
        people(),
    )
    .unwrap();
    let node = table.render();
    let headers = node.find_all(Tag::HeaderCell);
    assert_eq!(headers[0].attrs.get("aria-sort").map(String::as_str), Some("desc"));
    assert_eq!(
        headers[0].attrs.get("aria-label").map(String::as_str),
        Some("name: activate to sort column desc")
    );
}

#[test]
fn test_unsortable_header_has_no_action() {
    let config = TableConfig::new(
        vec![Column::new("Actions"), Column::new("Name").prop("name")],
        vec!["id".into()],
    );
    let table = Table::new(config, people()).unwrap();
    let node = table.render();
    let headers = node.find_all(Tag::HeaderCell);
    assert!(headers[0].action.is_none());
    assert!(headers[0].attrs.get("tabindex").is_none());
}

#[test]
fn test_row_keys_are_identity_projections() {
    let table = Table::new(config(), people()).unwrap();
    let node = table.render();
    let keys: Vec<Option<String>> = node
        .find_all(Tag::Body)[0]
        .children
        .iter()
        .filter_map(|c| c.as_element())
        .map(|e| e.key.clone())
        .collect();
    assert_eq!(
        keys,
        vec![Some("3".into()), Some("1".into()), Some("2".into())]
    );
}

#[test]
fn test_row_keys_are_stable_across_resorts() {
    let table = Table::new(config(), people()).unwrap();
    let before = table.render();
    table.click_header("age");
    let after = table.render();
    let key_of = |node: &Node, name: &str| -> Option<String> {
        node.find_all(Tag::Row)
            .iter()
            .find(|r| r.children.iter().any(|c| c.text_content() == name))
            .and_then(|r| r.key.clone())
    };
    assert_eq!(key_of(&before, "alice"), key_of(&after, "alice"));
    assert_eq!(key_of(&before, "carol"), key_of(&after, "carol"));
}

#[test]
fn test_missing_cell_gets_default_content_and_empty_class() {
    let config = TableConfig::new(
        vec![
            Column::new("Name").prop("name"),
            Column::new("Email").prop("email").default_content("n/a"),
        ],
        vec!["id".into()],
    );
    let data = Arc::new(vec![Row::new().with("id", 1).with("name", "alice")]);
    let table = Table::new(config, data).unwrap();
    let node = table.render();
    let cells = node.find_all(Tag::Cell);
    let email = cells[1];
    assert!(email.has_class("empty-cell"));
    assert_eq!(email.children[0].text_content(), "n/a");
}

#[test]
fn test_missing_cell_without_default_renders_empty_text() {
    let config = TableConfig::new(
        vec![Column::new("Email").prop("email")],
        vec!["id".into()],
    );
    let data = Arc::new(vec![Row::new().with("id", 1)]);
    let table = Table::new(config, data).unwrap();
    let node = table.render();
    let cell = node.find_all(Tag::Cell)[0];
    assert!(cell.has_class("empty-cell"));
    assert_eq!(cell.children[0].text_content(), "");
}

#[test]
fn test_custom_render_supplies_cell_content() {
    let config = TableConfig::new(
        vec![Column::new("Name").prop("name").render(|prop, row| {
            row.get(prop).map(|v| Value::Str(v.to_string().to_uppercase()))
        })],
        vec!["id".into()],
    );
    let data = Arc::new(vec![Row::new().with("id", 1).with("name", "alice")]);
    let table = Table::new(config, data).unwrap();
    let node = table.render();
    assert_eq!(node.find_all(Tag::Cell)[0].children[0].text_content(), "ALICE");
}

#[test]
fn test_row_options_attributes_are_applied() {
    let config = config().build_row_options(Arc::new(|row: &Row| {
        let mut attrs = BTreeMap::new();
        if row.get("age") == Some(&Value::Int(29)) {
            attrs.insert("highlight".to_string(), "true".to_string());
        }
        attrs
    }));
    let table = Table::new(config, people()).unwrap();
    let node = table.render();
    let highlighted: Vec<_> = node
        .find_all(Tag::Body)[0]
        .children
        .iter()
        .filter_map(|c| c.as_element())
        .filter(|e| e.attrs.get("highlight").is_some())
        .collect();
    assert_eq!(highlighted.len(), 1);
    assert_eq!(highlighted[0].children[0].text_content(), "alice");
}

#[test]
fn test_header_click_routing_by_x_position() {
    let table = Table::new(config(), people()).unwrap();
    // Two columns over width 20: x < 10 is column 0.
    let click = ClickEvent {
        position: Position::new(3, 0),
        modifiers: Modifiers::NONE,
    };
    assert_eq!(table.on_click(&click, 20), EventResult::Consumed);
    assert_eq!(table.sort_by(), SortState::sorted("name", SortOrder::Desc));
    let click = ClickEvent {
        position: Position::new(15, 0),
        modifiers: Modifiers::NONE,
    };
    assert_eq!(table.on_click(&click, 20), EventResult::Consumed);
    assert_eq!(table.sort_by(), SortState::sorted("age", SortOrder::Desc));
}

#[test]
fn test_keyboard_activation_sorts_the_focused_header() {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    let table = Table::new(config(), people()).unwrap();
    let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    assert_eq!(table.on_key(&enter, 1), EventResult::Consumed);
    assert_eq!(table.sort_by(), SortState::sorted("age", SortOrder::Desc));
    let other = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
    assert_eq!(table.on_key(&other, 1), EventResult::Ignored);
    assert_eq!(table.on_key(&enter, 7), EventResult::Ignored);
}

#[test]
fn test_body_clicks_are_ignored() {
    let table = Table::new(config(), people()).unwrap();
    let click = ClickEvent {
        position: Position::new(3, 2),
        modifiers: Modifiers::NONE,
    };
    assert_eq!(table.on_click(&click, 20), EventResult::Ignored);
    assert_eq!(table.sort_by(), SortState::unsorted());
}

#[test]
fn test_table_class_and_col_group_pass_through() {
    let col_group = trestle::node::Element::new(Tag::Group).key("cols").build();
    let config = config().class_name("roster").col_group(col_group);
    let table = Table::new(config, people()).unwrap();
    let node = table.render();
    let root = node.as_element().unwrap();
    assert!(root.has_class("roster"));
    assert!(root
        .children
        .iter()
        .filter_map(|c| c.as_element())
        .any(|e| e.key.as_deref() == Some("cols")));
}

#[test]
fn test_table_ids_are_unique() {
    let a = Table::new(config(), people()).unwrap();
    let b = Table::new(config(), people()).unwrap();
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_id_display_is_prefixed() {
    let table = Table::new(config(), people()).unwrap();
    assert!(table.id().to_string().starts_with("table-"));
}
