use std::sync::Arc;

use trestle::column::Column;
use trestle::node::{Element, Node, Tag};
use trestle::row::Row;
use trestle::table::{Table, TableConfig};
use trestle::transitions::TransitionGroup;

fn keyed(key: &str) -> Node {
    Element::new(Tag::Row).key(key).into()
}

fn keys_with_class(node: &Node, class: &str) -> Vec<String> {
    node.as_element()
        .map(|group| {
            group
                .children
                .iter()
                .filter_map(|c| c.as_element())
                .filter(|e| e.has_class(class))
                .filter_map(|e| e.key.clone())
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn test_group_carries_the_transition_name() {
    let mut group = TransitionGroup::new("fade");
    let node = group.reconcile(vec![keyed("a")]);
    let element = node.as_element().unwrap();
    assert_eq!(element.tag, Tag::Group);
    assert_eq!(element.attrs.get("transition").map(String::as_str), Some("fade"));
}

#[test]
fn test_first_generation_children_all_enter() {
    let mut group = TransitionGroup::new("fade");
    let node = group.reconcile(vec![keyed("a"), keyed("b")]);
    assert_eq!(keys_with_class(&node, "fade-enter"), vec!["a", "b"]);
}

#[test]
fn test_surviving_children_do_not_reenter() {
    let mut group = TransitionGroup::new("fade");
    let _ = group.reconcile(vec![keyed("a")]);
    let node = group.reconcile(vec![keyed("a"), keyed("b")]);
    assert_eq!(keys_with_class(&node, "fade-enter"), vec!["b"]);
}

#[test]
fn test_removed_children_leave_for_one_generation() {
    let mut group = TransitionGroup::new("fade");
    let _ = group.reconcile(vec![keyed("a"), keyed("b")]);
    let node = group.reconcile(vec![keyed("a")]);
    assert_eq!(keys_with_class(&node, "fade-leave"), vec!["b"]);
    // Gone for good on the generation after.
    let node = group.reconcile(vec![keyed("a")]);
    assert!(keys_with_class(&node, "fade-leave").is_empty());
    assert_eq!(node.as_element().unwrap().children.len(), 1);
}

#[test]
fn test_reappearing_key_cancels_the_leave() {
    let mut group = TransitionGroup::new("fade");
    let _ = group.reconcile(vec![keyed("a"), keyed("b")]);
    let _ = group.reconcile(vec![keyed("a")]);
    let node = group.reconcile(vec![keyed("a"), keyed("b")]);
    assert!(keys_with_class(&node, "fade-leave").is_empty());
}

#[test]
fn test_table_transition_wraps_rows_in_a_group() {
    let config = TableConfig::new(
        vec![Column::new("Name").prop("name")],
        vec!["id".into()],
    )
    .transition(true);
    let data = Arc::new(vec![Row::new().with("id", 1).with("name", "alice")]);
    let table = Table::new(config, data).unwrap();
    let node = table.render();
    let body = node.find_all(Tag::Body);
    let group = body[0].children[0].as_element().unwrap();
    assert_eq!(group.tag, Tag::Group);
    assert_eq!(
        group.attrs.get("transition").map(String::as_str),
        Some("table-row")
    );
    let row = group.children[0].as_element().unwrap();
    assert!(row.has_class("table-row-enter"));
}

#[test]
fn test_table_row_removal_leaves_through_the_group() {
    let config = TableConfig::new(
        vec![Column::new("Name").prop("name")],
        vec!["id".into()],
    )
    .transition(true);
    let data = Arc::new(vec![
        Row::new().with("id", 1).with("name", "alice"),
        Row::new().with("id", 2).with("name", "bob"),
    ]);
    let table = Table::new(config, Arc::clone(&data)).unwrap();
    let _ = table.render();
    table.set_data(Arc::new(vec![data[0].clone()]));
    let node = table.render();
    let group = node.find_all(Tag::Body)[0].children[0].as_element().unwrap();
    let leaving: Vec<_> = group
        .children
        .iter()
        .filter_map(|c| c.as_element())
        .filter(|e| e.has_class("table-row-leave"))
        .collect();
    assert_eq!(leaving.len(), 1);
    assert_eq!(leaving[0].key.as_deref(), Some("2"));
}
