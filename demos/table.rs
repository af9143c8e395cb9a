//! Renders a sortable roster, toggles sorts, and walks the
//! measure-then-window lifecycle, printing the resulting trees.

use std::fs::File;
use std::sync::Arc;

use simplelog::{Config, LevelFilter, WriteLogger};
use trestle::prelude::*;

fn dump(node: &Node, depth: usize) {
    match node {
        Node::Empty => {}
        Node::Text(text) => println!("{:indent$}\"{text}\"", "", indent = depth * 2),
        Node::Elem(element) => {
            let classes = if element.classes.is_empty() {
                String::new()
            } else {
                format!(" .{}", element.classes.join("."))
            };
            let key = element
                .key
                .as_ref()
                .map(|k| format!(" key={k}"))
                .unwrap_or_default();
            println!("{:indent$}<{:?}{classes}{key}>", "", element.tag, indent = depth * 2);
            for child in &element.children {
                dump(child, depth + 1);
            }
        }
    }
}

fn roster() -> Arc<Vec<Row>> {
    Arc::new(vec![
        Row::new().with("id", 1).with("name", "alice").with("age", 29),
        Row::new().with("id", 2).with("name", "bob").with("age", 35),
        Row::new().with("id", 3).with("name", "carol").with("age", 41),
        Row::new().with("id", 4).with("name", "dave"),
    ])
}

fn main() {
    let log_file = File::create("table-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let config = TableConfig::new(
        vec![
            Column::new("Name").prop("name"),
            Column::new("Age").prop("age").default_content("unknown"),
        ],
        vec!["id".into()],
    );
    // Shared cell the sort callback writes into; the host polls its
    // dirty flag the same way it polls the table's.
    let last_replaced: State<SortState> = State::default();
    let sink = last_replaced.clone();
    let config = config
        .class_name("roster")
        .on_sort(Arc::new(move |previous: &SortState| {
            log::info!("sort replaced {:?}/{:?}", previous.prop, previous.order);
            sink.set(previous.clone());
        }));

    let table = Table::new(config, roster()).expect("valid configuration");

    println!("== unsorted ==");
    dump(&table.render(), 0);

    table.click_header("age");
    println!("\n== sorted by age, descending ==");
    dump(&table.render(), 0);

    table.click_header("age");
    println!("\n== sorted by age, ascending ==");
    dump(&table.render(), 0);
    if last_replaced.take_dirty() {
        let previous = last_replaced.get();
        println!("\nlast replaced sort: {:?}/{:?}", previous.prop, previous.order);
    }

    // A height-capped table renders empty, measures on mount, then
    // windows its rows.
    let capped = TableConfig::new(
        vec![Column::new("Name").prop("name")],
        vec!["id".into()],
    )
    .content_max_height(2);
    let big: Arc<Vec<Row>> = Arc::new(
        (0..50)
            .map(|i| Row::new().with("id", i).with("name", format!("row-{i}")))
            .collect(),
    );
    let table = Table::new(capped, big).expect("valid configuration");

    println!("\n== capped, pre-measure ==");
    dump(&table.render(), 0);
    table.did_mount();
    println!("\n== capped, windowed ==");
    dump(&table.render(), 0);
}
