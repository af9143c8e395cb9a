//! Opens and closes a modal over a detached overlay, printing what the
//! host sees at each step.

use std::fs::File;
use std::sync::Arc;

use simplelog::{Config, LevelFilter, WriteLogger};
use trestle::prelude::*;

fn main() {
    let log_file = File::create("modal-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut modal = Modal::new(DetachedOverlay::new())
        .title("Delete roster")
        .size(ModalSize::Sm)
        .content(Element::new(Tag::Container).text("This cannot be undone.").into())
        .footer(Element::new(Tag::Container).text("[Cancel] [Delete]").into())
        .on_open(Arc::new(|| log::info!("modal opened")))
        .on_close(Arc::new(|| log::info!("modal closed")));

    println!("mounted before open: {}", modal.host().is_mounted());
    modal.open();
    println!("mounted after open: {}", modal.host().is_mounted());
    if let Some(content) = modal.host().content() {
        println!("overlay text: {}", content.text_content());
    }

    modal.set_content(Element::new(Tag::Container).text("Still sure?").into());
    if let Some(content) = modal.host().content() {
        println!("after update: {}", content.text_content());
    }

    modal.close();
    println!("mounted after close: {}", modal.host().is_mounted());
}
