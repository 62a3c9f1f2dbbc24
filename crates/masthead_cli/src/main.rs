//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `masthead_core` linkage and logging bootstrap.
//! - Run one deterministic author/magazine scenario and print the derived
//!   queries.

use log::error;
use masthead_core::{
    core_version, flush_logging, init_logging, Author, CatalogService, InMemoryCatalog,
    LoggingConfig,
};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = init_logging(&LoggingConfig::default()) {
        eprintln!("masthead: logging disabled: {err}");
    }

    let code = match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_run module=cli status=error error={err}");
            eprintln!("masthead: {err}");
            ExitCode::FAILURE
        }
    };
    flush_logging();
    code
}

fn run() -> Result<(), Box<dyn Error>> {
    println!("masthead_core version={}", core_version());

    let mut service = CatalogService::new(InMemoryCatalog::new());
    let ama = Author::new("Ama")?;
    let tech = service.create_magazine("Tech Weekly", "Technology")?;
    for title in ["Ownership basics", "Lifetimes in depth", "Traits at work"] {
        service.publish_article(&ama, tech, title)?;
    }

    if let Err(err) = service.create_magazine("A", "Cat") {
        println!("rejected magazine: {err}");
    }

    let author = service.author_summary(&ama);
    println!(
        "author={} articles={} magazines={:?} topic_areas={:?}",
        author.name, author.article_count, author.magazines, author.topic_areas
    );

    let magazine = service.magazine_summary(tech)?;
    println!(
        "magazine={} category={} contributors={:?} contributing_authors={:?}",
        magazine.name, magazine.category, magazine.contributors, magazine.contributing_authors
    );

    match service.top_publisher() {
        Some(top) => println!("top_publisher={}", top.name()),
        None => println!("top_publisher=none"),
    }
    Ok(())
}
