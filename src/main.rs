//! Contact Book - demonstration driver
//!
//! Builds a small address book, edits and searches a record, then removes one.
//! Results go to stdout; logs go to stderr.

use anyhow::Result;
use contact_book::{AddressBook, Config, Record};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only, RUST_LOG overrides LOG_LEVEL)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");

    if let Err(e) = run(&config) {
        error!("Demonstration failed: {}", e);
        return Err(e);
    }

    info!("Demonstration complete");
    Ok(())
}

fn run(config: &Config) -> Result<()> {
    let mut book = AddressBook::new();

    let mut john_record = Record::new("John")?;
    john_record.add_phone("1234567890")?;
    john_record.add_phone("5555555555")?;
    book.add_record(john_record);

    let mut jane_record = Record::new("Jane")?;
    jane_record.add_phone("9876543210")?;
    book.add_record(jane_record);

    for record in &book {
        println!("{}", record);
    }

    if let Some(john) = book.find_mut("John") {
        john.edit_phone("1234567890", "1112223333")?;
        println!("{}", john);

        if let Some(found_phone) = john.find_phone("5555555555") {
            println!("{}: {}", john.name(), found_phone);
        }
    }

    book.delete("Jane");
    info!(records = book.len(), "Deleted Jane");

    if config.print_json {
        println!("{}", serde_json::to_string_pretty(&book)?);
    }

    Ok(())
}
