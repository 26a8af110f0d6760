use std::process::exit;

use contact_book::prelude::run_app;

fn main() {
    if let Err(err) = run_app() {
        eprintln!("Error: {}", err);
        exit(1);
    }
}
