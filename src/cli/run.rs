use clap::Parser;

use crate::cli::command::{Cli, Commands};
use crate::domain::book::ContactBook;
use crate::domain::contact::Contact;
use crate::errors::AppError;

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut book = ContactBook::open(cli.store_path.as_deref())?;

    match cli.command {
        Commands::Add {
            first_name,
            last_name,
            address,
            email,
            phone,
        } => {
            let candidate = Contact::new(first_name, last_name, address, email, phone);
            book.add(candidate)?;

            println!("Contact added successfully");
            Ok(())
        }

        Commands::Edit {
            email,
            new_first_name,
            new_last_name,
            new_address,
            new_email,
            new_phone,
        } => {
            // Pre-fill from the current record, like an edit form would
            let current = book
                .find(&email)
                .ok_or(AppError::NotFound("Contact".to_string()))?;

            let edited = Contact::new(
                new_first_name.unwrap_or(current.first_name.clone()),
                new_last_name.unwrap_or(current.last_name.clone()),
                new_address.unwrap_or(current.address.clone()),
                new_email.unwrap_or(current.email.clone()),
                new_phone.unwrap_or(current.phone.clone()),
            );

            book.update(&email, edited)?;

            println!("Contact updated successfully");
            Ok(())
        }

        Commands::Delete { email } => {
            book.delete(&email)?;

            println!("Contact deleted successfully");
            Ok(())
        }

        Commands::List => {
            if book.list().is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            for (mut i, c) in book.list().iter().enumerate() {
                i += 1;
                println!(
                    "{i:>3}. {:<15} {:<15} {:^30} {:15} {}",
                    c.first_name, c.last_name, c.email, c.phone, c.address
                );
            }
            Ok(())
        }
    }
}
