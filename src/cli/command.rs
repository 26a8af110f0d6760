use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Path to the contacts CSV file
    #[arg(long, env = "CONTACTS_CSV_PATH")]
    pub store_path: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact first name
        #[arg(long)]
        first_name: String,

        /// Contact last name
        #[arg(long)]
        last_name: String,

        /// Contact address
        #[arg(long)]
        address: String,

        /// Contact email address
        #[arg(long)]
        email: String,

        /// Contact phone number (10 digits)
        #[arg(long)]
        phone: String,
    },
    /// Edit the contact identified by its email.
    /// Only the fields you pass change; the rest keep their current value.
    Edit {
        /// Email of the contact to edit
        #[arg(long)]
        email: String,

        /// Update first name
        #[arg(long)]
        new_first_name: Option<String>,

        /// Update last name
        #[arg(long)]
        new_last_name: Option<String>,

        /// Update address
        #[arg(long)]
        new_address: Option<String>,

        /// Update email address
        #[arg(long)]
        new_email: Option<String>,

        /// Update phone number
        #[arg(long)]
        new_phone: Option<String>,
    },
    /// Delete the contact identified by its email
    Delete {
        /// Email of the contact to delete
        #[arg(long)]
        email: String,
    },
    /// List all contacts
    List,
}
