pub use crate::cli::{command, run_app};
pub use crate::domain::{
    book::ContactBook,
    contact::{Contact, DuplicateKind},
};
pub use crate::errors::AppError;
pub use crate::storage::{self, csv::CsvStorage, memory::MemStorage, ContactStorage};
