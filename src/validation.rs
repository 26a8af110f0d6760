use regex::Regex;

use crate::errors::AppError;

pub fn validate_email(email: &str) -> bool {
    // Email must contain '@' and '.' somewhere
    email.contains('@') && email.contains('.')
}

pub fn validate_phone(phone: &str) -> Result<bool, AppError> {
    // Exactly 10 digits, nothing else
    let re = Regex::new(r"^\d{10}$")?;
    Ok(re.is_match(phone))
}
