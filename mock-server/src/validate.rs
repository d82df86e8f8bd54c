//! Request validation, reported field by field.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{AppError, FieldError};
use crate::model::{CreatePerson, Sex};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("email pattern compiles"));

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9]{1,3}-[0-9\s]{7,15}$").expect("phone pattern compiles")
});

pub fn new_person(input: &CreatePerson) -> Result<Sex, AppError> {
    let mut errors = Vec::new();

    if input.name.trim().is_empty() {
        errors.push(FieldError::new("name", "Name is required", input.name.as_str()));
    }
    if input.surname.trim().is_empty() {
        errors.push(FieldError::new("surname", "Surname is required", input.surname.as_str()));
    }
    if let Some(message) = pin_problem(&input.pin) {
        errors.push(FieldError::new("pin", message, input.pin.as_str()));
    }

    // Body values must be the exact enum name; only query params are lenient.
    let sex = match input.sex.as_deref() {
        Some("M") => Some(Sex::M),
        Some("F") => Some(Sex::F),
        Some(other) => {
            errors.push(FieldError::new("sex", &format!("Invalid value for Sex: {other}"), other));
            None
        }
        None => {
            errors.push(FieldError::new("sex", "must not be null", serde_json::Value::Null));
            None
        }
    };

    errors.extend(email_problems(&input.email_addresses));
    errors.extend(phone_problems(&input.phone_numbers));

    match sex {
        Some(sex) if errors.is_empty() => Ok(sex),
        _ => Err(AppError::validation(errors)),
    }
}

pub fn phone_numbers(numbers: &[String]) -> Result<(), AppError> {
    let errors = phone_problems(numbers);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation(errors))
    }
}

pub fn email_addresses(addresses: &[String]) -> Result<(), AppError> {
    let errors = email_problems(addresses);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation(errors))
    }
}

fn pin_problem(pin: &str) -> Option<&'static str> {
    if pin.trim().is_empty() {
        Some("PIN is required")
    } else if pin.chars().count() != 11 {
        Some("PIN must be exactly 11 digits")
    } else if !pin.chars().all(|c| c.is_ascii_digit()) {
        Some("PIN must consist of digits only")
    } else {
        None
    }
}

fn email_problems(addresses: &[String]) -> Vec<FieldError> {
    list_problems(
        "emailAddresses[]",
        addresses,
        &EMAIL,
        "Email cannot be blank",
        "Invalid email format",
    )
}

fn phone_problems(numbers: &[String]) -> Vec<FieldError> {
    list_problems(
        "phoneNumbers[]",
        numbers,
        &PHONE,
        "Phone number cannot be blank",
        "Invalid phone number",
    )
}

fn list_problems(
    field: &str,
    items: &[String],
    pattern: &Regex,
    blank: &str,
    invalid: &str,
) -> Vec<FieldError> {
    items
        .iter()
        .filter_map(|item| {
            if item.trim().is_empty() {
                Some(FieldError::new(field, blank, item.as_str()))
            } else if !pattern.is_match(item) {
                Some(FieldError::new(field, invalid, item.as_str()))
            } else {
                None
            }
        })
        .collect()
}
