use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    M,
    F,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::M => write!(f, "M"),
            Sex::F => write!(f, "F"),
        }
    }
}

/// Lenient parse used for query parameters: surrounding whitespace and
/// case are ignored.
impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "M" => Ok(Sex::M),
            "F" => Ok(Sex::F),
            _ => Err(format!("Invalid value for Sex: {s}")),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: u64,
    pub name: String,
    pub surname: String,
    pub pin: String,
    pub sex: Sex,
    pub email_addresses: Vec<String>,
    pub phone_numbers: Vec<String>,
}

impl Person {
    /// Name and surname match as case-insensitive substrings; `sex` exactly.
    /// Needles must already be lower-cased.
    pub fn matches(&self, name: Option<&str>, surname: Option<&str>, sex: Option<Sex>) -> bool {
        name.map_or(true, |n| self.name.to_lowercase().contains(n))
            && surname.map_or(true, |s| self.surname.to_lowercase().contains(s))
            && sex.map_or(true, |s| self.sex == s)
    }

    pub fn add_phone_numbers(&mut self, numbers: Vec<String>) {
        extend_unique(&mut self.phone_numbers, numbers);
    }

    pub fn add_email_addresses(&mut self, addresses: Vec<String>) {
        extend_unique(&mut self.email_addresses, addresses);
    }
}

/// Set semantics with first-insertion order.
pub(crate) fn extend_unique(target: &mut Vec<String>, items: Vec<String>) {
    for item in items {
        if !target.contains(&item) {
            target.push(item);
        }
    }
}

/// Body of a create request. Everything is optional here so that missing
/// fields come back as validation errors rather than decode failures.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatePerson {
    pub name: String,
    pub surname: String,
    pub pin: String,
    pub sex: Option<String>,
    pub email_addresses: Vec<String>,
    pub phone_numbers: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddPhoneNumbers {
    pub phone_numbers: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddEmailAddresses {
    pub email_addresses: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub sex: Option<String>,
}
