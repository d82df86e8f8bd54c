//! Domain DTOs for the person API.
//!
//! # Design
//! These types mirror the server's JSON schema but are defined independently
//! of the mock-server crate; integration tests catch any schema drift.
//! `PersonRecord` keeps whatever object the server sent; fields are read
//! through tolerant accessors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::form_urlencoded;

use crate::parse::parse_list;

/// Request payload for creating a person.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewPerson {
    pub name: String,
    pub surname: String,
    pub pin: String,
    pub sex: String,
    #[serde(default)]
    pub email_addresses: Vec<String>,
    #[serde(default)]
    pub phone_numbers: Vec<String>,
}

impl NewPerson {
    /// Build the payload from raw form text.
    ///
    /// `sex` is upper-cased and the two list fields go through `parse_list`.
    /// Nothing else is normalized: a blank pin is sent as-is.
    pub fn from_raw(
        name: &str,
        surname: &str,
        pin: &str,
        sex: &str,
        email_addresses: &str,
        phone_numbers: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            surname: surname.to_string(),
            pin: pin.to_string(),
            sex: sex.to_uppercase(),
            email_addresses: parse_list(email_addresses),
            phone_numbers: parse_list(phone_numbers),
        }
    }
}

/// A person as returned by the API.
///
/// Holds the JSON object exactly as received, keys in server order. The
/// accessors never fail: a missing field or one of an unexpected type reads
/// as `None`, and numbers or booleans read as their JSON text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct PersonRecord(Map<String, Value>);

impl PersonRecord {
    /// The server-assigned id, string or number.
    pub fn id(&self) -> Option<String> {
        self.text("id")
    }

    pub fn name(&self) -> Option<String> {
        self.text("name")
    }

    pub fn surname(&self) -> Option<String> {
        self.text("surname")
    }

    pub fn pin(&self) -> Option<String> {
        self.text("pin")
    }

    pub fn sex(&self) -> Option<String> {
        self.text("sex")
    }

    pub fn email_addresses(&self) -> Option<Vec<String>> {
        self.texts("emailAddresses")
    }

    pub fn phone_numbers(&self) -> Option<Vec<String>> {
        self.texts("phoneNumbers")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Compact JSON text of the record as received.
    pub fn to_json(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }

    fn text(&self, key: &str) -> Option<String> {
        self.0.get(key).and_then(scalar_text)
    }

    // Non-scalar elements are skipped.
    fn texts(&self, key: &str) -> Option<Vec<String>> {
        match self.0.get(key)? {
            Value::Array(items) => Some(items.iter().filter_map(scalar_text).collect()),
            _ => None,
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Optional equality constraints for a list query.
///
/// An empty string counts as absent; whitespace is left alone so callers
/// decide whether to trim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub sex: Option<String>,
}

impl Filter {
    pub fn new(name: &str, surname: &str, sex: &str) -> Self {
        Self {
            name: non_empty(name),
            surname: non_empty(surname),
            sex: non_empty(sex),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs().next().is_none()
    }

    /// Form-urlencoded query in `name`, `surname`, `sex` order, or `None`
    /// when no key is set.
    pub fn query_string(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.pairs() {
            serializer.append_pair(key, value);
        }
        Some(serializer.finish())
    }

    fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("name", self.name.as_deref()),
            ("surname", self.surname.as_deref()),
            ("sex", self.sex.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| match value {
            Some(v) if !v.is_empty() => Some((key, v)),
            _ => None,
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Body of an "append phone numbers" request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumbersRequest {
    pub phone_numbers: Vec<String>,
}

/// Body of an "append email addresses" request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmailAddressesRequest {
    pub email_addresses: Vec<String>,
}
