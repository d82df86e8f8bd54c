//! Raw form input keyed by field identifier.

use std::collections::HashMap;

/// Field identifiers of the person forms. Front ends key `FormValues` by
/// these.
pub mod fields {
    pub const NAME: &str = "name";
    pub const SURNAME: &str = "surname";
    pub const PIN: &str = "pin";
    pub const SEX: &str = "sex";
    pub const EMAIL_ADDRESSES: &str = "emailAddresses";
    pub const PHONE_NUMBERS: &str = "phoneNumbers";

    pub const NAME_FILTER: &str = "nameFilter";
    pub const SURNAME_FILTER: &str = "surnameFilter";
    pub const SEX_FILTER: &str = "sexFilter";

    pub const FILTER_NAME: &str = "filterName";
    pub const FILTER_SURNAME: &str = "filterSurname";
    pub const FILTER_SEX: &str = "filterSex";

    pub const PERSON_ID_PHONE: &str = "personIdPhone";
    pub const PHONE_NUMBERS_ADD: &str = "phoneNumbersAdd";
    pub const PERSON_ID_EMAIL: &str = "personIdEmail";
    pub const EMAIL_ADDRESSES_ADD: &str = "emailAddressesAdd";
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: HashMap<String, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
    }

    /// Value of `field`, or `""` if the form has no such field.
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
