use clap::{ArgAction, Parser, Subcommand};
use person_core::handlers::{
    ADD_EMAIL_ADDRESSES, ADD_PHONE_NUMBERS, APPLY_FILTERS, CREATE_PERSON, SUBMIT_FILTER_FORM,
};
use person_core::{fields, FormValues, DEFAULT_BASE_URL};

pub const GET_PERSON: &str = "getPerson";
pub const DELETE_PERSON: &str = "deletePerson";
pub const PERSON_ID: &str = "personId";

/// Manage person records through the persons API
#[derive(Parser, Debug)]
#[command(name = "persons", version)]
pub struct Cli {
    /// Person collection endpoint
    #[arg(long, env = "PERSONS_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Log more (-v for debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Create a person. Nothing is validated locally.
    Create {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        surname: String,
        #[arg(long, default_value = "")]
        pin: String,
        /// M or F, any case
        #[arg(long, default_value = "")]
        sex: String,
        /// Comma-separated email addresses
        #[arg(long, default_value = "")]
        emails: String,
        /// Comma-separated phone numbers
        #[arg(long, default_value = "")]
        phones: String,
    },
    /// List people, optionally filtered
    List {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        surname: String,
        #[arg(long, default_value = "")]
        sex: String,
        /// Print each record as raw JSON instead of a table
        #[arg(long)]
        raw: bool,
    },
    /// Show one person
    Get { id: String },
    /// Delete one person
    Delete { id: String },
    /// Append comma-separated phone numbers to a person
    AddPhones { id: String, numbers: String },
    /// Append comma-separated email addresses to a person
    AddEmails { id: String, addresses: String },
}

impl Command {
    /// Handler name and the form it reads.
    pub fn dispatch_args(&self) -> (&'static str, FormValues) {
        match self {
            Command::Create {
                name,
                surname,
                pin,
                sex,
                emails,
                phones,
            } => (
                CREATE_PERSON,
                FormValues::new()
                    .with(fields::NAME, name.as_str())
                    .with(fields::SURNAME, surname.as_str())
                    .with(fields::PIN, pin.as_str())
                    .with(fields::SEX, sex.as_str())
                    .with(fields::EMAIL_ADDRESSES, emails.as_str())
                    .with(fields::PHONE_NUMBERS, phones.as_str()),
            ),
            Command::List {
                name,
                surname,
                sex,
                raw: false,
            } => (
                APPLY_FILTERS,
                FormValues::new()
                    .with(fields::NAME_FILTER, name.as_str())
                    .with(fields::SURNAME_FILTER, surname.as_str())
                    .with(fields::SEX_FILTER, sex.as_str()),
            ),
            Command::List {
                name,
                surname,
                sex,
                raw: true,
            } => (
                SUBMIT_FILTER_FORM,
                FormValues::new()
                    .with(fields::FILTER_NAME, name.as_str())
                    .with(fields::FILTER_SURNAME, surname.as_str())
                    .with(fields::FILTER_SEX, sex.as_str()),
            ),
            Command::Get { id } => (GET_PERSON, FormValues::new().with(PERSON_ID, id.as_str())),
            Command::Delete { id } => (DELETE_PERSON, FormValues::new().with(PERSON_ID, id.as_str())),
            Command::AddPhones { id, numbers } => (
                ADD_PHONE_NUMBERS,
                FormValues::new()
                    .with(fields::PERSON_ID_PHONE, id.as_str())
                    .with(fields::PHONE_NUMBERS_ADD, numbers.as_str()),
            ),
            Command::AddEmails { id, addresses } => (
                ADD_EMAIL_ADDRESSES,
                FormValues::new()
                    .with(fields::PERSON_ID_EMAIL, id.as_str())
                    .with(fields::EMAIL_ADDRESSES_ADD, addresses.as_str()),
            ),
        }
    }
}
