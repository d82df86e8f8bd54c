//! Named handlers a front end binds to its own events.
//!
//! # Design
//! A handler reads `FormValues`, performs one `PersonApp` call and writes
//! successes to the `View`. Failures come back to `dispatch`, which applies a
//! single policy for every handler: HTTP error responses are shown to the
//! user with their body text, everything else (transport failures, bodies
//! that do not decode) is only logged.

use std::collections::BTreeMap;

use log::{error, info, warn};

use crate::app::{ListOutcome, PersonApp};
use crate::error::ApiError;
use crate::form::{fields, FormValues};
use crate::render::{ListRenderer, TableRenderer};
use crate::types::{Filter, NewPerson, PersonRecord};
use crate::view::View;

pub const CREATE_PERSON: &str = "createPerson";
pub const LOAD_PEOPLE: &str = "loadPeople";
pub const APPLY_FILTERS: &str = "applyFilters";
pub const SUBMIT_FILTER_FORM: &str = "submitFilterForm";
pub const ADD_PHONE_NUMBERS: &str = "addPhoneNumbers";
pub const ADD_EMAIL_ADDRESSES: &str = "addEmailAddresses";

pub type Handler =
    Box<dyn Fn(&PersonApp, &FormValues, &mut dyn View) -> Result<(), ApiError> + Send + Sync>;

/// Result of `HandlerRegistry::dispatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Completed,
    Failed,
    Unknown,
}

struct Entry {
    /// Used in user messages: "Error <action>: ...".
    action: &'static str,
    handler: Handler,
}

#[derive(Default)]
pub struct HandlerRegistry {
    entries: BTreeMap<String, Entry>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the six person handlers.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(CREATE_PERSON, "creating person", Box::new(create_person));
        registry.register(LOAD_PEOPLE, "loading people", Box::new(load_people));
        registry.register(APPLY_FILTERS, "loading people", Box::new(apply_filters));
        registry.register(SUBMIT_FILTER_FORM, "fetching persons", Box::new(submit_filter_form));
        registry.register(ADD_PHONE_NUMBERS, "adding phone numbers", Box::new(add_phone_numbers));
        registry.register(
            ADD_EMAIL_ADDRESSES,
            "adding email addresses",
            Box::new(add_email_addresses),
        );
        registry
    }

    /// Replaces any handler already registered under `name`.
    pub fn register(&mut self, name: &str, action: &'static str, handler: Handler) {
        self.entries.insert(name.to_string(), Entry { action, handler });
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn dispatch(
        &self,
        name: &str,
        app: &PersonApp,
        form: &FormValues,
        view: &mut dyn View,
    ) -> Dispatch {
        let Some(entry) = self.entries.get(name) else {
            warn!("no handler registered for {name:?}");
            return Dispatch::Unknown;
        };
        match (entry.handler)(app, form, view) {
            Ok(()) => Dispatch::Completed,
            Err(err) => {
                report(entry.action, &err, view);
                Dispatch::Failed
            }
        }
    }
}

fn report(action: &str, err: &ApiError, view: &mut dyn View) {
    match err.response_body() {
        Some(body) => view.notify(&format!("Error {action}: {body}")),
        None => error!("Error {action}: {err}"),
    }
}

fn pretty(record: &PersonRecord) -> String {
    serde_json::to_string_pretty(record).unwrap_or_default()
}

fn create_person(app: &PersonApp, form: &FormValues, _view: &mut dyn View) -> Result<(), ApiError> {
    let person = NewPerson::from_raw(
        form.get(fields::NAME),
        form.get(fields::SURNAME),
        form.get(fields::PIN),
        form.get(fields::SEX),
        form.get(fields::EMAIL_ADDRESSES),
        form.get(fields::PHONE_NUMBERS),
    );
    let created = app.create_person(&person)?;
    info!("Person created:\n{}", pretty(&created));
    Ok(())
}

fn render_table(app: &PersonApp, filter: &Filter, view: &mut dyn View) -> Result<(), ApiError> {
    if let ListOutcome::Rendered(count) = app.load_people(filter, &TableRenderer, view)? {
        info!("loaded {count} people");
    }
    Ok(())
}

fn load_people(app: &PersonApp, _form: &FormValues, view: &mut dyn View) -> Result<(), ApiError> {
    render_table(app, &Filter::default(), view)
}

fn apply_filters(app: &PersonApp, form: &FormValues, view: &mut dyn View) -> Result<(), ApiError> {
    let filter = Filter::new(
        form.get(fields::NAME_FILTER).trim(),
        form.get(fields::SURNAME_FILTER).trim(),
        form.get(fields::SEX_FILTER),
    );
    render_table(app, &filter, view)
}

fn submit_filter_form(
    app: &PersonApp,
    form: &FormValues,
    view: &mut dyn View,
) -> Result<(), ApiError> {
    let filter = Filter::new(
        form.get(fields::FILTER_NAME),
        form.get(fields::FILTER_SURNAME),
        form.get(fields::FILTER_SEX),
    );
    app.load_people(&filter, &ListRenderer, view)?;
    Ok(())
}

fn add_phone_numbers(app: &PersonApp, form: &FormValues, view: &mut dyn View) -> Result<(), ApiError> {
    let updated = app.add_phone_numbers(
        form.get(fields::PERSON_ID_PHONE),
        form.get(fields::PHONE_NUMBERS_ADD),
    )?;
    view.notify(&format!("Phone numbers added:\n{}", pretty(&updated)));
    Ok(())
}

fn add_email_addresses(
    app: &PersonApp,
    form: &FormValues,
    view: &mut dyn View,
) -> Result<(), ApiError> {
    let updated = app.add_email_addresses(
        form.get(fields::PERSON_ID_EMAIL),
        form.get(fields::EMAIL_ADDRESSES_ADD),
    )?;
    view.notify(&format!("Email addresses added:\n{}", pretty(&updated)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::PersonClient;
    use crate::http::{HttpRequest, HttpResponse, Transport};
    use crate::view::MemoryView;

    struct Refused;

    impl Transport for Refused {
        fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
            Err(ApiError::Transport("connection refused".to_string()))
        }
    }

    struct Fixed(u16, &'static str);

    impl Transport for Fixed {
        fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
            Ok(HttpResponse {
                status: self.0,
                headers: Vec::new(),
                body: self.1.to_string(),
            })
        }
    }

    fn app(transport: impl Transport + Send + Sync + 'static) -> PersonApp {
        PersonApp::new(PersonClient::default(), transport)
    }

    #[test]
    fn standard_registry_has_all_handlers() {
        let registry = HandlerRegistry::standard();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(
            names,
            vec![
                ADD_EMAIL_ADDRESSES,
                ADD_PHONE_NUMBERS,
                APPLY_FILTERS,
                CREATE_PERSON,
                LOAD_PEOPLE,
                SUBMIT_FILTER_FORM,
            ]
        );
    }

    #[test]
    fn unknown_handler() {
        let mut view = MemoryView::default();
        let outcome =
            HandlerRegistry::standard().dispatch("nope", &app(Refused), &FormValues::new(), &mut view);
        assert_eq!(outcome, Dispatch::Unknown);
    }

    #[test]
    fn transport_failure_is_not_shown_to_user() {
        let mut view = MemoryView::default();
        let outcome = HandlerRegistry::standard().dispatch(
            CREATE_PERSON,
            &app(Refused),
            &FormValues::new(),
            &mut view,
        );
        assert_eq!(outcome, Dispatch::Failed);
        assert!(view.notifications.is_empty());
    }

    #[test]
    fn http_error_is_shown_verbatim_for_every_flow() {
        let registry = HandlerRegistry::standard();
        let app = app(Fixed(500, "database unavailable"));
        for name in [
            CREATE_PERSON,
            LOAD_PEOPLE,
            APPLY_FILTERS,
            SUBMIT_FILTER_FORM,
            ADD_PHONE_NUMBERS,
            ADD_EMAIL_ADDRESSES,
        ] {
            let mut view = MemoryView::default();
            assert_eq!(registry.dispatch(name, &app, &FormValues::new(), &mut view), Dispatch::Failed);
            assert_eq!(view.notifications.len(), 1, "{name}");
            assert!(view.notifications[0].ends_with(": database unavailable"), "{name}");
        }
    }

    #[test]
    fn undecodable_body_is_only_logged() {
        let mut view = MemoryView::default();
        let outcome = HandlerRegistry::standard().dispatch(
            LOAD_PEOPLE,
            &app(Fixed(200, "<html>")),
            &FormValues::new(),
            &mut view,
        );
        assert_eq!(outcome, Dispatch::Failed);
        assert!(view.notifications.is_empty());
        assert!(view.table.is_empty());
    }

    #[test]
    fn filter_form_lists_records_as_received() {
        let mut view = MemoryView::default();
        let outcome = HandlerRegistry::standard().dispatch(
            SUBMIT_FILTER_FORM,
            &app(Fixed(200, r#"[{"name":"Ana","version":3}]"#)),
            &FormValues::new(),
            &mut view,
        );
        assert_eq!(outcome, Dispatch::Completed);
        assert_eq!(view.list, vec![r#"{"name":"Ana","version":3}"#.to_string()]);
    }

    #[test]
    fn string_ids_still_fill_the_table() {
        let mut view = MemoryView::default();
        let outcome = HandlerRegistry::standard().dispatch(
            LOAD_PEOPLE,
            &app(Fixed(200, r#"[{"id":"a1b2","name":"Ana"}]"#)),
            &FormValues::new(),
            &mut view,
        );
        assert_eq!(outcome, Dispatch::Completed);
        assert_eq!(view.table.len(), 1);
        assert_eq!(view.table[0].name, "Ana");
    }

    #[test]
    fn create_does_not_touch_the_table() {
        let mut view = MemoryView::default();
        let form = FormValues::new().with(fields::NAME, "Ana");
        let outcome = HandlerRegistry::standard().dispatch(
            CREATE_PERSON,
            &app(Fixed(201, r#"{"id":1,"name":"Ana"}"#)),
            &form,
            &mut view,
        );
        assert_eq!(outcome, Dispatch::Completed);
        assert!(view.table.is_empty());
        assert!(view.notifications.is_empty());
    }

    #[test]
    fn append_success_shows_updated_record() {
        let mut view = MemoryView::default();
        let form = FormValues::new()
            .with(fields::PERSON_ID_EMAIL, "1")
            .with(fields::EMAIL_ADDRESSES_ADD, "a@x.hr");
        let outcome = HandlerRegistry::standard().dispatch(
            ADD_EMAIL_ADDRESSES,
            &app(Fixed(201, r#"{"id":1,"emailAddresses":["a@x.hr"]}"#)),
            &form,
            &mut view,
        );
        assert_eq!(outcome, Dispatch::Completed);
        assert!(view.notifications[0].starts_with("Email addresses added:\n"));
        assert!(view.notifications[0].contains("a@x.hr"));
    }

    #[test]
    fn custom_handler_can_replace_a_standard_one() {
        let mut registry = HandlerRegistry::standard();
        registry.register(
            LOAD_PEOPLE,
            "loading people",
            Box::new(
                |_: &PersonApp, _: &FormValues, view: &mut dyn View| -> Result<(), ApiError> {
                    view.notify("custom");
                    Ok(())
                },
            ),
        );
        let mut view = MemoryView::default();
        registry.dispatch(LOAD_PEOPLE, &app(Refused), &FormValues::new(), &mut view);
        assert_eq!(view.notifications, vec!["custom".to_string()]);
    }
}
