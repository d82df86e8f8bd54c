//! `PersonClient` bound to a `Transport`: one call per user action.
//!
//! # Design
//! Each method is a single request/response cycle with no retries. List
//! requests are tagged per render target; a response that arrives after a
//! newer request for the same target was issued is dropped instead of
//! overwriting fresher data. That holds for failures too: a superseded
//! request that fails reports `Stale`, not its error. The staleness check
//! and the render run under the target's lock, so a newer render cannot
//! land between them.

use log::debug;

use crate::client::PersonClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::parse::parse_list;
use crate::render::{Renderer, Target};
use crate::sequence::ListSequencer;
use crate::types::{EmailAddressesRequest, Filter, NewPerson, PersonRecord, PhoneNumbersRequest};
use crate::view::View;

/// What became of a list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOutcome {
    /// The target region now shows this many records.
    Rendered(usize),
    /// A newer request for the same region was issued meanwhile.
    Stale,
}

pub struct PersonApp {
    client: PersonClient,
    transport: Box<dyn Transport + Send + Sync>,
    table_requests: ListSequencer,
    list_requests: ListSequencer,
}

impl PersonApp {
    pub fn new(client: PersonClient, transport: impl Transport + Send + Sync + 'static) -> Self {
        Self {
            client,
            transport: Box::new(transport),
            table_requests: ListSequencer::new(),
            list_requests: ListSequencer::new(),
        }
    }

    pub fn client(&self) -> &PersonClient {
        &self.client
    }

    pub fn create_person(&self, person: &NewPerson) -> Result<PersonRecord, ApiError> {
        let request = self.client.build_create_person(person)?;
        let response = self.transport.execute(request)?;
        self.client.parse_create_person(response)
    }

    /// Query the collection and hand the records to `renderer`.
    pub fn load_people(
        &self,
        filter: &Filter,
        renderer: &dyn Renderer,
        view: &mut dyn View,
    ) -> Result<ListOutcome, ApiError> {
        let sequencer = match renderer.target() {
            Target::Table => &self.table_requests,
            Target::List => &self.list_requests,
        };
        let tag = sequencer.next();
        let request = self.client.build_list_persons(filter);
        debug!("list request #{tag}: {}", request.path);

        let result = self
            .transport
            .execute(request)
            .and_then(|response| self.client.parse_list_persons(response));

        let rendered = sequencer.run_if_latest(tag, || -> Result<usize, ApiError> {
            let people = result?;
            renderer.render(&people, view);
            Ok(people.len())
        });
        match rendered {
            Some(count) => count.map(ListOutcome::Rendered),
            None => {
                debug!("dropping stale list response #{tag}");
                Ok(ListOutcome::Stale)
            }
        }
    }

    pub fn get_person(&self, id: &str) -> Result<PersonRecord, ApiError> {
        let response = self.transport.execute(self.client.build_get_person(id))?;
        self.client.parse_get_person(response)
    }

    pub fn delete_person(&self, id: &str) -> Result<(), ApiError> {
        let response = self.transport.execute(self.client.build_delete_person(id))?;
        self.client.parse_delete_person(response)
    }

    /// `text` is comma-separated and goes through `parse_list`.
    pub fn add_phone_numbers(&self, id: &str, text: &str) -> Result<PersonRecord, ApiError> {
        let input = PhoneNumbersRequest {
            phone_numbers: parse_list(text),
        };
        let request = self.client.build_add_phone_numbers(id, &input)?;
        let response = self.transport.execute(request)?;
        self.client.parse_add_phone_numbers(response)
    }

    pub fn add_email_addresses(&self, id: &str, text: &str) -> Result<PersonRecord, ApiError> {
        let input = EmailAddressesRequest {
            email_addresses: parse_list(text),
        };
        let request = self.client.build_add_email_addresses(id, &input)?;
        let response = self.transport.execute(request)?;
        self.client.parse_add_email_addresses(response)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{mpsc, Mutex};

    use super::*;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};
    use crate::render::{ListRenderer, TableRenderer};
    use crate::view::MemoryView;

    /// Answers every request with the same response and remembers the
    /// requests it saw.
    struct Canned {
        status: u16,
        body: String,
        seen: Mutex<Vec<HttpRequest>>,
    }

    impl Canned {
        fn new(status: u16, body: &str) -> Self {
            Self {
                status,
                body: body.to_string(),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl Transport for std::sync::Arc<Canned> {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.seen.lock().unwrap().push(request);
            Ok(HttpResponse {
                status: self.status,
                headers: Vec::new(),
                body: self.body.clone(),
            })
        }
    }

    fn app_with(canned: &std::sync::Arc<Canned>) -> PersonApp {
        PersonApp::new(PersonClient::new("http://api/persons"), canned.clone())
    }

    #[test]
    fn load_people_renders_table() {
        let canned = std::sync::Arc::new(Canned::new(
            200,
            r#"[{"name":"Ana","emailAddresses":["a@x.hr"]},{"name":"Ivo"}]"#,
        ));
        let app = app_with(&canned);
        let mut view = MemoryView::default();

        let outcome = app
            .load_people(&Filter::new("", "", "F"), &TableRenderer, &mut view)
            .unwrap();

        assert_eq!(outcome, ListOutcome::Rendered(2));
        assert_eq!(view.table[0].email_addresses, "a@x.hr");
        assert_eq!(view.table[1].email_addresses, "");
        let seen = canned.seen.lock().unwrap();
        assert_eq!(seen[0].method, HttpMethod::Get);
        assert_eq!(seen[0].path, "http://api/persons/?sex=F");
    }

    #[test]
    fn load_people_error_leaves_view_untouched() {
        let canned = std::sync::Arc::new(Canned::new(500, "boom"));
        let app = app_with(&canned);
        let mut view = MemoryView::default();
        view.list = vec!["old".to_string()];

        let err = app
            .load_people(&Filter::default(), &ListRenderer, &mut view)
            .unwrap_err();

        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
        assert_eq!(view.list, vec!["old".to_string()]);
    }

    #[test]
    fn add_phone_numbers_parses_text() {
        let canned = std::sync::Arc::new(Canned::new(201, r#"{"id":42,"phoneNumbers":["555"]}"#));
        let app = app_with(&canned);

        let updated = app.add_phone_numbers("42", " 555 ,, ").unwrap();

        assert_eq!(updated.phone_numbers(), Some(vec!["555".to_string()]));
        let seen = canned.seen.lock().unwrap();
        assert_eq!(seen[0].path, "http://api/persons/42/phone-numbers");
        assert_eq!(seen[0].body.as_deref(), Some(r#"{"phoneNumbers":["555"]}"#));
    }

    #[test]
    fn add_email_addresses_not_found() {
        let canned = std::sync::Arc::new(Canned::new(404, "no person 9"));
        let app = app_with(&canned);

        let err = app.add_email_addresses("9", "a@x.hr").unwrap_err();

        assert_eq!(err.response_body(), Some("no person 9"));
        let seen = canned.seen.lock().unwrap();
        assert_eq!(seen[0].path, "http://api/persons/9/addresses");
    }

    /// First request blocks until released and then answers with `first`;
    /// later requests answer at once with a one-record list.
    struct Gated {
        gate: Mutex<Option<mpsc::Receiver<()>>>,
        entered: Mutex<Option<mpsc::Sender<()>>>,
        first: (u16, &'static str),
    }

    impl Transport for Gated {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            let gate = self.gate.lock().unwrap().take();
            let (status, body) = match gate {
                Some(release) => {
                    if let Some(entered) = self.entered.lock().unwrap().take() {
                        entered.send(()).unwrap();
                    }
                    release.recv().unwrap();
                    self.first
                }
                None => (200, r#"[{"name":"new"}]"#),
            };
            assert!(request.path.starts_with("http://api/persons/"));
            Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            })
        }
    }

    /// Issues a gated request, then a second one that completes first, then
    /// releases the gate. Returns the outcome and view of the first request.
    fn overtaken(first: (u16, &'static str)) -> (Result<ListOutcome, ApiError>, MemoryView) {
        let (release_tx, release_rx) = mpsc::channel();
        let (entered_tx, entered_rx) = mpsc::channel();
        let app = PersonApp::new(
            PersonClient::new("http://api/persons"),
            Gated {
                gate: Mutex::new(Some(release_rx)),
                entered: Mutex::new(Some(entered_tx)),
                first,
            },
        );

        std::thread::scope(|s| {
            let first = s.spawn(|| {
                let mut view = MemoryView::default();
                let outcome = app.load_people(&Filter::default(), &TableRenderer, &mut view);
                (outcome, view)
            });

            entered_rx.recv().unwrap();
            let mut view = MemoryView::default();
            let outcome = app
                .load_people(&Filter::new("new", "", ""), &TableRenderer, &mut view)
                .unwrap();
            assert_eq!(outcome, ListOutcome::Rendered(1));
            assert_eq!(view.table[0].name, "new");

            release_tx.send(()).unwrap();
            first.join().unwrap()
        })
    }

    #[test]
    fn late_response_for_superseded_request_is_dropped() {
        let (outcome, view) = overtaken((200, r#"[{"name":"old"}]"#));
        assert_eq!(outcome.unwrap(), ListOutcome::Stale);
        assert!(view.table.is_empty());
    }

    #[test]
    fn late_failure_for_superseded_request_is_dropped() {
        let (outcome, view) = overtaken((500, "boom"));
        assert_eq!(outcome.unwrap(), ListOutcome::Stale);
        assert!(view.table.is_empty());
        assert!(view.notifications.is_empty());
    }

    #[test]
    fn table_and_list_requests_are_sequenced_independently() {
        let canned = std::sync::Arc::new(Canned::new(200, "[]"));
        let app = app_with(&canned);
        let table_tag = app.table_requests.next();
        app.list_requests.next();
        assert!(app.table_requests.is_latest(table_tag));
    }
}
