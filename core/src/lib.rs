//! Client core for the person directory API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). A front end supplies a
//! `Transport` and a `View`, then drives the named handlers in
//! `HandlerRegistry` from its own events.
//!
//! # Design
//! - `PersonClient` is stateless; it holds only the collection URL, which is
//!   injected rather than compiled in.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit.
//! - One query builder (`Filter::query_string`) feeds two renderers: the
//!   people table and the raw JSON list.
//! - HTTP error bodies reach the user; transport failures are logged.

pub mod app;
pub mod client;
pub mod error;
pub mod form;
pub mod handlers;
pub mod http;
pub mod parse;
pub mod render;
pub mod sequence;
pub mod types;
pub mod view;

pub use app::{ListOutcome, PersonApp};
pub use client::{PersonClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use form::{fields, FormValues};
pub use handlers::{Dispatch, HandlerRegistry};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use parse::parse_list;
pub use render::{ListRenderer, Renderer, TableRenderer, Target};
pub use types::{EmailAddressesRequest, Filter, NewPerson, PersonRecord, PhoneNumbersRequest};
pub use view::{MemoryView, TableRow, View};
