use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tokio::{net::TcpListener, sync::RwLock};

pub mod error;
pub mod model;
pub mod validate;

pub use error::{AppError, ErrorResponse, FieldError};
pub use model::{AddEmailAddresses, AddPhoneNumbers, CreatePerson, FilterParams, Person, Sex};

pub const PERSONS_PATH: &str = "/api/v1/persons";

#[derive(Debug, Default)]
pub struct Store {
    last_id: u64,
    persons: BTreeMap<u64, Person>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route(PERSONS_PATH, get(list_persons).post(create_person))
        .route("/api/v1/persons/", get(list_persons).post(create_person))
        .route("/api/v1/persons/{id}", get(get_person).delete(delete_person))
        .route("/api/v1/persons/{id}/phone-numbers", post(add_phone_numbers))
        .route("/api/v1/persons/{id}/addresses", post(add_email_addresses))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_persons(
    State(db): State<Db>,
    Query(params): Query<FilterParams>,
) -> Result<Json<Vec<Person>>, AppError> {
    let sex = params
        .sex
        .as_deref()
        .map(str::parse::<Sex>)
        .transpose()
        .map_err(|msg| AppError::new(StatusCode::BAD_REQUEST, msg))?;
    let name = params.name.map(|n| n.to_lowercase());
    let surname = params.surname.map(|s| s.to_lowercase());

    let store = db.read().await;
    let persons = store
        .persons
        .values()
        .filter(|p| p.matches(name.as_deref(), surname.as_deref(), sex))
        .cloned()
        .collect();
    Ok(Json(persons))
}

async fn create_person(
    State(db): State<Db>,
    Json(input): Json<CreatePerson>,
) -> Result<(StatusCode, Json<Person>), AppError> {
    let sex = validate::new_person(&input)?;

    let mut store = db.write().await;
    if store.persons.values().any(|p| p.pin == input.pin) {
        return Err(AppError::new(
            StatusCode::CONFLICT,
            format!("Person with pin {} already exists.", input.pin),
        ));
    }
    store.last_id += 1;
    let mut person = Person {
        id: store.last_id,
        name: input.name,
        surname: input.surname,
        pin: input.pin,
        sex,
        email_addresses: Vec::new(),
        phone_numbers: Vec::new(),
    };
    person.add_email_addresses(input.email_addresses);
    person.add_phone_numbers(input.phone_numbers);
    log::debug!("created person {}", person.id);
    store.persons.insert(person.id, person.clone());
    Ok((StatusCode::CREATED, Json(person)))
}

async fn get_person(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Person>, AppError> {
    let store = db.read().await;
    store
        .persons
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found(id))
}

async fn delete_person(State(db): State<Db>, Path(id): Path<u64>) -> Result<StatusCode, AppError> {
    let mut store = db.write().await;
    store
        .persons
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| AppError::not_found(id))
}

// Bodies are validated before the id is looked up.
async fn add_phone_numbers(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<AddPhoneNumbers>,
) -> Result<(StatusCode, Json<Person>), AppError> {
    validate::phone_numbers(&input.phone_numbers)?;
    let mut store = db.write().await;
    let person = store.persons.get_mut(&id).ok_or_else(|| AppError::not_found(id))?;
    person.add_phone_numbers(input.phone_numbers);
    Ok((StatusCode::CREATED, Json(person.clone())))
}

async fn add_email_addresses(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<AddEmailAddresses>,
) -> Result<(StatusCode, Json<Person>), AppError> {
    validate::email_addresses(&input.email_addresses)?;
    let mut store = db.write().await;
    let person = store.persons.get_mut(&id).ok_or_else(|| AppError::not_found(id))?;
    person.add_email_addresses(input.email_addresses);
    Ok((StatusCode::CREATED, Json(person.clone())))
}
