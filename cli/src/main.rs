use std::process::ExitCode;

use clap::Parser;
use person_core::{ApiError, Dispatch, FormValues, HandlerRegistry, PersonApp, PersonClient, View};

mod args;
mod terminal;
mod transport;

use args::{Cli, DELETE_PERSON, GET_PERSON, PERSON_ID};
use terminal::TerminalView;
use transport::UreqTransport;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose > 0 { "debug" } else { "info" };
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(default_filter));

    let app = PersonApp::new(PersonClient::new(&cli.base_url), UreqTransport::new());
    let mut view = TerminalView::new(std::io::stdout().lock());
    let (handler, form) = cli.command.dispatch_args();

    match registry().dispatch(handler, &app, &form, &mut view) {
        Dispatch::Completed => ExitCode::SUCCESS,
        Dispatch::Failed | Dispatch::Unknown => ExitCode::FAILURE,
    }
}

/// The standard person handlers plus lookup and delete by id.
fn registry() -> HandlerRegistry {
    let mut registry = HandlerRegistry::standard();
    registry.register(GET_PERSON, "fetching person", Box::new(get_person));
    registry.register(DELETE_PERSON, "deleting person", Box::new(delete_person));
    registry
}

fn get_person(app: &PersonApp, form: &FormValues, view: &mut dyn View) -> Result<(), ApiError> {
    let person = app.get_person(form.get(PERSON_ID))?;
    view.notify(&serde_json::to_string_pretty(&person).unwrap_or_default());
    Ok(())
}

fn delete_person(app: &PersonApp, form: &FormValues, view: &mut dyn View) -> Result<(), ApiError> {
    let id = form.get(PERSON_ID);
    app.delete_person(id)?;
    view.notify(&format!("Person {id} deleted"));
    Ok(())
}
