use crate::{
    application::ApplicationState,
    dto::{input, output},
    error::Error,
    service::tickets_service::TicketsService,
};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, HeaderName, StatusCode},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

const TICKETS_PATH: &str = "/api/v1/tickets";

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route(
            TICKETS_PATH,
            get(get_tickets).post(post_ticket).put(put_ticket),
        )
        .route("/api/v1/tickets/filter", get(get_user_tickets))
        .route("/api/v1/tickets/:id", get(get_ticket).delete(delete_ticket))
}

fn ticket_location(id: i64) -> String {
    format!("{TICKETS_PATH}/{id}")
}

///
/// Missing or malformed body becomes [None], body over the size limit
/// is rejected with 413 even when it is only detected while reading
///
fn ticket_body(
    body: Result<Json<input::Ticket>, JsonRejection>,
) -> Result<Option<input::Ticket>, Error> {
    match body {
        Ok(Json(ticket)) => Ok(Some(ticket)),
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            Err(Error::PayloadTooLarge)
        }
        Err(_) => Ok(None),
    }
}

async fn get_tickets(
    State(service): State<Arc<dyn TicketsService>>,
    Query(pagination): Query<input::Pagination>,
) -> Result<Json<Vec<output::Ticket>>, Error> {
    let tickets = service.find_tickets(pagination).await?;

    Ok(Json(tickets))
}

async fn get_ticket(
    State(service): State<Arc<dyn TicketsService>>,
    Path(id): Path<i64>,
) -> Result<Json<output::Ticket>, Error> {
    let ticket = service.find_ticket(id).await?;

    Ok(Json(ticket))
}

async fn get_user_tickets(
    State(service): State<Arc<dyn TicketsService>>,
    Query(filters): Query<input::TicketFilters>,
) -> Result<Json<output::UserTickets>, Error> {
    let user_tickets = service.find_user_tickets(filters).await?;

    Ok(Json(user_tickets))
}

async fn post_ticket(
    State(service): State<Arc<dyn TicketsService>>,
    ticket: Result<Json<input::Ticket>, JsonRejection>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<output::Ticket>), Error> {
    let ticket = service.create_ticket(ticket_body(ticket)?).await?;
    let location = ticket_location(ticket.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ticket),
    ))
}

async fn put_ticket(
    State(service): State<Arc<dyn TicketsService>>,
    ticket: Result<Json<input::Ticket>, JsonRejection>,
) -> Result<Json<output::Ticket>, Error> {
    let ticket = service.update_ticket(ticket_body(ticket)?).await?;

    Ok(Json(ticket))
}

async fn delete_ticket(
    State(service): State<Arc<dyn TicketsService>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Error> {
    service.delete_ticket(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
