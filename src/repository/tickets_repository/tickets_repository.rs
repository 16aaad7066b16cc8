use super::{InsertedTicket, Ticket};
use crate::repository;
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    async fn find(&self, id: i64) -> Result<Option<Ticket>, repository::Error>;

    ///
    /// Finds all tickets sorted by id in ascending order
    ///
    async fn find_all(&self) -> Result<Vec<Ticket>, repository::Error>;

    async fn find_by_user(&self, user: &str) -> Result<Vec<Ticket>, repository::Error>;

    ///
    /// Inserts new ticket with the next id from the tickets sequence
    ///
    async fn insert(&self, ticket: InsertedTicket) -> Result<Ticket, repository::Error>;

    ///
    /// Replaces stored ticket with the same id and returns it
    /// as it was stored
    ///
    /// ### Errors
    /// - [repository::Error::NoDocumentUpdated] when ticket does not exist
    ///
    async fn update(&self, ticket: &Ticket) -> Result<Ticket, repository::Error>;

    ///
    /// ### Errors
    /// - [repository::Error::NoDocumentUpdated] when ticket does not exist
    ///
    async fn delete(&self, ticket: &Ticket) -> Result<(), repository::Error>;

    async fn count(&self) -> Result<u64, repository::Error>;
}
