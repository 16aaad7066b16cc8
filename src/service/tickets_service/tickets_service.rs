use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    ///
    /// Find page of tickets sorted by id
    ///
    /// ### Errors
    /// - [Error::InvalidArgument] when page number or page size is not positive
    ///
    async fn find_tickets(&self, pagination: input::Pagination)
        -> Result<Vec<output::Ticket>, Error>;

    ///
    /// ### Errors
    /// - [Error::InvalidArgument] when id is not positive
    /// - [Error::TicketNotExist] when ticket with id does not exist
    ///
    async fn find_ticket(&self, id: i64) -> Result<output::Ticket, Error>;

    ///
    /// Find all tickets of the user
    ///
    /// ### Errors
    /// - [Error::InvalidArgument] when user is missing or empty
    /// - [Error::TicketNotExist] when user has no tickets
    ///
    async fn find_user_tickets(
        &self,
        filters: input::TicketFilters,
    ) -> Result<output::UserTickets, Error>;

    ///
    /// Save new ticket. Both timestamps are set to the current time
    ///
    /// ### Errors
    /// - [Error::InvalidArgument] when ticket is missing or already has an id
    /// - [Error::Validation] when fields are invalid
    ///
    async fn create_ticket(&self, ticket: Option<input::Ticket>)
        -> Result<output::Ticket, Error>;

    ///
    /// Overwrite user, status and created_at of existing ticket
    /// and refresh its updated_at
    ///
    /// ### Errors
    /// - [Error::InvalidArgument] when ticket is missing
    /// - [Error::TicketNotExist] when ticket with id does not exist
    /// - [Error::Validation] when fields are invalid
    ///
    async fn update_ticket(&self, ticket: Option<input::Ticket>)
        -> Result<output::Ticket, Error>;

    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when ticket with id does not exist
    /// - [Error::DatabaseProblem] on any database failure
    ///
    async fn delete_ticket(&self, id: i64) -> Result<(), Error>;
}
