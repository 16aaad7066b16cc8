use super::TicketsService;
use crate::{
    dto::{input, output},
    error::Error,
    repository::{self, InsertedTicket, TicketsRepository},
};
use axum::async_trait;
use std::sync::Arc;
use time::{OffsetDateTime, UtcOffset};

const DELETE_FAILED_TITLE: &str = "An error occurred while deleting the ticket.";

struct TextField {
    name: &'static str,
    max_len: usize,
    missing: &'static str,
    blank: &'static str,
    too_long: &'static str,
}

const USER: TextField = TextField {
    name: "user",
    max_len: 256,
    missing: "user is required",
    blank: "user must not be blank",
    too_long: "user must be at most 256 characters long",
};

const STATUS: TextField = TextField {
    name: "status",
    max_len: 64,
    missing: "status is required",
    blank: "status must not be blank",
    too_long: "status must be at most 64 characters long",
};

struct TicketFields {
    user: String,
    status: String,
}

pub struct TicketsServiceImpl {
    repository: Arc<dyn TicketsRepository>,
}

impl TicketsServiceImpl {
    pub fn new(repository: Arc<dyn TicketsRepository>) -> Self {
        Self { repository }
    }

    fn validate_create(ticket: input::Ticket) -> Result<TicketFields, Error> {
        let mut errors = output::ValidationErrors::default();
        let fields = Self::validate_fields(ticket.user, ticket.status, &mut errors);

        match fields {
            Some(fields) if errors.is_empty() => Ok(fields),
            _ => Err(Error::Validation(errors)),
        }
    }

    ///
    /// created_at can't be later than now, otherwise it
    /// would end up later than updated_at
    ///
    fn validate_update(
        ticket: input::Ticket,
        now: OffsetDateTime,
    ) -> Result<(TicketFields, OffsetDateTime), Error> {
        let mut errors = output::ValidationErrors::default();
        let fields = Self::validate_fields(ticket.user, ticket.status, &mut errors);

        let created_at = match ticket.created_at {
            None => {
                errors.add("created_at", "created_at is required");
                None
            }
            Some(created_at) if created_at > now => {
                errors.add("created_at", "created_at must not be in the future");
                None
            }
            Some(created_at) => Some(created_at.to_offset(UtcOffset::UTC)),
        };

        match (fields, created_at) {
            (Some(fields), Some(created_at)) if errors.is_empty() => Ok((fields, created_at)),
            _ => Err(Error::Validation(errors)),
        }
    }

    fn validate_fields(
        user: Option<String>,
        status: Option<String>,
        errors: &mut output::ValidationErrors,
    ) -> Option<TicketFields> {
        let user = Self::validate_text(user, &USER, errors);
        let status = Self::validate_text(status, &STATUS, errors);

        Some(TicketFields {
            user: user?,
            status: status?,
        })
    }

    fn validate_text(
        value: Option<String>,
        field: &TextField,
        errors: &mut output::ValidationErrors,
    ) -> Option<String> {
        let Some(value) = value else {
            errors.add(field.name, field.missing);
            return None;
        };

        if value.trim().is_empty() {
            errors.add(field.name, field.blank);
            return None;
        }

        if value.chars().count() > field.max_len {
            errors.add(field.name, field.too_long);
            return None;
        }

        Some(value)
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    async fn find_tickets(
        &self,
        input::Pagination {
            page_number,
            page_size,
        }: input::Pagination,
    ) -> Result<Vec<output::Ticket>, Error> {
        tracing::info!(page_number, page_size, "finding tickets");

        if page_number <= 0 || page_size <= 0 {
            return Err(Error::InvalidArgument(Some(
                "pageNumber and pageSize must be positive numbers",
            )));
        }

        let skip = usize::try_from((page_number - 1).saturating_mul(page_size))
            .unwrap_or(usize::MAX);
        let take = usize::try_from(page_size).unwrap_or(usize::MAX);

        let tickets = self.repository.find_all().await?;
        let total = tickets.len();

        let tickets = tickets
            .into_iter()
            .skip(skip)
            .take(take)
            .map(output::Ticket::from)
            .collect::<Vec<_>>();
        tracing::info!(count = tickets.len(), total, "found tickets");

        Ok(tickets)
    }

    async fn find_ticket(&self, id: i64) -> Result<output::Ticket, Error> {
        tracing::info!(id, "finding ticket");

        if id <= 0 {
            return Err(Error::InvalidArgument(Some("id must be a positive number")));
        }

        let ticket = self
            .repository
            .find(id)
            .await?
            .ok_or(Error::TicketNotExist(Some(
                "no ticket found with the given id",
            )))?;

        tracing::info!(id, "found ticket");

        Ok(ticket.into())
    }

    async fn find_user_tickets(
        &self,
        input::TicketFilters { user }: input::TicketFilters,
    ) -> Result<output::UserTickets, Error> {
        tracing::info!("finding user tickets");
        tracing::trace!(?user);

        let user = match user {
            Some(user) if !user.is_empty() => user,
            _ => {
                return Err(Error::InvalidArgument(Some(
                    "user must not be null or empty",
                )))
            }
        };

        let tickets = self.repository.find_by_user(&user).await?;
        if tickets.is_empty() {
            return Err(Error::TicketNotExist(None));
        }
        tracing::info!(count = tickets.len(), "found user tickets");

        Ok(output::UserTickets {
            user,
            tickets: tickets.into_iter().map(output::Ticket::from).collect(),
        })
    }

    async fn create_ticket(
        &self,
        ticket: Option<input::Ticket>,
    ) -> Result<output::Ticket, Error> {
        tracing::info!("creating ticket");
        tracing::trace!(?ticket);

        let ticket = match ticket {
            Some(ticket) if ticket.id == 0 => ticket,
            _ => return Err(Error::InvalidArgument(None)),
        };

        let TicketFields { user, status } = Self::validate_create(ticket)?;

        let created_at = OffsetDateTime::now_utc();
        let ticket = self
            .repository
            .insert(InsertedTicket {
                user,
                status,
                created_at,
                updated_at: created_at,
            })
            .await?;
        tracing::info!(id = ticket.id, "created ticket");

        Ok(ticket.into())
    }

    async fn update_ticket(
        &self,
        ticket: Option<input::Ticket>,
    ) -> Result<output::Ticket, Error> {
        tracing::info!("updating ticket");
        tracing::trace!(?ticket);

        let Some(ticket) = ticket else {
            return Err(Error::InvalidArgument(None));
        };

        let mut existing_ticket = self
            .repository
            .find(ticket.id)
            .await?
            .ok_or(Error::TicketNotExist(None))?;

        let now = OffsetDateTime::now_utc();
        let (TicketFields { user, status }, created_at) = Self::validate_update(ticket, now)?;

        existing_ticket.user = user;
        existing_ticket.status = status;
        existing_ticket.updated_at = now;
        existing_ticket.created_at = created_at;

        match self.repository.update(&existing_ticket).await {
            Ok(updated_ticket) => {
                tracing::info!(id = updated_ticket.id, "updated ticket");
                Ok(updated_ticket.into())
            }
            Err(repository::Error::NoDocumentUpdated) => Err(Error::TicketNotExist(None)),
            Err(err) => Err(Error::Database(err)),
        }
    }

    async fn delete_ticket(&self, id: i64) -> Result<(), Error> {
        tracing::info!(id, "deleting ticket");

        let ticket = self
            .repository
            .find(id)
            .await
            .map_err(|source| Error::DatabaseProblem {
                title: DELETE_FAILED_TITLE,
                source,
            })?
            .ok_or(Error::TicketNotExist(None))?;

        match self.repository.delete(&ticket).await {
            Ok(()) => {
                tracing::info!(id, "deleted ticket");
                Ok(())
            }
            Err(repository::Error::NoDocumentUpdated) => Err(Error::TicketNotExist(None)),
            Err(source) => Err(Error::DatabaseProblem {
                title: DELETE_FAILED_TITLE,
                source,
            }),
        }
    }
}
