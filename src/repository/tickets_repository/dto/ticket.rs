use crate::repository::tickets_repository::entity::TicketEntity;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i64,

    pub user: String,
    pub status: String,

    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<TicketEntity> for Ticket {
    fn from(value: TicketEntity) -> Self {
        Self {
            id: value._id,
            user: value.user,
            status: value.status,
            created_at: value.created_at.into(),
            updated_at: value.updated_at.into(),
        }
    }
}

impl From<&Ticket> for TicketEntity {
    fn from(value: &Ticket) -> Self {
        Self {
            _id: value.id,
            user: value.user.clone(),
            status: value.status.clone(),
            created_at: value.created_at.into(),
            updated_at: value.updated_at.into(),
        }
    }
}
