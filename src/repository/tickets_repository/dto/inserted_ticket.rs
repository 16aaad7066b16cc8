use time::OffsetDateTime;

///
/// Ticket that has not been assigned an id yet
///
#[derive(Debug, Clone, PartialEq)]
pub struct InsertedTicket {
    pub user: String,
    pub status: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}
