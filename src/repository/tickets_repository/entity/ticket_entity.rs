use bson::DateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct TicketEntity {
    pub _id: i64,

    pub user: String,
    pub status: String,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}
