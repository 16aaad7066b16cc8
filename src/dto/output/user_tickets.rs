use super::Ticket;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserTickets {
    pub user: String,
    pub tickets: Vec<Ticket>,
}
