mod problem_details;
mod ticket;
mod user_tickets;
mod validation_errors;

pub use problem_details::*;
pub use ticket::*;
pub use user_tickets::*;
pub use validation_errors::*;
