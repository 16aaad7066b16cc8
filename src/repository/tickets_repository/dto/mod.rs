mod inserted_ticket;
mod ticket;

pub use inserted_ticket::*;
pub use ticket::*;
