mod pagination;
mod ticket;
mod ticket_filters;

pub use pagination::*;
pub use ticket::*;
pub use ticket_filters::*;
