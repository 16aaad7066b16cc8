mod counter_entity;
mod ticket_entity;

pub use counter_entity::*;
pub use ticket_entity::*;
