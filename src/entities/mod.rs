pub mod prelude;

pub mod events;
pub mod users;
