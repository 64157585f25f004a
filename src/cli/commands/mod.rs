mod events;
mod users;

pub use events::cmd_list_events;
pub use users::cmd_list_users;
