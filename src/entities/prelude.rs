pub use super::events::Entity as Events;
pub use super::users::Entity as Users;
