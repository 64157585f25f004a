pub mod password;
pub use password::PasswordHasher;

pub mod auth_service;
pub mod auth_service_impl;
pub use auth_service::{AuthError, AuthService};
pub use auth_service_impl::SeaOrmAuthService;

pub mod event_service;
pub mod event_service_impl;
pub use event_service::{EventDraft, EventError, EventService};
pub use event_service_impl::SeaOrmEventService;
