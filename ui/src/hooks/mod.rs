pub mod lifecycle;
pub mod use_resource;

pub mod use_activity_logs;
pub mod use_authentication;
pub mod use_bookings;
pub mod use_conversations;
pub mod use_logout;
pub mod use_messages;
pub mod use_notifications;
pub mod use_provider_bookings;
pub mod use_provider_earnings;
pub mod use_provider_schedule;
pub mod use_push_route;
pub mod use_require_auth;
pub mod use_service_detail;
pub mod use_services;
pub mod use_title;

pub use lifecycle::{FetchLifecycle, Snapshot, Ticket};
pub(crate) use use_resource::settle_mutation;
pub use use_resource::{ResourceHandle, use_resource};

pub use use_activity_logs::use_activity_logs;
pub use use_authentication::use_authentication;
pub use use_bookings::use_bookings;
pub use use_conversations::use_conversations;
pub use use_logout::use_logout;
pub use use_messages::use_messages;
pub use use_notifications::use_notifications;
pub use use_provider_bookings::use_provider_bookings;
pub use use_provider_earnings::use_provider_earnings;
pub use use_provider_schedule::use_provider_schedule;
pub use use_push_route::use_push_route;
pub use use_require_auth::use_require_auth;
pub use use_service_detail::use_service_detail;
pub use use_services::use_services;
pub use use_title::use_title;

/// Distinguishes "never fetched" from "fetched but empty".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Fetched(value) => Some(value),
            Self::NotFetched => None,
        }
    }
}
