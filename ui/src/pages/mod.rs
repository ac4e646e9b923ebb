mod admin_dashboard;
mod bookings;
mod conversation;
mod forgot_password;
mod home;
mod login;
mod messages;
mod not_found;
mod profile;
mod provider_bookings;
mod provider_dashboard;
mod provider_earnings;
mod provider_schedule;
mod reset_password;
mod service_detail;
mod services;

pub use admin_dashboard::AdminDashboardPage;
pub use bookings::BookingsPage;
pub use conversation::ConversationPage;
pub use forgot_password::ForgotPasswordPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use messages::MessagesPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use provider_bookings::ProviderBookingsPage;
pub use provider_dashboard::ProviderDashboardPage;
pub use provider_earnings::ProviderEarningsPage;
pub use provider_schedule::ProviderSchedulePage;
pub use reset_password::ResetPasswordPage;
pub use service_detail::ServiceDetailPage;
pub use services::ServicesPage;
