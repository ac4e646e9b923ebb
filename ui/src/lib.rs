use payloads::APIClient;
use std::sync::Arc;
use uuid::Uuid;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod contexts;
pub mod hooks;
mod logs;
pub mod pages;
pub mod session;
mod state;
pub mod utils;

pub use state::{AuthState, State};

use components::{Navbar, ToastContainer};
use contexts::toast::ToastProvider;
use hooks::use_authentication;
use session::BrowserSession;

// Global API client - configurable via environment or same-origin fallback.
// The browser session is injected so every request picks up the current
// bearer token without the client reading storage itself.
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            // Fallback to same origin (current setup)
            let window = web_sys::window().unwrap();
            let location = window.location();
            location.origin().unwrap()
        });

    APIClient::new(address, Arc::new(BrowserSession))
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <ToastProvider>
                <AppContent />
            </ToastProvider>
        </BrowserRouter>
    }
}

#[function_component]
fn AppContent() -> Html {
    use_authentication();

    html! {
        <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
            <Navbar />
            <Switch<Route> render={switch} />
            <ToastContainer />
        </div>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/reset-password")]
    ResetPassword,
    #[at("/services")]
    Services,
    #[at("/services/:id")]
    ServiceDetail { id: Uuid },
    #[at("/bookings")]
    Bookings,
    #[at("/profile")]
    Profile,
    #[at("/messages")]
    Messages,
    #[at("/messages/:id")]
    Conversation { id: Uuid },
    #[at("/provider")]
    ProviderDashboard,
    #[at("/provider/bookings")]
    ProviderBookings,
    #[at("/provider/schedule")]
    ProviderSchedule,
    #[at("/provider/earnings")]
    ProviderEarnings,
    #[at("/admin")]
    AdminDashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <pages::HomePage /> },
        Route::Login => html! { <pages::LoginPage /> },
        Route::ForgotPassword => html! { <pages::ForgotPasswordPage /> },
        Route::ResetPassword => html! { <pages::ResetPasswordPage /> },
        Route::Services => html! { <pages::ServicesPage /> },
        Route::ServiceDetail { id } => html! {
            <pages::ServiceDetailPage service_id={payloads::ServiceId(id)} />
        },
        Route::Bookings => html! { <pages::BookingsPage /> },
        Route::Profile => html! { <pages::ProfilePage /> },
        Route::Messages => html! { <pages::MessagesPage /> },
        Route::Conversation { id } => html! {
            <pages::ConversationPage
                conversation_id={payloads::ConversationId(id)} />
        },
        Route::ProviderDashboard => html! { <pages::ProviderDashboardPage /> },
        Route::ProviderBookings => html! { <pages::ProviderBookingsPage /> },
        Route::ProviderSchedule => html! { <pages::ProviderSchedulePage /> },
        Route::ProviderEarnings => html! { <pages::ProviderEarningsPage /> },
        Route::AdminDashboard => html! { <pages::AdminDashboardPage /> },
        Route::NotFound => html! { <pages::NotFoundPage /> },
    }
}
