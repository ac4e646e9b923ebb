use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_logout;
use crate::{Route, State};

fn nav_link(to: Route, label: &str) -> Html {
    html! {
        <Link<Route>
            {to}
            classes="px-3 py-2 rounded-md text-sm font-medium
                     text-neutral-700 dark:text-neutral-300
                     hover:text-neutral-900 dark:hover:text-neutral-100
                     hover:bg-neutral-100 dark:hover:bg-neutral-800
                     transition-colors"
        >
            {label}
        </Link<Route>>
    }
}

/// Top navigation. Links vary with the signed-in user's role.
#[function_component]
pub fn Navbar() -> Html {
    let (state, _) = use_store::<State>();
    let logout = use_logout();

    html! {
        <nav class="border-b border-neutral-200 dark:border-neutral-700
                    bg-white dark:bg-neutral-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center space-x-2">
                        <Link<Route>
                            to={Route::Home}
                            classes="text-lg font-bold text-neutral-900 dark:text-neutral-100 mr-4"
                        >
                            {"SewaBazaar"}
                        </Link<Route>>
                        {nav_link(Route::Services, "Services")}
                        if state.is_authenticated() {
                            {nav_link(Route::Bookings, "My Bookings")}
                            {nav_link(Route::Messages, "Messages")}
                        }
                        if state.is_provider() {
                            {nav_link(Route::ProviderDashboard, "Provider")}
                        }
                        if state.is_admin() {
                            {nav_link(Route::AdminDashboard, "Admin")}
                        }
                    </div>
                    <div class="flex items-center space-x-2">
                        if let Some(user) = state.current_user() {
                            {nav_link(Route::Profile, user.display_name())}
                            <button
                                onclick={logout}
                                class="px-3 py-2 rounded-md text-sm font-medium
                                       text-neutral-600 dark:text-neutral-400
                                       hover:text-neutral-900 dark:hover:text-neutral-100
                                       transition-colors"
                            >
                                {"Sign out"}
                            </button>
                        } else {
                            {nav_link(Route::Login, "Sign in")}
                        }
                    </div>
                </div>
            </div>
        </nav>
    }
}
