use payloads::BookingStatus;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_require_auth::login_form;
use crate::hooks::{
    use_provider_bookings, use_provider_earnings, use_require_auth, use_title,
};
use crate::utils::format_price;
use crate::Route;

fn dashboard_link(to: Route, title: &str, description: &str) -> Html {
    html! {
        <Link<Route>
            {to}
            classes="block bg-white dark:bg-neutral-800 rounded-lg shadow-md p-6
                     hover:shadow-lg transition-shadow"
        >
            <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                {title}
            </h3>
            <p class="text-sm text-neutral-600 dark:text-neutral-400 mt-1">
                {description}
            </p>
        </Link<Route>>
    }
}

/// Provider landing page: quick stats plus links into the dedicated
/// bookings, schedule, and earnings views.
#[function_component]
pub fn ProviderDashboardPage() -> Html {
    use_title("Provider Dashboard");
    let profile = use_require_auth();
    let earnings = use_provider_earnings();
    let bookings = use_provider_bookings(0);

    let Some(profile) = profile else {
        return login_form();
    };

    let pending_count = bookings
        .bookings
        .data
        .as_ref()
        .map(|page| {
            page.results
                .iter()
                .filter(|b| b.status == BookingStatus::Pending)
                .count()
        })
        .unwrap_or(0);

    html! {
        <main class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-8">
            <div>
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {format!("Welcome back, {}", profile.display_name())}
                </h1>
                <p class="text-sm text-neutral-600 dark:text-neutral-400 mt-1">
                    if pending_count > 0 {
                        {format!("{pending_count} booking(s) waiting for your confirmation")}
                    } else {
                        {"No bookings waiting for confirmation"}
                    }
                </p>
            </div>

            {earnings.render("earnings", |report, _is_loading, _error| {
                html! {
                    <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                        <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-md p-4">
                            <p class="text-sm text-neutral-500 dark:text-neutral-400">{"This month"}</p>
                            <p class="text-xl font-bold text-neutral-900 dark:text-neutral-100">
                                {format_price(&report.this_month)}
                            </p>
                        </div>
                        <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-md p-4">
                            <p class="text-sm text-neutral-500 dark:text-neutral-400">{"Pending payouts"}</p>
                            <p class="text-xl font-bold text-neutral-900 dark:text-neutral-100">
                                {format_price(&report.pending_payouts)}
                            </p>
                        </div>
                        <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-md p-4">
                            <p class="text-sm text-neutral-500 dark:text-neutral-400">{"Total earnings"}</p>
                            <p class="text-xl font-bold text-neutral-900 dark:text-neutral-100">
                                {format_price(&report.total_earnings)}
                            </p>
                        </div>
                    </div>
                }
            })}

            <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                {dashboard_link(
                    Route::ProviderBookings,
                    "Bookings",
                    "Confirm, complete, or reject incoming bookings",
                )}
                {dashboard_link(
                    Route::ProviderSchedule,
                    "Schedule",
                    "Set weekly hours and block out time off",
                )}
                {dashboard_link(
                    Route::ProviderEarnings,
                    "Earnings",
                    "Monthly breakdown and CSV export",
                )}
            </div>
        </main>
    }
}
