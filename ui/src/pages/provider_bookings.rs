use payloads::{BookingId, BookingStatus};
use yew::prelude::*;

use crate::components::{BookingCard, PaginationControls};
use crate::contexts::toast::use_toast;
use crate::hooks::use_provider_bookings::{
    PROVIDER_BOOKINGS_PAGE_SIZE, ProviderBookingActions,
};
use crate::hooks::use_require_auth::login_form;
use crate::hooks::{use_provider_bookings, use_require_auth, use_title};

fn transition_button(
    actions: &ProviderBookingActions,
    toast: &crate::contexts::toast::ToastHandle,
    booking_id: BookingId,
    status: BookingStatus,
    label: &str,
    classes: &'static str,
) -> Html {
    let actions = actions.clone();
    let toast = toast.clone();
    let onclick = Callback::from(move |_: MouseEvent| {
        let actions = actions.clone();
        let toast = toast.clone();
        yew::platform::spawn_local(async move {
            match actions.update_status(booking_id, status).await {
                Ok(()) => toast.success(format!(
                    "Booking marked {}",
                    status.label().to_lowercase()
                )),
                Err(e) => toast.error(e),
            }
        });
    });

    html! {
        <button {onclick} class={classes}>
            {label.to_string()}
        </button>
    }
}

/// Incoming bookings for the provider, with the lifecycle transitions
/// the provider can request. The backend rejects illegal transitions;
/// the error surfaces as a toast and the list stays as it was.
#[function_component]
pub fn ProviderBookingsPage() -> Html {
    use_title("Provider Bookings");
    let profile = use_require_auth();
    let toast = use_toast();
    let offset = use_state(|| 0i64);

    let hook = use_provider_bookings(*offset);

    if profile.is_none() {
        return login_form();
    }

    let on_offset_change = {
        let offset = offset.clone();
        Callback::from(move |new_offset: i64| {
            offset.set(new_offset);
        })
    };

    let confirm_class = "px-3 py-1.5 text-sm font-medium rounded-md text-white
                         bg-neutral-900 hover:bg-neutral-800
                         dark:bg-neutral-100 dark:text-neutral-900
                         dark:hover:bg-neutral-200 transition-colors";
    let reject_class = "px-3 py-1.5 text-sm font-medium rounded-md
                        text-red-700 dark:text-red-400
                        border border-red-300 dark:border-red-800
                        hover:bg-red-50 dark:hover:bg-red-900/20 transition-colors";

    html! {
        <main class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-6">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                {"Incoming Bookings"}
            </h1>

            {hook.bookings.render("bookings", |page, is_loading, _error| {
                html! {
                    <>
                        if page.results.is_empty() {
                            <p class="text-center py-12 text-neutral-600 dark:text-neutral-400">
                                {"No bookings yet."}
                            </p>
                        }
                        <div class="space-y-4">
                            {for page.results.iter().map(|booking| {
                                let actions = match booking.status {
                                    BookingStatus::Pending => html! {
                                        <>
                                            {transition_button(
                                                &hook.actions, &toast, booking.id,
                                                BookingStatus::Confirmed,
                                                "Confirm", confirm_class,
                                            )}
                                            {transition_button(
                                                &hook.actions, &toast, booking.id,
                                                BookingStatus::Rejected,
                                                "Reject", reject_class,
                                            )}
                                        </>
                                    },
                                    BookingStatus::Confirmed => {
                                        transition_button(
                                            &hook.actions, &toast, booking.id,
                                            BookingStatus::Completed,
                                            "Mark completed", confirm_class,
                                        )
                                    }
                                    BookingStatus::Completed
                                    | BookingStatus::Cancelled
                                    | BookingStatus::Rejected => html! {},
                                };

                                html! {
                                    <BookingCard
                                        key={booking.id.to_string()}
                                        booking={booking.clone()}
                                        {actions}
                                    />
                                }
                            })}
                        </div>
                        <PaginationControls
                            offset={*offset}
                            limit={PROVIDER_BOOKINGS_PAGE_SIZE}
                            total={page.count}
                            on_offset_change={on_offset_change.clone()}
                            {is_loading}
                        />
                    </>
                }
            })}
        </main>
    }
}
