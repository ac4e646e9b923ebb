use yew::prelude::*;

use crate::components::{BookingCard, PaginationControls};
use crate::contexts::toast::use_toast;
use crate::hooks::use_bookings::BOOKINGS_PAGE_SIZE;
use crate::hooks::{use_bookings, use_require_auth, use_title};
use crate::hooks::use_require_auth::login_form;

/// The customer's bookings with pagination and cancellation.
#[function_component]
pub fn BookingsPage() -> Html {
    use_title("My Bookings");
    let profile = use_require_auth();
    let toast = use_toast();
    let offset = use_state(|| 0i64);

    let hook = use_bookings(*offset);

    if profile.is_none() {
        return login_form();
    }

    let on_offset_change = {
        let offset = offset.clone();
        Callback::from(move |new_offset: i64| {
            offset.set(new_offset);
        })
    };

    html! {
        <main class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-6">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                {"My Bookings"}
            </h1>

            {hook.bookings.render("bookings", |page, is_loading, _error| {
                html! {
                    <>
                        if hook.bookings.is_stale {
                            <p class="text-sm text-amber-600 dark:text-amber-400">
                                {"Showing previously loaded bookings; refresh failed."}
                            </p>
                        }
                        if page.results.is_empty() {
                            <p class="text-center py-12 text-neutral-600 dark:text-neutral-400">
                                {"You haven't booked anything yet."}
                            </p>
                        }
                        <div class="space-y-4">
                            {for page.results.iter().map(|booking| {
                                let actions = if booking.status.is_cancellable() {
                                    let cancel = hook.actions.clone();
                                    let toast = toast.clone();
                                    let booking_id = booking.id;
                                    let onclick = Callback::from(move |_: MouseEvent| {
                                        let cancel = cancel.clone();
                                        let toast = toast.clone();
                                        yew::platform::spawn_local(async move {
                                            match cancel.cancel(booking_id, None).await {
                                                Ok(()) => toast.success("Booking cancelled"),
                                                Err(e) => toast.error(e),
                                            }
                                        });
                                    });
                                    html! {
                                        <button
                                            {onclick}
                                            class="px-3 py-1.5 text-sm font-medium rounded-md
                                                   text-red-700 dark:text-red-400
                                                   border border-red-300 dark:border-red-800
                                                   hover:bg-red-50 dark:hover:bg-red-900/20
                                                   transition-colors"
                                        >
                                            {"Cancel booking"}
                                        </button>
                                    }
                                } else {
                                    html! {}
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
                            limit={BOOKINGS_PAGE_SIZE}
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
