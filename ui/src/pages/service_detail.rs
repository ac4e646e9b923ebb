use jiff::civil;
use jiff::tz::TimeZone;
use payloads::{ServiceId, requests};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::contexts::toast::use_toast;
use crate::hooks::{use_push_route, use_service_detail, use_title};
use crate::utils::format_price;
use crate::{Route, State, get_api_client};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub service_id: ServiceId,
}

/// Parse the value of a `datetime-local` input in the user's timezone.
fn parse_scheduled_at(value: &str) -> Result<jiff::Timestamp, String> {
    let datetime: civil::DateTime = value
        .parse()
        .map_err(|_| "Please pick a valid date and time".to_string())?;
    let zoned = datetime
        .to_zoned(TimeZone::system())
        .map_err(|e| e.to_string())?;
    Ok(zoned.timestamp())
}

#[function_component]
pub fn ServiceDetailPage(props: &Props) -> Html {
    use_title("Service");
    let (state, _) = use_store::<State>();
    let toast = use_toast();
    let push_route = use_push_route();

    let service = use_service_detail(props.service_id);

    let scheduled_ref = use_node_ref();
    let address_ref = use_node_ref();
    let note_ref = use_node_ref();
    let is_booking = use_state(|| false);
    let form_error = use_state(|| None::<String>);

    let on_book = {
        let scheduled_ref = scheduled_ref.clone();
        let address_ref = address_ref.clone();
        let note_ref = note_ref.clone();
        let is_booking = is_booking.clone();
        let form_error = form_error.clone();
        let toast = toast.clone();
        let push_route = push_route.clone();
        let service_id = props.service_id;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let scheduled_value =
                scheduled_ref.cast::<HtmlInputElement>().unwrap().value();
            let address =
                address_ref.cast::<HtmlInputElement>().unwrap().value();
            let note =
                note_ref.cast::<HtmlTextAreaElement>().unwrap().value();

            let scheduled_at = match parse_scheduled_at(&scheduled_value) {
                Ok(ts) => ts,
                Err(message) => {
                    form_error.set(Some(message));
                    return;
                }
            };

            let request = requests::CreateBooking {
                service_id,
                scheduled_at,
                address: (!address.is_empty()).then_some(address),
                note: (!note.is_empty()).then_some(note),
            };

            let is_booking = is_booking.clone();
            let form_error = form_error.clone();
            let toast = toast.clone();
            let push_route = push_route.clone();

            yew::platform::spawn_local(async move {
                is_booking.set(true);
                form_error.set(None);

                match get_api_client().create_booking(&request).await {
                    Ok(booking) => {
                        toast.success(format!(
                            "Booked! Your booking number is {}",
                            booking.booking_number
                        ));
                        push_route.emit(Route::Bookings);
                    }
                    Err(e) => {
                        form_error.set(Some(e.to_string()));
                    }
                }

                is_booking.set(false);
            });
        })
    };

    let input_class = "w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600 rounded-md
                       bg-white dark:bg-neutral-700 text-neutral-900 dark:text-neutral-100
                       focus:outline-none focus:ring-2 focus:ring-neutral-500";

    html! {
        <main class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            {service.render("service", |service, _is_loading, _error| {
                html! {
                    <div class="space-y-6">
                        if let Some(image_url) = &service.image_url {
                            <img
                                src={image_url.clone()}
                                alt={service.title.clone()}
                                class="w-full h-64 object-cover rounded-lg"
                            />
                        }

                        <div class="space-y-2">
                            <span class="text-xs font-medium uppercase tracking-wide
                                         text-neutral-500 dark:text-neutral-400">
                                {&service.category}
                            </span>
                            <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                                {&service.title}
                            </h1>
                            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                {format!("by {}", service.provider.display_name())}
                                if let Some(rating) = service.rating {
                                    {format!(" · ★ {:.1} ({} reviews)", rating, service.review_count)}
                                }
                            </p>
                            <p class="text-xl font-bold text-neutral-900 dark:text-neutral-100">
                                {format_price(&service.price)}
                                <span class="text-sm font-normal text-neutral-500 dark:text-neutral-400">
                                    {format!(" · {} min", service.duration_minutes)}
                                </span>
                            </p>
                        </div>

                        <p class="text-neutral-700 dark:text-neutral-300 whitespace-pre-line">
                            {&service.description}
                        </p>

                        if state.is_authenticated() {
                            <form onsubmit={on_book.clone()} class="bg-white dark:bg-neutral-800 rounded-lg shadow-md p-6 space-y-4">
                                <h2 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                                    {"Book this service"}
                                </h2>

                                if let Some(error) = &*form_error {
                                    <div class="p-3 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                                        <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                                    </div>
                                }

                                <div>
                                    <label for="scheduled-at" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                                        {"Date and time"}
                                    </label>
                                    <input
                                        ref={scheduled_ref.clone()}
                                        type="datetime-local"
                                        id="scheduled-at"
                                        required={true}
                                        class={input_class}
                                    />
                                </div>

                                <div>
                                    <label for="address" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                                        {"Service address (optional)"}
                                    </label>
                                    <input
                                        ref={address_ref.clone()}
                                        type="text"
                                        id="address"
                                        placeholder="Where should the provider come?"
                                        class={input_class}
                                    />
                                </div>

                                <div>
                                    <label for="note" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                                        {"Note to the provider (optional)"}
                                    </label>
                                    <textarea
                                        ref={note_ref.clone()}
                                        id="note"
                                        rows="3"
                                        class={input_class}
                                    />
                                </div>

                                <button
                                    type="submit"
                                    disabled={*is_booking}
                                    class="w-full bg-neutral-900 dark:bg-white text-white dark:text-neutral-900
                                           px-4 py-2 rounded-md hover:bg-neutral-800 dark:hover:bg-neutral-100
                                           disabled:opacity-50 disabled:cursor-not-allowed font-medium"
                                >
                                    {if *is_booking { "Booking..." } else { "Book now" }}
                                </button>
                            </form>
                        } else {
                            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                {"Sign in to book this service."}
                            </p>
                        }
                    </div>
                }
            })}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datetime_local_values_parse() {
        assert!(parse_scheduled_at("2026-08-28T14:30").is_ok());
        assert!(parse_scheduled_at("not-a-date").is_err());
        assert!(parse_scheduled_at("").is_err());
    }
}
