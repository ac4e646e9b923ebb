use payloads::{BookingStatus, responses};
use yew::prelude::*;

use crate::utils::{format_price, format_timestamp};

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: BookingStatus,
}

/// Colored pill for a booking's lifecycle state.
#[function_component]
pub fn StatusBadge(props: &StatusBadgeProps) -> Html {
    let classes = match props.status {
        BookingStatus::Pending => {
            "bg-yellow-100 text-yellow-800 dark:bg-yellow-900 dark:text-yellow-300"
        }
        BookingStatus::Confirmed => {
            "bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-300"
        }
        BookingStatus::Completed => {
            "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-300"
        }
        BookingStatus::Cancelled | BookingStatus::Rejected => {
            "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-300"
        }
    };

    html! {
        <span class={format!(
            "inline-block px-2 py-1 rounded-full text-xs font-medium {}",
            classes
        )}>
            {props.status.label()}
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub booking: responses::Booking,
    /// Action buttons rendered in the card footer (cancel, confirm, ...).
    #[prop_or_default]
    pub actions: Html,
}

/// One booking in a list, shared between the customer and provider
/// views. The caller supplies whatever actions its role permits.
#[function_component]
pub fn BookingCard(props: &Props) -> Html {
    let booking = &props.booking;

    html! {
        <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-md p-4 space-y-3">
            <div class="flex items-center justify-between">
                <div>
                    <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                        {&booking.service.title}
                    </h3>
                    <p class="text-xs text-neutral-500 dark:text-neutral-400">
                        {&booking.booking_number}
                    </p>
                </div>
                <StatusBadge status={booking.status} />
            </div>

            <div class="text-sm text-neutral-600 dark:text-neutral-400 space-y-1">
                <p>{format!("Scheduled: {}", format_timestamp(booking.scheduled_at))}</p>
                <p>{format!("Customer: {}", booking.customer.display_name())}</p>
                if let Some(address) = &booking.address {
                    <p>{format!("Address: {}", address)}</p>
                }
                <p class="font-medium text-neutral-900 dark:text-neutral-100">
                    {format_price(&booking.price)}
                </p>
            </div>

            <div class="flex gap-2">
                {props.actions.clone()}
            </div>
        </div>
    }
}
