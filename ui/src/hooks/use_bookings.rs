use payloads::{APIClient, BookingId, requests, responses};
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{ResourceHandle, settle_mutation, use_resource};

pub const BOOKINGS_PAGE_SIZE: i64 = 10;

/// The customer's bookings plus the actions that mutate them.
///
/// Actions follow the invalidate-and-reload rule: a success triggers
/// exactly one refetch of the list; a failure resolves `Err` and leaves
/// the displayed bookings untouched.
pub struct BookingsHook {
    pub bookings: ResourceHandle<responses::Envelope<responses::Booking>>,
    pub actions: BookingActions,
}

/// Cloneable handle for booking mutations, so event handlers can own
/// one without capturing the whole hook.
#[derive(Clone)]
pub struct BookingActions {
    client: Rc<APIClient>,
    refetch: Callback<()>,
}

impl BookingActions {
    pub fn cancel(
        &self,
        booking_id: BookingId,
        reason: Option<String>,
    ) -> impl Future<Output = Result<(), String>> + 'static {
        let client = self.client.clone();
        let refetch = self.refetch.clone();
        async move {
            let result = client
                .cancel_booking(&requests::CancelBooking { booking_id, reason })
                .await
                .map(|_| ());
            settle_mutation(result, &refetch)
        }
    }
}

/// Hook to fetch one page of the current customer's bookings.
#[hook]
pub fn use_bookings(offset: i64) -> BookingsHook {
    let bookings = use_resource(offset, move || async move {
        get_api_client()
            .list_bookings(&requests::Page {
                offset,
                limit: BOOKINGS_PAGE_SIZE,
            })
            .await
            .map_err(|e| e.to_string())
    });

    let actions = BookingActions {
        client: Rc::new(get_api_client()),
        refetch: bookings.refetch.clone(),
    };

    BookingsHook { bookings, actions }
}
