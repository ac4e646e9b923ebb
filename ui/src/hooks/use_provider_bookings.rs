use payloads::{APIClient, BookingId, BookingStatus, requests, responses};
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{ResourceHandle, settle_mutation, use_resource};

pub const PROVIDER_BOOKINGS_PAGE_SIZE: i64 = 10;

/// Bookings addressed to the current provider, plus the status
/// transitions the provider can request. Which transitions are legal is
/// the backend's call; a rejection comes back as the action's `Err`.
pub struct ProviderBookingsHook {
    pub bookings: ResourceHandle<responses::Envelope<responses::Booking>>,
    pub actions: ProviderBookingActions,
}

#[derive(Clone)]
pub struct ProviderBookingActions {
    client: Rc<APIClient>,
    refetch: Callback<()>,
}

impl ProviderBookingActions {
    pub fn update_status(
        &self,
        booking_id: BookingId,
        status: BookingStatus,
    ) -> impl Future<Output = Result<(), String>> + 'static {
        let client = self.client.clone();
        let refetch = self.refetch.clone();
        async move {
            let result = client
                .update_booking_status(&requests::UpdateBookingStatus {
                    booking_id,
                    status,
                })
                .await
                .map(|_| ());
            settle_mutation(result, &refetch)
        }
    }
}

#[hook]
pub fn use_provider_bookings(offset: i64) -> ProviderBookingsHook {
    let bookings = use_resource(offset, move || async move {
        get_api_client()
            .list_provider_bookings(&requests::Page {
                offset,
                limit: PROVIDER_BOOKINGS_PAGE_SIZE,
            })
            .await
            .map_err(|e| e.to_string())
    });

    let actions = ProviderBookingActions {
        client: Rc::new(get_api_client()),
        refetch: bookings.refetch.clone(),
    };

    ProviderBookingsHook { bookings, actions }
}
