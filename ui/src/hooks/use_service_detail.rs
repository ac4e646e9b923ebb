use payloads::{ServiceId, responses};
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{ResourceHandle, use_resource};

/// Hook to fetch a single service listing.
#[hook]
pub fn use_service_detail(
    service_id: ServiceId,
) -> ResourceHandle<responses::Service> {
    use_resource(service_id, move || async move {
        get_api_client()
            .get_service(&service_id)
            .await
            .map_err(|e| e.to_string())
    })
}
