use payloads::{requests, responses};
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{ResourceHandle, use_resource};

pub const SERVICES_PAGE_SIZE: i64 = 12;

/// Hook to fetch one page of the services catalog, optionally filtered
/// by category. Refetches when the filter or offset changes.
#[hook]
pub fn use_services(
    category: Option<String>,
    offset: i64,
) -> ResourceHandle<responses::Envelope<responses::Service>> {
    use_resource((category.clone(), offset), move || {
        let category = category.clone();
        async move {
            let filter = requests::ServiceFilter {
                category,
                search: None,
                offset,
                limit: SERVICES_PAGE_SIZE,
            };
            get_api_client()
                .list_services(&filter)
                .await
                .map_err(|e| e.to_string())
        }
    })
}
