use payloads::{requests, responses};
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{ResourceHandle, use_resource};

pub const ACTIVITY_LOGS_PAGE_SIZE: i64 = 25;

/// Hook to fetch one page of the admin activity log. Read-only.
#[hook]
pub fn use_activity_logs(
    offset: i64,
) -> ResourceHandle<responses::Envelope<responses::ActivityLog>> {
    use_resource(offset, move || async move {
        get_api_client()
            .list_activity_logs(&requests::Page {
                offset,
                limit: ACTIVITY_LOGS_PAGE_SIZE,
            })
            .await
            .map_err(|e| e.to_string())
    })
}
