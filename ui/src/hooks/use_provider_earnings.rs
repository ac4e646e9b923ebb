use payloads::responses;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{ResourceHandle, use_resource};

/// Hook to fetch the provider's earnings report.
///
/// Read-only; the report is recomputed server-side, so the only action
/// is `refetch`.
#[hook]
pub fn use_provider_earnings() -> ResourceHandle<responses::EarningsReport> {
    use_resource((), || async move {
        get_api_client()
            .get_provider_earnings()
            .await
            .map_err(|e| e.to_string())
    })
}
