use payloads::{APIClient, BlockedTimeId, requests, responses};
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{ResourceHandle, settle_mutation, use_resource};

/// The provider's schedule (weekly hours + blocked windows) and every
/// action that edits it.
///
/// All four actions share the invalidate-and-reload rule: one refetch
/// of the schedule per successful mutation, no state change on failure.
pub struct ProviderScheduleHook {
    pub schedule: ResourceHandle<responses::ProviderSchedule>,
    pub actions: ScheduleActions,
}

#[derive(Clone)]
pub struct ScheduleActions {
    client: Rc<APIClient>,
    refetch: Callback<()>,
}

impl ScheduleActions {
    pub fn create_blocked_time(
        &self,
        details: requests::CreateBlockedTime,
    ) -> impl Future<Output = Result<(), String>> + 'static {
        let client = self.client.clone();
        let refetch = self.refetch.clone();
        async move {
            let result =
                client.create_blocked_time(&details).await.map(|_| ());
            settle_mutation(result, &refetch)
        }
    }

    pub fn delete_blocked_time(
        &self,
        blocked_time_id: BlockedTimeId,
    ) -> impl Future<Output = Result<(), String>> + 'static {
        let client = self.client.clone();
        let refetch = self.refetch.clone();
        async move {
            let result = client.delete_blocked_time(&blocked_time_id).await;
            settle_mutation(result, &refetch)
        }
    }

    pub fn update_working_hours(
        &self,
        details: requests::UpdateWorkingHours,
    ) -> impl Future<Output = Result<(), String>> + 'static {
        let client = self.client.clone();
        let refetch = self.refetch.clone();
        async move {
            let result =
                client.update_working_hours(&details).await.map(|_| ());
            settle_mutation(result, &refetch)
        }
    }

    /// Ask the backend to materialize bookable slots for a date range.
    /// Returns the generation summary to the caller in addition to
    /// reloading the schedule.
    pub fn generate_slots(
        &self,
        details: requests::GenerateSlots,
    ) -> impl Future<Output = Result<responses::SlotGenerationResult, String>>
    + 'static {
        let client = self.client.clone();
        let refetch = self.refetch.clone();
        async move {
            let result = client.generate_booking_slots(&details).await;
            settle_mutation(result, &refetch)
        }
    }
}

#[hook]
pub fn use_provider_schedule() -> ProviderScheduleHook {
    let schedule = use_resource((), || async move {
        get_api_client()
            .get_provider_schedule()
            .await
            .map_err(|e| e.to_string())
    });

    let actions = ScheduleActions {
        client: Rc::new(get_api_client()),
        refetch: schedule.refetch.clone(),
    };

    ProviderScheduleHook { schedule, actions }
}
