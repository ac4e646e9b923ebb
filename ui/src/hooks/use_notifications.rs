use payloads::{APIClient, NotificationId, requests, responses};
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{ResourceHandle, settle_mutation, use_resource};

pub const NOTIFICATIONS_PAGE_SIZE: i64 = 20;

/// Admin notifications with their read-state actions.
pub struct NotificationsHook {
    pub notifications:
        ResourceHandle<responses::Envelope<responses::Notification>>,
    pub actions: NotificationActions,
}

#[derive(Clone)]
pub struct NotificationActions {
    client: Rc<APIClient>,
    refetch: Callback<()>,
}

impl NotificationActions {
    pub fn mark_read(
        &self,
        notification_id: NotificationId,
    ) -> impl Future<Output = Result<(), String>> + 'static {
        let client = self.client.clone();
        let refetch = self.refetch.clone();
        async move {
            let result = client.mark_notification_read(&notification_id).await;
            settle_mutation(result, &refetch)
        }
    }

    pub fn mark_all_read(
        &self,
    ) -> impl Future<Output = Result<(), String>> + 'static {
        let client = self.client.clone();
        let refetch = self.refetch.clone();
        async move {
            let result = client.mark_all_notifications_read().await;
            settle_mutation(result, &refetch)
        }
    }
}

#[hook]
pub fn use_notifications(offset: i64) -> NotificationsHook {
    let notifications = use_resource(offset, move || async move {
        get_api_client()
            .list_notifications(&requests::Page {
                offset,
                limit: NOTIFICATIONS_PAGE_SIZE,
            })
            .await
            .map_err(|e| e.to_string())
    });

    let actions = NotificationActions {
        client: Rc::new(get_api_client()),
        refetch: notifications.refetch.clone(),
    };

    NotificationsHook {
        notifications,
        actions,
    }
}
