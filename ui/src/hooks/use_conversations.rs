use payloads::responses;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{ResourceHandle, use_resource};

/// Hook to fetch the current user's conversation list.
#[hook]
pub fn use_conversations() -> ResourceHandle<Vec<responses::Conversation>> {
    use_resource((), || async move {
        get_api_client()
            .list_conversations()
            .await
            .map_err(|e| e.to_string())
    })
}
