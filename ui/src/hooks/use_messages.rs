use payloads::{APIClient, ConversationId, requests, responses};
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{ResourceHandle, settle_mutation, use_resource};

/// One conversation's messages plus the send action. Sending reloads
/// the thread so the new message shows up with its server-assigned id
/// and timestamp.
pub struct MessagesHook {
    pub messages: ResourceHandle<Vec<responses::Message>>,
    pub actions: MessageActions,
}

#[derive(Clone)]
pub struct MessageActions {
    client: Rc<APIClient>,
    conversation_id: ConversationId,
    refetch: Callback<()>,
}

impl MessageActions {
    /// Send a text message, a voice clip, or both.
    pub fn send(
        &self,
        details: requests::SendMessage,
    ) -> impl Future<Output = Result<(), String>> + 'static {
        let client = self.client.clone();
        let refetch = self.refetch.clone();
        let conversation_id = self.conversation_id;
        async move {
            if details.body.is_none() && details.voice_clip.is_none() {
                return Err("Nothing to send".to_string());
            }
            let result = client
                .send_message(&conversation_id, &details)
                .await
                .map(|_| ());
            settle_mutation(result, &refetch)
        }
    }
}

#[hook]
pub fn use_messages(conversation_id: ConversationId) -> MessagesHook {
    let messages = use_resource(conversation_id, move || async move {
        get_api_client()
            .list_messages(&conversation_id)
            .await
            .map_err(|e| e.to_string())
    });

    let actions = MessageActions {
        client: Rc::new(get_api_client()),
        conversation_id,
        refetch: messages.refetch.clone(),
    };

    MessagesHook { messages, actions }
}
