use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_require_auth::login_form;
use crate::hooks::{use_conversations, use_require_auth, use_title};
use crate::utils::format_timestamp;
use crate::Route;

/// Conversation list with unread badges, linking into each thread.
#[function_component]
pub fn MessagesPage() -> Html {
    use_title("Messages");
    let profile = use_require_auth();
    let conversations = use_conversations();

    if profile.is_none() {
        return login_form();
    }

    html! {
        <main class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-6">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                {"Messages"}
            </h1>

            {conversations.render("conversations", |conversations, _is_loading, _error| {
                if conversations.is_empty() {
                    return html! {
                        <p class="text-center py-12 text-neutral-600 dark:text-neutral-400">
                            {"No conversations yet. Book a service to message its provider."}
                        </p>
                    };
                }
                html! {
                    <div class="divide-y divide-neutral-200 dark:divide-neutral-700
                                bg-white dark:bg-neutral-800 rounded-lg shadow-md">
                        {for conversations.iter().map(|conversation| html! {
                            <Link<Route>
                                key={conversation.id.to_string()}
                                to={Route::Conversation { id: conversation.id.0 }}
                                classes="block p-4 hover:bg-neutral-50 dark:hover:bg-neutral-700 transition-colors"
                            >
                                <div class="flex items-center justify-between">
                                    <span class="font-medium text-neutral-900 dark:text-neutral-100">
                                        {conversation.participant.display_name()}
                                    </span>
                                    <div class="flex items-center gap-2">
                                        if conversation.unread_count > 0 {
                                            <span class="px-2 py-0.5 rounded-full text-xs font-medium
                                                         bg-neutral-900 text-white
                                                         dark:bg-neutral-100 dark:text-neutral-900">
                                                {conversation.unread_count}
                                            </span>
                                        }
                                        <span class="text-xs text-neutral-500 dark:text-neutral-400">
                                            {format_timestamp(conversation.updated_at)}
                                        </span>
                                    </div>
                                </div>
                                if let Some(preview) = &conversation.last_message_preview {
                                    <p class="text-sm text-neutral-600 dark:text-neutral-400 truncate mt-1">
                                        {preview}
                                    </p>
                                }
                            </Link<Route>>
                        })}
                    </div>
                }
            })}
        </main>
    }
}
