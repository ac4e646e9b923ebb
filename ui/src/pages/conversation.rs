use payloads::responses::VoiceClip;
use payloads::{ConversationId, requests};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{VoicePlayer, VoiceRecorder};
use crate::contexts::toast::use_toast;
use crate::hooks::use_require_auth::login_form;
use crate::hooks::{use_messages, use_require_auth, use_title};
use crate::utils::format_timestamp;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub conversation_id: ConversationId,
}

/// One message thread: text and voice messages, a composer, and a
/// recorder for voice clips. A clip is held as a pending attachment
/// until the message is sent.
#[function_component]
pub fn ConversationPage(props: &Props) -> Html {
    use_title("Conversation");
    let profile = use_require_auth();
    let toast = use_toast();

    let hook = use_messages(props.conversation_id);

    let body_ref = use_node_ref();
    let pending_clip = use_state(|| None::<VoiceClip>);
    let is_sending = use_state(|| false);

    let Some(profile) = profile else {
        return login_form();
    };

    let on_recorded = {
        let pending_clip = pending_clip.clone();
        Callback::from(move |clip: VoiceClip| {
            pending_clip.set(Some(clip));
        })
    };

    let on_discard_clip = {
        let pending_clip = pending_clip.clone();
        Callback::from(move |_: MouseEvent| {
            pending_clip.set(None);
        })
    };

    let on_send = {
        let body_ref = body_ref.clone();
        let pending_clip = pending_clip.clone();
        let is_sending = is_sending.clone();
        let toast = toast.clone();
        let actions = hook.actions.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let input = body_ref.cast::<HtmlInputElement>().unwrap();
            let body = input.value();
            let clip = (*pending_clip).clone();

            if body.is_empty() && clip.is_none() {
                return;
            }

            let details = requests::SendMessage {
                body: (!body.is_empty()).then_some(body),
                voice_clip: clip,
            };

            let pending_clip = pending_clip.clone();
            let is_sending = is_sending.clone();
            let toast = toast.clone();
            let actions = actions.clone();

            yew::platform::spawn_local(async move {
                is_sending.set(true);
                match actions.send(details).await {
                    Ok(()) => {
                        input.set_value("");
                        pending_clip.set(None);
                    }
                    Err(e) => toast.error(e),
                }
                is_sending.set(false);
            });
        })
    };

    html! {
        <main class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-6">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                {"Conversation"}
            </h1>

            {hook.messages.render("messages", |messages, _is_loading, _error| {
                html! {
                    <div class="space-y-3">
                        if messages.is_empty() {
                            <p class="text-center py-12 text-neutral-600 dark:text-neutral-400">
                                {"No messages yet. Say hello!"}
                            </p>
                        }
                        {for messages.iter().map(|message| {
                            let is_own = message.sender.user_id == profile.id;
                            let alignment = if is_own {
                                "ml-auto bg-neutral-900 text-white dark:bg-neutral-100 dark:text-neutral-900"
                            } else {
                                "mr-auto bg-white dark:bg-neutral-800 text-neutral-900 dark:text-neutral-100"
                            };
                            html! {
                                <div
                                    key={message.id.to_string()}
                                    class={format!("max-w-[75%] rounded-lg shadow p-3 space-y-1 {}", alignment)}
                                >
                                    if !is_own {
                                        <p class="text-xs font-medium text-neutral-500 dark:text-neutral-400">
                                            {message.sender.display_name()}
                                        </p>
                                    }
                                    if let Some(body) = &message.body {
                                        <p class="text-sm whitespace-pre-line">{body}</p>
                                    }
                                    if let Some(clip) = &message.voice_clip {
                                        <VoicePlayer clip={clip.clone()} />
                                    }
                                    <p class="text-xs opacity-60">
                                        {format_timestamp(message.created_at)}
                                    </p>
                                </div>
                            }
                        })}
                    </div>
                }
            })}

            <form onsubmit={on_send} class="bg-white dark:bg-neutral-800 rounded-lg shadow-md p-4 space-y-3">
                if let Some(clip) = &*pending_clip {
                    <div class="flex items-center justify-between">
                        <VoicePlayer clip={clip.clone()} />
                        <button
                            type="button"
                            onclick={on_discard_clip}
                            class="text-sm text-neutral-500 hover:text-neutral-700
                                   dark:hover:text-neutral-300 underline"
                        >
                            {"Discard recording"}
                        </button>
                    </div>
                } else {
                    <VoiceRecorder on_recorded={on_recorded} disabled={*is_sending} />
                }

                <div class="flex gap-2">
                    <input
                        ref={body_ref}
                        type="text"
                        placeholder="Type a message..."
                        class="flex-1 px-3 py-2 border border-neutral-300 dark:border-neutral-600
                               rounded-md bg-white dark:bg-neutral-700
                               text-neutral-900 dark:text-neutral-100
                               focus:outline-none focus:ring-2 focus:ring-neutral-500"
                    />
                    <button
                        type="submit"
                        disabled={*is_sending}
                        class="px-4 py-2 rounded-md text-sm font-medium text-white
                               bg-neutral-900 hover:bg-neutral-800
                               dark:bg-neutral-100 dark:text-neutral-900
                               dark:hover:bg-neutral-200
                               disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        {if *is_sending { "Sending..." } else { "Send" }}
                    </button>
                </div>
            </form>
        </main>
    }
}
