use payloads::requests;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::contexts::toast::use_toast;
use crate::hooks::use_require_auth::login_form;
use crate::hooks::{use_require_auth, use_title};
use crate::{AuthState, State, get_api_client, session};

/// View and edit the signed-in user's profile. Only the editable
/// fields (full name, phone) are sent; email and role are read-only.
#[function_component]
pub fn ProfilePage() -> Html {
    use_title("Profile");
    let profile = use_require_auth();
    let (_state, dispatch) = use_store::<State>();
    let toast = use_toast();

    let full_name_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let is_saving = use_state(|| false);

    let Some(profile) = profile else {
        return login_form();
    };

    let on_submit = {
        let full_name_ref = full_name_ref.clone();
        let phone_ref = phone_ref.clone();
        let is_saving = is_saving.clone();
        let toast = toast.clone();
        let dispatch = dispatch.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let full_name =
                full_name_ref.cast::<HtmlInputElement>().unwrap().value();
            let phone = phone_ref.cast::<HtmlInputElement>().unwrap().value();

            let request = requests::UpdateProfile {
                full_name: (!full_name.is_empty()).then_some(full_name),
                phone: (!phone.is_empty()).then_some(phone),
            };

            let is_saving = is_saving.clone();
            let toast = toast.clone();
            let dispatch = dispatch.clone();

            yew::platform::spawn_local(async move {
                is_saving.set(true);

                match get_api_client().update_profile(&request).await {
                    Ok(updated) => {
                        // Keep the stored session's profile in sync
                        if let Some(mut stored) = session::load() {
                            stored.user = updated.clone();
                            session::store(&stored);
                        }
                        dispatch.reduce_mut(|state| {
                            state.auth_state = AuthState::LoggedIn(updated);
                        });
                        toast.success("Profile updated");
                    }
                    Err(e) => toast.error(e.to_string()),
                }

                is_saving.set(false);
            });
        })
    };

    let input_class = "w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600 rounded-md
                       bg-white dark:bg-neutral-700 text-neutral-900 dark:text-neutral-100
                       focus:outline-none focus:ring-2 focus:ring-neutral-500";
    let readonly_class = "w-full px-3 py-2 border border-neutral-200 dark:border-neutral-700 rounded-md
                          bg-neutral-100 dark:bg-neutral-800 text-neutral-500 dark:text-neutral-400";

    html! {
        <main class="max-w-xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-6">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                {"Profile"}
            </h1>

            <form onsubmit={on_submit} class="bg-white dark:bg-neutral-800 rounded-lg shadow-md p-6 space-y-4">
                <div>
                    <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                        {"Email"}
                    </label>
                    <input type="email" value={profile.email.clone()} readonly=true class={readonly_class} />
                </div>

                <div>
                    <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                        {"Role"}
                    </label>
                    <input type="text" value={profile.role.label()} readonly=true class={readonly_class} />
                </div>

                <div>
                    <label for="full-name" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                        {"Full name"}
                    </label>
                    <input
                        ref={full_name_ref}
                        type="text"
                        id="full-name"
                        value={profile.full_name.clone().unwrap_or_default()}
                        class={input_class}
                    />
                </div>

                <div>
                    <label for="phone" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                        {"Phone"}
                    </label>
                    <input
                        ref={phone_ref}
                        type="tel"
                        id="phone"
                        value={profile.phone.clone().unwrap_or_default()}
                        class={input_class}
                    />
                </div>

                <button
                    type="submit"
                    disabled={*is_saving}
                    class="w-full bg-neutral-900 dark:bg-white text-white dark:text-neutral-900
                           px-4 py-2 rounded-md hover:bg-neutral-800 dark:hover:bg-neutral-100
                           disabled:opacity-50 disabled:cursor-not-allowed font-medium"
                >
                    {if *is_saving { "Saving..." } else { "Save changes" }}
                </button>
            </form>
        </main>
    }
}
