use crate::get_api_client;
use crate::hooks::{use_push_route, use_title};
use crate::Route;
use payloads::requests::{self, PASSWORD_MIN_LEN, validate_otp};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Second step of the OTP reset flow: email + code + new password. The
/// code is validated locally before the request goes out.
#[function_component]
pub fn ResetPasswordPage() -> Html {
    use_title("Reset Password");
    let push_route = use_push_route();

    let email_ref = use_node_ref();
    let otp_ref = use_node_ref();
    let password_ref = use_node_ref();
    let confirm_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let success = use_state(|| false);
    let loading = use_state(|| false);

    let onsubmit = {
        let email_ref = email_ref.clone();
        let otp_ref = otp_ref.clone();
        let password_ref = password_ref.clone();
        let confirm_ref = confirm_ref.clone();
        let error = error.clone();
        let success = success.clone();
        let loading = loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email = email_ref.cast::<HtmlInputElement>().unwrap().value();
            let otp = otp_ref.cast::<HtmlInputElement>().unwrap().value();
            let password =
                password_ref.cast::<HtmlInputElement>().unwrap().value();
            let confirm =
                confirm_ref.cast::<HtmlInputElement>().unwrap().value();

            if let Some(message) = validate_otp(&otp).error_message() {
                error.set(Some(message.to_string()));
                return;
            }
            if password.len() < PASSWORD_MIN_LEN {
                error.set(Some(format!(
                    "Password must be at least {PASSWORD_MIN_LEN} characters"
                )));
                return;
            }
            if password != confirm {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            let error = error.clone();
            let success = success.clone();
            let loading = loading.clone();

            loading.set(true);
            error.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                let client = get_api_client();
                let request = requests::ConfirmPasswordReset {
                    email,
                    otp,
                    new_password: password,
                };

                match client.confirm_password_reset(&request).await {
                    Ok(_) => {
                        success.set(true);
                        loading.set(false);
                    }
                    Err(e) => {
                        error.set(Some(format!("Error: {}", e)));
                        loading.set(false);
                    }
                }
            });
        })
    };

    let on_go_to_login = {
        let push_route = push_route.clone();
        Callback::from(move |_: MouseEvent| {
            push_route.emit(Route::Login);
        })
    };

    let input_class = "w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600 rounded-md
                       bg-white dark:bg-neutral-900 text-neutral-900 dark:text-white
                       focus:outline-none focus:ring-2 focus:ring-neutral-500";

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full space-y-6">
                <div class="text-center">
                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-white mb-2">
                        {"Enter your reset code"}
                    </h1>
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Use the 6-digit code from your email to set a new password"}
                    </p>
                </div>

                if *success {
                    <div class="bg-white dark:bg-neutral-800 border border-neutral-200 dark:border-neutral-700 rounded-lg p-6">
                        <div class="text-center space-y-4">
                            <p class="text-neutral-900 dark:text-white font-semibold">
                                {"Password updated"}
                            </p>
                            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                {"You can now sign in with your new password."}
                            </p>
                            <button
                                onclick={on_go_to_login}
                                class="w-full bg-neutral-900 dark:bg-white text-white dark:text-neutral-900
                                       px-4 py-2 rounded-md hover:bg-neutral-800 dark:hover:bg-neutral-100
                                       font-medium"
                            >
                                {"Go to sign in"}
                            </button>
                        </div>
                    </div>
                } else {
                    <form onsubmit={onsubmit} class="bg-white dark:bg-neutral-800 border border-neutral-200 dark:border-neutral-700 rounded-lg p-6 space-y-4">
                        if let Some(error_msg) = (*error).as_ref() {
                            <div class="bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-md p-3">
                                <p class="text-sm text-red-800 dark:text-red-200">{error_msg}</p>
                            </div>
                        }

                        <div>
                            <label for="email" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                                {"Email address"}
                            </label>
                            <input ref={email_ref} type="email" id="email" required={true} class={input_class} />
                        </div>

                        <div>
                            <label for="otp" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                                {"Reset code"}
                            </label>
                            <input
                                ref={otp_ref}
                                type="text"
                                id="otp"
                                inputmode="numeric"
                                maxlength="6"
                                required={true}
                                placeholder="6-digit code"
                                class={input_class}
                            />
                        </div>

                        <div>
                            <label for="new-password" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                                {"New password"}
                            </label>
                            <input ref={password_ref} type="password" id="new-password" autocomplete="new-password" required={true} class={input_class} />
                        </div>

                        <div>
                            <label for="confirm-password" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                                {"Confirm new password"}
                            </label>
                            <input ref={confirm_ref} type="password" id="confirm-password" autocomplete="new-password" required={true} class={input_class} />
                        </div>

                        <button
                            type="submit"
                            disabled={*loading}
                            class="w-full bg-neutral-900 dark:bg-white text-white dark:text-neutral-900
                                   px-4 py-2 rounded-md hover:bg-neutral-800 dark:hover:bg-neutral-100
                                   disabled:opacity-50 disabled:cursor-not-allowed font-medium"
                        >
                            {if *loading { "Updating..." } else { "Reset password" }}
                        </button>
                    </form>
                }
            </div>
        </div>
    }
}
