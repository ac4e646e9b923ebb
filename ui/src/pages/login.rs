use payloads::responses;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::LoginForm;
use crate::hooks::use_title;
use crate::state::State;
use crate::Route;

#[function_component]
pub fn LoginPage() -> Html {
    use_title("Sign in");
    let navigator = use_navigator().unwrap();
    let (state, _) = use_store::<State>();

    // Redirect to home if already logged in
    {
        let navigator = navigator.clone();
        let is_authenticated = state.is_authenticated();

        use_effect_with(is_authenticated, move |is_auth| {
            if *is_auth {
                navigator.push(&Route::Home);
            }
        });
    }

    let on_auth_success = {
        let navigator = navigator.clone();

        Callback::from(move |_profile: responses::UserProfile| {
            navigator.push(&Route::Home);
        })
    };

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full space-y-4">
                <LoginForm
                    title="Sign in to SewaBazaar"
                    description="Enter your credentials to continue"
                    on_success={on_auth_success}
                />

                <div class="text-center">
                    <p class="text-sm text-neutral-600 dark:text-neutral-400">
                        <Link<Route> to={Route::ForgotPassword} classes="text-neutral-900 dark:text-neutral-100 hover:text-neutral-700 dark:hover:text-neutral-300 font-medium underline">
                            {"Lost your password?"}
                        </Link<Route>>
                    </p>
                </div>
            </div>
        </div>
    }
}
