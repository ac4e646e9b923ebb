use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_title;
use crate::{Route, State};

#[function_component]
pub fn HomePage() -> Html {
    use_title("");
    let (state, _) = use_store::<State>();

    html! {
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <div class="text-center space-y-6">
                <h1 class="text-4xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Find trusted local services"}
                </h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400 max-w-2xl mx-auto">
                    {"Book plumbers, electricians, cleaners, and more. \
                      Compare providers, check availability, and manage \
                      everything in one place."}
                </p>
                <div class="flex justify-center gap-4">
                    <Link<Route>
                        to={Route::Services}
                        classes="px-6 py-3 rounded-md text-sm font-medium text-white
                                 bg-neutral-900 hover:bg-neutral-800
                                 dark:bg-neutral-100 dark:text-neutral-900
                                 dark:hover:bg-neutral-200 transition-colors"
                    >
                        {"Browse services"}
                    </Link<Route>>
                    if !state.is_authenticated() {
                        <Link<Route>
                            to={Route::Login}
                            classes="px-6 py-3 rounded-md text-sm font-medium
                                     text-neutral-700 dark:text-neutral-300
                                     border border-neutral-300 dark:border-neutral-600
                                     hover:bg-neutral-100 dark:hover:bg-neutral-800
                                     transition-colors"
                        >
                            {"Sign in"}
                        </Link<Route>>
                    }
                </div>
            </div>
        </main>
    }
}
