use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_title;
use crate::Route;

#[function_component]
pub fn NotFoundPage() -> Html {
    use_title("Page not found");

    html! {
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <div class="text-center space-y-4">
                <h1 class="text-4xl font-bold text-neutral-900 dark:text-white">{"404"}</h1>
                <p class="text-neutral-600 dark:text-neutral-300">{"Page not found"}</p>
                <Link<Route>
                    to={Route::Home}
                    classes="inline-block text-neutral-900 dark:text-neutral-100 font-medium underline"
                >
                    {"Back to home"}
                </Link<Route>>
            </div>
        </main>
    }
}
