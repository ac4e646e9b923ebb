use payloads::responses;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::utils::format_price;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub service: responses::Service,
}

/// Card for one service in the browse grid, linking to its detail page.
#[function_component]
pub fn ServiceCard(props: &Props) -> Html {
    let service = &props.service;

    html! {
        <Link<Route>
            to={Route::ServiceDetail { id: service.id.0 }}
            classes="block bg-white dark:bg-neutral-800 rounded-lg shadow-md
                     overflow-hidden hover:shadow-lg transition-shadow"
        >
            if let Some(image_url) = &service.image_url {
                <img
                    src={image_url.clone()}
                    alt={service.title.clone()}
                    class="w-full h-40 object-cover"
                />
            }
            <div class="p-4 space-y-2">
                <div class="flex items-center justify-between">
                    <span class="text-xs font-medium uppercase tracking-wide
                                 text-neutral-500 dark:text-neutral-400">
                        {&service.category}
                    </span>
                    if let Some(rating) = service.rating {
                        <span class="text-sm text-neutral-600 dark:text-neutral-400">
                            {format!("★ {:.1} ({})", rating, service.review_count)}
                        </span>
                    }
                </div>
                <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                    {&service.title}
                </h3>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {format!("by {}", service.provider.display_name())}
                </p>
                <div class="flex items-center justify-between pt-2">
                    <span class="text-lg font-bold text-neutral-900 dark:text-neutral-100">
                        {format_price(&service.price)}
                    </span>
                    <span class="text-sm text-neutral-500 dark:text-neutral-400">
                        {format!("{} min", service.duration_minutes)}
                    </span>
                </div>
            </div>
        </Link<Route>>
    }
}
