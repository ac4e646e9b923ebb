use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::{PaginationControls, ServiceCard};
use crate::hooks::use_services::SERVICES_PAGE_SIZE;
use crate::hooks::{use_services, use_title};

const CATEGORIES: &[&str] = &[
    "plumbing",
    "electrical",
    "cleaning",
    "beauty",
    "repairs",
    "tutoring",
];

/// Browse the services catalog with a category filter and pagination.
/// Changing the filter resets to the first page.
#[function_component]
pub fn ServicesPage() -> Html {
    use_title("Services");
    let category = use_state(|| None::<String>);
    let offset = use_state(|| 0i64);

    let services = use_services((*category).clone(), *offset);

    let on_category_change = {
        let category = category.clone();
        let offset = offset.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            category.set(if value.is_empty() { None } else { Some(value) });
            offset.set(0);
        })
    };

    let on_offset_change = {
        let offset = offset.clone();
        Callback::from(move |new_offset: i64| {
            offset.set(new_offset);
        })
    };

    html! {
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Services"}
                </h1>
                <select
                    onchange={on_category_change}
                    class="px-3 py-2 border border-neutral-300 dark:border-neutral-600
                           rounded-md bg-white dark:bg-neutral-700
                           text-neutral-900 dark:text-neutral-100 text-sm
                           focus:outline-none focus:ring-2 focus:ring-neutral-500"
                >
                    <option value="" selected={category.is_none()}>{"All categories"}</option>
                    {for CATEGORIES.iter().map(|c| html! {
                        <option
                            value={*c}
                            selected={category.as_deref() == Some(*c)}
                        >
                            {c.to_string()}
                        </option>
                    })}
                </select>
            </div>

            {services.render("services", |page, is_loading, _error| {
                html! {
                    <>
                        if services.is_stale {
                            <p class="text-sm text-amber-600 dark:text-amber-400">
                                {"Showing previously loaded results; refresh failed."}
                            </p>
                        }
                        if page.results.is_empty() {
                            <p class="text-center py-12 text-neutral-600 dark:text-neutral-400">
                                {"No services match this filter."}
                            </p>
                        } else {
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                                {for page.results.iter().map(|service| html! {
                                    <ServiceCard
                                        key={service.id.to_string()}
                                        service={service.clone()}
                                    />
                                })}
                            </div>
                        }
                        <PaginationControls
                            offset={*offset}
                            limit={SERVICES_PAGE_SIZE}
                            total={page.count}
                            on_offset_change={on_offset_change.clone()}
                            {is_loading}
                        />
                    </>
                }
            })}
        </main>
    }
}
