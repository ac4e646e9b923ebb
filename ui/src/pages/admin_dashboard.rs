use yew::prelude::*;

use crate::components::PaginationControls;
use crate::contexts::toast::use_toast;
use crate::hooks::use_activity_logs::ACTIVITY_LOGS_PAGE_SIZE;
use crate::hooks::use_notifications::NOTIFICATIONS_PAGE_SIZE;
use crate::hooks::use_require_auth::login_form;
use crate::hooks::{
    use_activity_logs, use_notifications, use_require_auth, use_title,
};
use crate::utils::format_timestamp;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Notifications,
    ActivityLog,
}

/// Admin view: notifications with read-state management and the
/// platform activity log, each independently paginated.
#[function_component]
pub fn AdminDashboardPage() -> Html {
    use_title("Admin");
    let profile = use_require_auth();
    let toast = use_toast();
    let tab = use_state(|| Tab::Notifications);
    let notifications_offset = use_state(|| 0i64);
    let logs_offset = use_state(|| 0i64);

    let notifications = use_notifications(*notifications_offset);
    let logs = use_activity_logs(*logs_offset);

    if profile.is_none() {
        return login_form();
    }

    let tab_button = |target: Tab, label: &str| {
        let tab = tab.clone();
        let active = *tab == target;
        let onclick = Callback::from(move |_: MouseEvent| tab.set(target));
        let class = if active {
            "px-4 py-2 text-sm font-medium border-b-2 border-neutral-900
             dark:border-neutral-100 text-neutral-900 dark:text-neutral-100"
        } else {
            "px-4 py-2 text-sm font-medium text-neutral-500
             dark:text-neutral-400 hover:text-neutral-700
             dark:hover:text-neutral-300"
        };
        html! {
            <button {onclick} {class}>{label.to_string()}</button>
        }
    };

    let on_mark_all_read = {
        let actions = notifications.actions.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            let actions = actions.clone();
            let toast = toast.clone();
            yew::platform::spawn_local(async move {
                match actions.mark_all_read().await {
                    Ok(()) => toast.success("All notifications marked read"),
                    Err(e) => toast.error(e),
                }
            });
        })
    };

    let on_notifications_offset = {
        let notifications_offset = notifications_offset.clone();
        Callback::from(move |new_offset: i64| {
            notifications_offset.set(new_offset);
        })
    };

    let on_logs_offset = {
        let logs_offset = logs_offset.clone();
        Callback::from(move |new_offset: i64| {
            logs_offset.set(new_offset);
        })
    };

    html! {
        <main class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-6">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                {"Admin"}
            </h1>

            <div class="flex border-b border-neutral-200 dark:border-neutral-700">
                {tab_button(Tab::Notifications, "Notifications")}
                {tab_button(Tab::ActivityLog, "Activity log")}
            </div>

            if *tab == Tab::Notifications {
                <div class="space-y-4">
                    <div class="flex justify-end">
                        <button
                            onclick={on_mark_all_read}
                            class="px-3 py-1.5 text-sm font-medium rounded-md
                                   text-neutral-700 dark:text-neutral-300
                                   border border-neutral-300 dark:border-neutral-600
                                   hover:bg-neutral-100 dark:hover:bg-neutral-700
                                   transition-colors"
                        >
                            {"Mark all read"}
                        </button>
                    </div>

                    {notifications.notifications.render("notifications", |page, is_loading, _error| {
                        html! {
                            <>
                                if page.results.is_empty() {
                                    <p class="text-center py-12 text-neutral-600 dark:text-neutral-400">
                                        {"No notifications."}
                                    </p>
                                }
                                <div class="space-y-2">
                                    {for page.results.iter().map(|notification| {
                                        let mark_read = if notification.is_read {
                                            html! {}
                                        } else {
                                            let actions = notifications.actions.clone();
                                            let toast = toast.clone();
                                            let id = notification.id;
                                            let onclick = Callback::from(move |_: MouseEvent| {
                                                let actions = actions.clone();
                                                let toast = toast.clone();
                                                yew::platform::spawn_local(async move {
                                                    if let Err(e) = actions.mark_read(id).await {
                                                        toast.error(e);
                                                    }
                                                });
                                            });
                                            html! {
                                                <button
                                                    {onclick}
                                                    class="text-sm text-neutral-600 dark:text-neutral-400 underline"
                                                >
                                                    {"Mark read"}
                                                </button>
                                            }
                                        };

                                        html! {
                                            <div
                                                key={notification.id.to_string()}
                                                class={format!(
                                                    "bg-white dark:bg-neutral-800 rounded-lg shadow p-4 {}",
                                                    if notification.is_read { "opacity-60" } else { "" }
                                                )}
                                            >
                                                <div class="flex items-center justify-between">
                                                    <div>
                                                        <p class="font-medium text-neutral-900 dark:text-neutral-100">
                                                            {&notification.title}
                                                            <span class="ml-2 text-xs uppercase tracking-wide
                                                                         text-neutral-500 dark:text-neutral-400">
                                                                {&notification.kind}
                                                            </span>
                                                        </p>
                                                        <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                                            {&notification.body}
                                                        </p>
                                                        <p class="text-xs text-neutral-500 dark:text-neutral-400 mt-1">
                                                            {format_timestamp(notification.created_at)}
                                                        </p>
                                                    </div>
                                                    {mark_read}
                                                </div>
                                            </div>
                                        }
                                    })}
                                </div>
                                <PaginationControls
                                    offset={*notifications_offset}
                                    limit={NOTIFICATIONS_PAGE_SIZE}
                                    total={page.count}
                                    on_offset_change={on_notifications_offset.clone()}
                                    {is_loading}
                                />
                            </>
                        }
                    })}
                </div>
            } else {
                {logs.render("activity log", |page, is_loading, _error| {
                    html! {
                        <>
                            if page.results.is_empty() {
                                <p class="text-center py-12 text-neutral-600 dark:text-neutral-400">
                                    {"No activity recorded."}
                                </p>
                            }
                            <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-md
                                        divide-y divide-neutral-200 dark:divide-neutral-700">
                                {for page.results.iter().map(|entry| html! {
                                    <div key={entry.id} class="p-4 flex items-center justify-between">
                                        <div>
                                            <p class="text-sm text-neutral-900 dark:text-neutral-100">
                                                <span class="font-medium">{entry.actor.display_name()}</span>
                                                {" "}
                                                {&entry.action}
                                                if let Some(target) = &entry.target {
                                                    {" "}
                                                    <span class="text-neutral-600 dark:text-neutral-400">
                                                        {target}
                                                    </span>
                                                }
                                            </p>
                                        </div>
                                        <span class="text-xs text-neutral-500 dark:text-neutral-400">
                                            {format_timestamp(entry.created_at)}
                                        </span>
                                    </div>
                                })}
                            </div>
                            <PaginationControls
                                offset={*logs_offset}
                                limit={ACTIVITY_LOGS_PAGE_SIZE}
                                total={page.count}
                                on_offset_change={on_logs_offset.clone()}
                                {is_loading}
                            />
                        </>
                    }
                })}
            }
        </main>
    }
}
