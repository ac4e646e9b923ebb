use crate::contexts::toast::{Toast, ToastType, use_toast};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastItemProps {
    pub toast: Toast,
}

/// One toast card: a neutral body with a colored accent edge and kind
/// label, so stacked toasts stay readable against each other.
#[function_component]
pub fn ToastItem(props: &ToastItemProps) -> Html {
    let toast_handle = use_toast();
    let toast = &props.toast;

    let (accent_class, label_class, label) = match toast.toast_type {
        ToastType::Error => (
            "border-l-red-600 dark:border-l-red-500",
            "text-red-700 dark:text-red-400",
            "Error",
        ),
        ToastType::Success => (
            "border-l-green-600 dark:border-l-green-500",
            "text-green-700 dark:text-green-400",
            "Success",
        ),
        ToastType::Info => (
            "border-l-neutral-500 dark:border-l-neutral-400",
            "text-neutral-600 dark:text-neutral-300",
            "Info",
        ),
    };

    let on_close = {
        let toast_id = toast.id;
        Callback::from(move |_| {
            toast_handle.remove(toast_id);
        })
    };

    html! {
        <div class={format!(
            "flex items-start gap-3 p-4 rounded-md border-l-4 shadow-lg \
             bg-white dark:bg-neutral-800 \
             border border-neutral-200 dark:border-neutral-700 {}",
            accent_class
        )}>
            <div class="flex-1 min-w-0">
                <p class={format!(
                    "text-xs font-semibold uppercase tracking-wide {}",
                    label_class
                )}>
                    {label}
                </p>
                <p class="mt-0.5 text-sm text-neutral-900 dark:text-neutral-100">
                    {&toast.message}
                </p>
            </div>
            <button
                onclick={on_close}
                title="Dismiss"
                class="flex-shrink-0 text-neutral-400 hover:text-neutral-600 \
                       dark:hover:text-neutral-200 transition-colors"
            >
                <span class="text-lg leading-none">{"×"}</span>
            </button>
        </div>
    }
}
