use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;
use yew::prelude::*;

use crate::contexts::toast::use_toast;
use crate::hooks::use_require_auth::login_form;
use crate::hooks::{use_provider_earnings, use_require_auth, use_title};
use crate::utils::csv::earnings_csv;
use crate::utils::earnings::summarize;
use crate::utils::format_price;
use crate::utils::time::month_name;

/// Trigger a browser download of the CSV through a transient data-URL
/// anchor.
fn download_csv(csv: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_string())?;

    let href = format!(
        "data:text/csv;charset=utf-8,{}",
        js_sys::encode_uri_component(csv)
    );

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "could not create download link".to_string())?
        .unchecked_into();
    anchor.set_href(&href);
    anchor.set_download("earnings.csv");
    anchor.click();
    Ok(())
}

/// Monthly earnings breakdown with client-side derived totals and a
/// CSV export.
#[function_component]
pub fn ProviderEarningsPage() -> Html {
    use_title("Earnings");
    let profile = use_require_auth();
    let toast = use_toast();

    let earnings = use_provider_earnings();

    if profile.is_none() {
        return login_form();
    }

    html! {
        <main class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-6">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                {"Earnings"}
            </h1>

            {earnings.render("earnings", |report, _is_loading, _error| {
                let summary = summarize(&report.monthly);

                let on_download = {
                    let toast = toast.clone();
                    let monthly = report.monthly.clone();
                    Callback::from(move |_: MouseEvent| {
                        if let Err(e) = download_csv(&earnings_csv(&monthly)) {
                            toast.error(e);
                        }
                    })
                };

                html! {
                    <div class="space-y-6">
                        <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                            <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-md p-4">
                                <p class="text-sm text-neutral-500 dark:text-neutral-400">{"Total earnings"}</p>
                                <p class="text-xl font-bold text-neutral-900 dark:text-neutral-100">
                                    {format_price(&report.total_earnings)}
                                </p>
                            </div>
                            <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-md p-4">
                                <p class="text-sm text-neutral-500 dark:text-neutral-400">{"Pending payouts"}</p>
                                <p class="text-xl font-bold text-neutral-900 dark:text-neutral-100">
                                    {format_price(&report.pending_payouts)}
                                </p>
                            </div>
                            <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-md p-4">
                                <p class="text-sm text-neutral-500 dark:text-neutral-400">{"This month"}</p>
                                <p class="text-xl font-bold text-neutral-900 dark:text-neutral-100">
                                    {format_price(&report.this_month)}
                                </p>
                                if let Some(delta) = summary.latest_delta {
                                    <p class={if delta.is_sign_negative() {
                                        "text-xs text-red-600 dark:text-red-400"
                                    } else {
                                        "text-xs text-green-700 dark:text-green-400"
                                    }}>
                                        {format!("{}{} vs last month",
                                            if delta.is_sign_negative() { "" } else { "+" },
                                            delta)}
                                    </p>
                                }
                            </div>
                        </div>

                        if let Some((year, month)) = summary.best_month {
                            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                {format!("Best month so far: {} {}", month_name(month), year)}
                            </p>
                        }

                        <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-md overflow-hidden">
                            <div class="flex items-center justify-between p-4 border-b border-neutral-200 dark:border-neutral-700">
                                <h2 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                                    {"Monthly breakdown"}
                                </h2>
                                <button
                                    onclick={on_download}
                                    class="px-3 py-1.5 text-sm font-medium rounded-md
                                           text-neutral-700 dark:text-neutral-300
                                           border border-neutral-300 dark:border-neutral-600
                                           hover:bg-neutral-100 dark:hover:bg-neutral-700
                                           transition-colors"
                                >
                                    {"Download CSV"}
                                </button>
                            </div>

                            if report.monthly.is_empty() {
                                <p class="p-4 text-sm text-neutral-600 dark:text-neutral-400">
                                    {"No completed bookings yet."}
                                </p>
                            } else {
                                <table class="w-full text-sm">
                                    <thead>
                                        <tr class="text-left text-neutral-500 dark:text-neutral-400
                                                   border-b border-neutral-200 dark:border-neutral-700">
                                            <th class="p-3">{"Month"}</th>
                                            <th class="p-3">{"Bookings"}</th>
                                            <th class="p-3 text-right">{"Gross"}</th>
                                            <th class="p-3 text-right">{"Net"}</th>
                                        </tr>
                                    </thead>
                                    <tbody class="divide-y divide-neutral-200 dark:divide-neutral-700">
                                        {for report.monthly.iter().map(|row| html! {
                                            <tr key={format!("{}-{}", row.year, row.month)}
                                                class="text-neutral-900 dark:text-neutral-100">
                                                <td class="p-3">
                                                    {format!("{} {}", month_name(row.month), row.year)}
                                                </td>
                                                <td class="p-3">{row.bookings_count}</td>
                                                <td class="p-3 text-right">{format_price(&row.gross)}</td>
                                                <td class="p-3 text-right">{format_price(&row.net)}</td>
                                            </tr>
                                        })}
                                    </tbody>
                                </table>
                            }
                        </div>
                    </div>
                }
            })}
        </main>
    }
}
