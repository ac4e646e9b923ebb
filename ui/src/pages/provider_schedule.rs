use jiff::civil::{Date, Time};
use payloads::{Weekday, requests, responses};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::contexts::toast::use_toast;
use crate::hooks::use_require_auth::login_form;
use crate::hooks::{use_provider_schedule, use_require_auth, use_title};
use crate::utils::{format_date, format_time};

fn parse_time(value: &str) -> Result<Time, String> {
    value
        .parse()
        .map_err(|_| "Please enter a valid time".to_string())
}

fn parse_date(value: &str) -> Result<Date, String> {
    value
        .parse()
        .map_err(|_| "Please enter a valid date".to_string())
}

/// Seed one editor row per weekday, carrying over saved hours where
/// they exist.
fn seed_entries(
    saved: &[responses::WorkingHours],
) -> Vec<requests::WorkingHoursEntry> {
    Weekday::ALL
        .iter()
        .map(|&weekday| {
            saved
                .iter()
                .find(|h| h.weekday == weekday)
                .map(|h| requests::WorkingHoursEntry {
                    weekday,
                    start_time: h.start_time,
                    end_time: h.end_time,
                    is_available: h.is_available,
                })
                .unwrap_or(requests::WorkingHoursEntry {
                    weekday,
                    start_time: Time::constant(9, 0, 0, 0),
                    end_time: Time::constant(17, 0, 0, 0),
                    is_available: false,
                })
        })
        .collect()
}

#[derive(Properties, PartialEq)]
struct WorkingHoursEditorProps {
    hours: Vec<responses::WorkingHours>,
    on_save: Callback<requests::UpdateWorkingHours>,
}

#[function_component]
fn WorkingHoursEditor(props: &WorkingHoursEditorProps) -> Html {
    let entries = use_state(|| seed_entries(&props.hours));

    // Re-seed whenever a reload brings in different hours
    {
        let entries = entries.clone();
        use_effect_with(props.hours.clone(), move |hours| {
            entries.set(seed_entries(hours));
        });
    }

    let update_entry = {
        let entries = entries.clone();
        move |index: usize,
              apply: Box<dyn Fn(&mut requests::WorkingHoursEntry)>| {
            let mut updated = (*entries).clone();
            if let Some(entry) = updated.get_mut(index) {
                apply(entry);
            }
            entries.set(updated);
        }
    };

    let on_submit = {
        let entries = entries.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_save.emit(requests::UpdateWorkingHours {
                working_hours: (*entries).clone(),
            });
        })
    };

    let time_class = "px-2 py-1 border border-neutral-300 dark:border-neutral-600
                      rounded-md bg-white dark:bg-neutral-700 text-sm
                      text-neutral-900 dark:text-neutral-100
                      disabled:opacity-50";

    html! {
        <form onsubmit={on_submit} class="bg-white dark:bg-neutral-800 rounded-lg shadow-md p-6 space-y-4">
            <h2 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                {"Weekly hours"}
            </h2>

            <div class="space-y-2">
                {for entries.iter().enumerate().map(|(index, entry)| {
                    let on_toggle = {
                        let update_entry = update_entry.clone();
                        Callback::from(move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            let checked = input.checked();
                            update_entry(index, Box::new(move |entry| {
                                entry.is_available = checked;
                            }));
                        })
                    };
                    let on_start = {
                        let update_entry = update_entry.clone();
                        Callback::from(move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            if let Ok(time) = parse_time(&input.value()) {
                                update_entry(index, Box::new(move |entry| {
                                    entry.start_time = time;
                                }));
                            }
                        })
                    };
                    let on_end = {
                        let update_entry = update_entry.clone();
                        Callback::from(move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            if let Ok(time) = parse_time(&input.value()) {
                                update_entry(index, Box::new(move |entry| {
                                    entry.end_time = time;
                                }));
                            }
                        })
                    };

                    html! {
                        <div key={entry.weekday.label()} class="flex items-center gap-3">
                            <label class="flex items-center gap-2 w-32">
                                <input
                                    type="checkbox"
                                    checked={entry.is_available}
                                    onchange={on_toggle}
                                />
                                <span class="text-sm text-neutral-900 dark:text-neutral-100">
                                    {entry.weekday.label()}
                                </span>
                            </label>
                            <input
                                type="time"
                                value={format_time(entry.start_time)}
                                onchange={on_start}
                                disabled={!entry.is_available}
                                class={time_class}
                            />
                            <span class="text-sm text-neutral-500">{"to"}</span>
                            <input
                                type="time"
                                value={format_time(entry.end_time)}
                                onchange={on_end}
                                disabled={!entry.is_available}
                                class={time_class}
                            />
                        </div>
                    }
                })}
            </div>

            <button
                type="submit"
                class="bg-neutral-900 dark:bg-white text-white dark:text-neutral-900
                       px-4 py-2 rounded-md hover:bg-neutral-800 dark:hover:bg-neutral-100
                       font-medium text-sm"
            >
                {"Save hours"}
            </button>
        </form>
    }
}

/// Schedule management: weekly hours, one-off blocked windows, and
/// slot generation for a date range.
#[function_component]
pub fn ProviderSchedulePage() -> Html {
    use_title("Schedule");
    let profile = use_require_auth();
    let toast = use_toast();

    let hook = use_provider_schedule();

    let block_date_ref = use_node_ref();
    let block_start_ref = use_node_ref();
    let block_end_ref = use_node_ref();
    let block_reason_ref = use_node_ref();

    let slots_start_ref = use_node_ref();
    let slots_end_ref = use_node_ref();
    let slots_result = use_state(|| None::<responses::SlotGenerationResult>);

    if profile.is_none() {
        return login_form();
    }

    let on_save_hours = {
        let actions = hook.actions.clone();
        let toast = toast.clone();
        Callback::from(move |details: requests::UpdateWorkingHours| {
            let actions = actions.clone();
            let toast = toast.clone();
            yew::platform::spawn_local(async move {
                match actions.update_working_hours(details).await {
                    Ok(()) => toast.success("Weekly hours saved"),
                    Err(e) => toast.error(e),
                }
            });
        })
    };

    let on_block_time = {
        let date_ref = block_date_ref.clone();
        let start_ref = block_start_ref.clone();
        let end_ref = block_end_ref.clone();
        let reason_ref = block_reason_ref.clone();
        let actions = hook.actions.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let parsed = (|| {
                let date = parse_date(
                    &date_ref.cast::<HtmlInputElement>().unwrap().value(),
                )?;
                let start_time = parse_time(
                    &start_ref.cast::<HtmlInputElement>().unwrap().value(),
                )?;
                let end_time = parse_time(
                    &end_ref.cast::<HtmlInputElement>().unwrap().value(),
                )?;
                if end_time <= start_time {
                    return Err("End time must be after start".to_string());
                }
                let reason =
                    reason_ref.cast::<HtmlInputElement>().unwrap().value();
                Ok(requests::CreateBlockedTime {
                    date,
                    start_time,
                    end_time,
                    reason: (!reason.is_empty()).then_some(reason),
                })
            })();

            let details = match parsed {
                Ok(details) => details,
                Err(message) => {
                    toast.error(message);
                    return;
                }
            };

            let actions = actions.clone();
            let toast = toast.clone();
            yew::platform::spawn_local(async move {
                match actions.create_blocked_time(details).await {
                    Ok(()) => toast.success("Time blocked"),
                    Err(e) => toast.error(e),
                }
            });
        })
    };

    let on_generate_slots = {
        let start_ref = slots_start_ref.clone();
        let end_ref = slots_end_ref.clone();
        let actions = hook.actions.clone();
        let toast = toast.clone();
        let slots_result = slots_result.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let parsed = (|| {
                let start_date = parse_date(
                    &start_ref.cast::<HtmlInputElement>().unwrap().value(),
                )?;
                let end_date = parse_date(
                    &end_ref.cast::<HtmlInputElement>().unwrap().value(),
                )?;
                if end_date < start_date {
                    return Err(
                        "End date must not be before start".to_string()
                    );
                }
                Ok(requests::GenerateSlots {
                    start_date,
                    end_date,
                })
            })();

            let details = match parsed {
                Ok(details) => details,
                Err(message) => {
                    toast.error(message);
                    return;
                }
            };

            let actions = actions.clone();
            let toast = toast.clone();
            let slots_result = slots_result.clone();
            yew::platform::spawn_local(async move {
                match actions.generate_slots(details).await {
                    Ok(result) => slots_result.set(Some(result)),
                    Err(e) => toast.error(e),
                }
            });
        })
    };

    let input_class = "px-3 py-2 border border-neutral-300 dark:border-neutral-600 rounded-md
                       bg-white dark:bg-neutral-700 text-sm
                       text-neutral-900 dark:text-neutral-100
                       focus:outline-none focus:ring-2 focus:ring-neutral-500";
    let submit_class = "bg-neutral-900 dark:bg-white text-white dark:text-neutral-900
                        px-4 py-2 rounded-md hover:bg-neutral-800 dark:hover:bg-neutral-100
                        font-medium text-sm";

    html! {
        <main class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-6">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                {"Schedule"}
            </h1>

            {hook.schedule.render("schedule", |schedule, _is_loading, _error| {
                html! {
                    <div class="space-y-6">
                        <WorkingHoursEditor
                            hours={schedule.working_hours.clone()}
                            on_save={on_save_hours.clone()}
                        />

                        <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-md p-6 space-y-4">
                            <h2 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                                {"Blocked time"}
                            </h2>

                            if schedule.blocked_times.is_empty() {
                                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                    {"No blocked windows."}
                                </p>
                            } else {
                                <ul class="divide-y divide-neutral-200 dark:divide-neutral-700">
                                    {for schedule.blocked_times.iter().map(|blocked| {
                                        let on_delete = {
                                            let actions = hook.actions.clone();
                                            let toast = toast.clone();
                                            let id = blocked.id;
                                            Callback::from(move |_: MouseEvent| {
                                                let actions = actions.clone();
                                                let toast = toast.clone();
                                                yew::platform::spawn_local(async move {
                                                    match actions.delete_blocked_time(id).await {
                                                        Ok(()) => toast.success("Blocked time removed"),
                                                        Err(e) => toast.error(e),
                                                    }
                                                });
                                            })
                                        };
                                        html! {
                                            <li key={blocked.id.to_string()} class="py-2 flex items-center justify-between">
                                                <div class="text-sm text-neutral-900 dark:text-neutral-100">
                                                    {format!(
                                                        "{} {} - {}",
                                                        format_date(blocked.date),
                                                        format_time(blocked.start_time),
                                                        format_time(blocked.end_time),
                                                    )}
                                                    if let Some(reason) = &blocked.reason {
                                                        <span class="text-neutral-500 dark:text-neutral-400">
                                                            {format!(" ({reason})")}
                                                        </span>
                                                    }
                                                </div>
                                                <button
                                                    onclick={on_delete}
                                                    class="text-sm text-red-700 dark:text-red-400 underline"
                                                >
                                                    {"Remove"}
                                                </button>
                                            </li>
                                        }
                                    })}
                                </ul>
                            }

                            <form onsubmit={on_block_time.clone()} class="flex flex-wrap items-end gap-3">
                                <input ref={block_date_ref.clone()} type="date" required={true} class={input_class} />
                                <input ref={block_start_ref.clone()} type="time" required={true} class={input_class} />
                                <input ref={block_end_ref.clone()} type="time" required={true} class={input_class} />
                                <input
                                    ref={block_reason_ref.clone()}
                                    type="text"
                                    placeholder="Reason (optional)"
                                    class={input_class}
                                />
                                <button type="submit" class={submit_class}>
                                    {"Block time"}
                                </button>
                            </form>
                        </div>

                        <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-md p-6 space-y-4">
                            <h2 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                                {"Generate booking slots"}
                            </h2>
                            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                {"Materialize bookable slots from your weekly hours for a date range."}
                            </p>

                            <form onsubmit={on_generate_slots.clone()} class="flex flex-wrap items-end gap-3">
                                <input ref={slots_start_ref.clone()} type="date" required={true} class={input_class} />
                                <input ref={slots_end_ref.clone()} type="date" required={true} class={input_class} />
                                <button type="submit" class={submit_class}>
                                    {"Generate"}
                                </button>
                            </form>

                            if let Some(result) = &*slots_result {
                                <p class="text-sm text-green-700 dark:text-green-400">
                                    {format!(
                                        "Created {} slots between {} and {}",
                                        result.slots_created,
                                        format_date(result.start_date),
                                        format_date(result.end_date),
                                    )}
                                </p>
                            }
                        </div>
                    </div>
                }
            })}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil;

    #[test]
    fn html_input_values_parse() {
        assert_eq!(parse_time("09:30"), Ok(civil::time(9, 30, 0, 0)));
        assert_eq!(parse_date("2026-08-28"), Ok(civil::date(2026, 8, 28)));
        assert!(parse_time("25:00").is_err());
        assert!(parse_date("2026-13-01").is_err());
    }

    #[test]
    fn editor_rows_cover_every_weekday() {
        let saved = vec![responses::WorkingHours {
            weekday: Weekday::Tuesday,
            start_time: civil::time(10, 0, 0, 0),
            end_time: civil::time(18, 0, 0, 0),
            is_available: true,
        }];

        let entries = seed_entries(&saved);
        assert_eq!(entries.len(), 7);
        assert!(entries[1].is_available);
        assert_eq!(entries[1].start_time, civil::time(10, 0, 0, 0));
        assert!(!entries[0].is_available);
    }
}
