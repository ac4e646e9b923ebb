use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::FetchState;
use super::lifecycle::FetchLifecycle;

/// Generic resource hook return type
pub struct ResourceHandle<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    /// True when `data` survived a failed refresh and predates `error`.
    pub is_stale: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T: Clone> ResourceHandle<T> {
    /// Returns true if this is the initial load (data not yet fetched,
    /// currently loading, and no error).
    pub fn is_initial_loading(&self) -> bool {
        self.is_loading && !self.data.is_fetched() && self.error.is_none()
    }

    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// This handles the common pattern of:
    /// - No data + loading: Show "Loading {context}..."
    /// - No data + error: Show "Error loading {context}: ..."
    /// - Has data: Call render function with (data, is_loading, error)
    ///
    /// The render function receives:
    /// - `data`: The fetched data
    /// - `is_loading`: True if a refetch is in progress
    /// - `error`: Error from a failed refetch (data from the previous
    ///   fetch still shown, flagged stale on the handle)
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool, Option<&String>) -> Html,
    {
        match self.data.as_ref() {
            None => {
                // No data case
                if self.is_loading {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("Loading {}...", context)}
                            </p>
                        </div>
                    }
                } else if let Some(error) = &self.error {
                    html! {
                        <div class="p-4 rounded-md bg-red-50 \
                                   dark:bg-red-900/20 border \
                                   border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700 \
                                      dark:text-red-400">
                                {format!("Error loading {}: {}", context, error)}
                            </p>
                        </div>
                    }
                } else {
                    // Shouldn't happen: no data, not loading, no error
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("No {} found", context)}
                            </p>
                        </div>
                    }
                }
            }
            Some(data) => {
                // Has data - render with loading/error state for refetches
                render_fn(data, self.is_loading, self.error.as_ref())
            }
        }
    }
}

/// Generic resource hook composer.
///
/// Automatically fetches on mount and provides refetch capability. The
/// fetch function captures dependencies from the closure; the deps
/// parameter is used for dependency tracking in use_callback and
/// use_effect_with.
///
/// Ordering is enforced by the ticketed [`FetchLifecycle`]: when
/// refetches overlap, the state always ends up reflecting the
/// last-issued call, and nothing settles after the component unmounts.
///
/// # Example
///
/// ```rust
/// # use yew::prelude::*;
/// # use payloads::responses::EarningsReport;
/// # use ui::get_api_client;
/// # use ui::hooks::{ResourceHandle, use_resource};
/// #[hook]
/// pub fn use_provider_earnings() -> ResourceHandle<EarningsReport> {
///     use_resource((), || async move {
///         let api_client = get_api_client();
///         api_client
///             .get_provider_earnings()
///             .await
///             .map_err(|e| e.to_string())
///     })
/// }
/// ```
#[hook]
pub fn use_resource<T, D, F, Fut>(deps: D, fetch_fn: F) -> ResourceHandle<T>
where
    T: Clone + PartialEq + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let lifecycle = use_mut_ref(FetchLifecycle::<T>::new);
    let snapshot = use_state(|| lifecycle.borrow().snapshot());

    let refetch = {
        let lifecycle = lifecycle.clone();
        let snapshot = snapshot.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_, _| {
            let lifecycle = lifecycle.clone();
            let snapshot = snapshot.clone();
            let fetch_fn = fetch_fn.clone();

            // A closed lifecycle means the consumer unmounted; a stray
            // late refetch must not hit the network on its behalf.
            let Some(ticket) = lifecycle.borrow_mut().begin() else {
                return;
            };
            snapshot.set(lifecycle.borrow().snapshot());

            yew::platform::spawn_local(async move {
                let result = fetch_fn().await;
                // A superseded ticket means a newer call (or an
                // unmount) owns the state now; drop the response.
                if lifecycle.borrow_mut().settle(ticket, result) {
                    snapshot.set(lifecycle.borrow().snapshot());
                }
            });
        })
    };

    // Auto-fetch on mount and when deps change. The destructor
    // invalidates outstanding tickets and closes the lifecycle so
    // nothing settles or starts after unmount; the next effect run
    // reopens it first.
    {
        let refetch = refetch.clone();
        let lifecycle = lifecycle.clone();

        use_effect_with(deps, move |_| {
            lifecycle.borrow_mut().resume();
            refetch.emit(());
            move || {
                lifecycle.borrow_mut().invalidate();
            }
        });
    }

    let snap = (*snapshot).clone();
    ResourceHandle {
        data: snap.data,
        is_loading: snap.loading,
        is_stale: snap.stale,
        error: snap.error,
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}

/// Finish a mutation under the invalidate-and-reload rule: a success
/// emits the owning resource's refetch exactly once, a failure resolves
/// `Err` without touching the displayed snapshot. Every action hook
/// routes its result through here.
pub(crate) fn settle_mutation<T, E: std::fmt::Display>(
    result: Result<T, E>,
    refetch: &Callback<()>,
) -> Result<T, String> {
    match result {
        Ok(value) => {
            refetch.emit(());
            Ok(value)
        }
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::ClientError;
    use std::cell::Cell;

    fn counting_refetch() -> (Callback<()>, Rc<Cell<usize>>) {
        let count = Rc::new(Cell::new(0));
        let callback = {
            let count = count.clone();
            Callback::from(move |_| count.set(count.get() + 1))
        };
        (callback, count)
    }

    #[test]
    fn successful_mutation_reloads_exactly_once() {
        let (refetch, count) = counting_refetch();

        let outcome =
            settle_mutation(Ok::<_, ClientError>("created"), &refetch);

        assert_eq!(outcome, Ok("created"));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn failed_mutation_never_reloads() {
        let (refetch, count) = counting_refetch();

        let outcome = settle_mutation(
            Err::<(), _>(ClientError::Parse("bad body".to_string())),
            &refetch,
        );

        assert_eq!(outcome.unwrap_err(), "Unexpected response from server");
        assert_eq!(count.get(), 0);
    }
}
