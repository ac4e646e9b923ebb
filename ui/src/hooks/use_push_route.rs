use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Navigation that behaves like a fresh page visit: push the route,
/// then reset the scroll position so the offset of a long services list
/// doesn't carry into the next page.
#[hook]
pub fn use_push_route() -> Callback<Route> {
    let navigator = use_navigator();
    Callback::from(move |route: Route| {
        let Some(navigator) = &navigator else {
            tracing::warn!("navigation requested outside a router context");
            return;
        };
        navigator.push(&route);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    })
}
