use crate::{Route, State, session};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

/// Tokens are bearer JWTs, so logging out is purely client-side: drop
/// the stored session and the auth state.
#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let (_, dispatch) = use_store::<State>();
    let navigator = use_navigator().unwrap();

    Callback::from(move |_| {
        session::clear();
        dispatch.reduce_mut(|state| {
            state.logout();
        });
        navigator.push(&Route::Login);
    })
}
