use yew::prelude::*;
use yewdux::prelude::*;

use crate::{AuthState, State, get_api_client, session};

/// Hook to restore and validate the auth session on startup.
///
/// The stored profile is trusted immediately so the first render isn't
/// blocked on the network, then revalidated against the backend. A 401
/// means the tokens expired and the session is dropped; a network error
/// keeps the stored session so a flaky connection doesn't log the user
/// out.
#[hook]
pub fn use_authentication() {
    let (_state, dispatch) = use_store::<State>();

    use_effect_with((), {
        let dispatch = dispatch.clone();
        move |_| {
            let Some(stored) = session::load() else {
                dispatch.reduce_mut(|state| {
                    state.auth_state = AuthState::LoggedOut;
                });
                return;
            };

            dispatch.reduce_mut(|state| {
                state.auth_state = AuthState::LoggedIn(stored.user.clone());
            });

            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                match api_client.user_profile().await {
                    Ok(profile) => {
                        session::store(&payloads::Session {
                            user: profile.clone(),
                            ..stored
                        });
                        dispatch.reduce_mut(|state| {
                            state.auth_state = AuthState::LoggedIn(profile);
                        });
                    }
                    Err(e) if e.is_unauthorized() => {
                        session::clear();
                        dispatch.reduce_mut(|state| {
                            state.logout();
                        });
                    }
                    Err(e) => {
                        // Keep the stored session; revalidation will run
                        // again on the next page load.
                        tracing::warn!("Could not revalidate session: {e}");
                    }
                }
            });
        }
    });
}
