//! Home page shown after a successful sign-in.

use leptos::prelude::*;

use super::SIGN_IN_PATH;
use crate::components::brand_panel::BrandPanel;
use crate::state::auth::AuthState;

/// Home page — greets the signed-in user or points to the sign-in page.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_sign_out = move |_| auth.update(AuthState::sign_out);

    view! {
        <div class="home-page">
            <BrandPanel/>
            <Show
                when=move || auth.with(AuthState::is_signed_in)
                fallback=|| {
                    view! {
                        <p class="home-page__prompt">
                            <a href=SIGN_IN_PATH class="home-page__link">"Sign in"</a>
                            " to continue."
                        </p>
                    }
                }
            >
                <p class="home-page__greeting">
                    "Signed in as "
                    <span>{move || auth.with(AuthState::display_name).unwrap_or_default()}</span>
                </p>
                <button class="home-page__sign-out" type="button" on:click=on_sign_out>
                    "Sign out"
                </button>
            </Show>
        </div>
    }
}
