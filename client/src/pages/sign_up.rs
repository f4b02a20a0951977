//! Sign-up route. Account creation happens with the identity provider
//! directly; this page only points back to sign-in.

use leptos::prelude::*;

use super::SIGN_IN_PATH;

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! {
        <div class="sign-up-page">
            <h2 class="sign-up-page__title">"Sign Up"</h2>
            <p class="sign-up-page__text">"Account registration is not open yet."</p>
            <p class="sign-up-page__text">
                "Already have an account?"
                <a href=SIGN_IN_PATH class="sign-up-page__link">"Sign In"</a>
            </p>
        </div>
    }
}
