//! Sign-in page with email/password and Google sign-in.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::{HOME_PATH, SIGN_UP_PATH};
use crate::components::brand_panel::BrandPanel;
use crate::net::identity::{AuthClient, FederatedProvider, IdentityProvider, Session};
use crate::state::auth::AuthState;
use crate::state::sign_in::{Attempt, FormCell, SignInForm, SignInMethod, SubmitRejected};

/// How a sign-in attempt ended.
#[derive(Debug, PartialEq, Eq)]
pub enum AttemptOutcome {
    SignedIn(Session),
    /// The provider failed; its message is now in the form's `error`.
    Failed,
    /// The form refused to start; the provider was not called.
    Rejected(SubmitRejected),
    /// The form was dropped before the provider settled.
    Abandoned,
}

/// Drive one attempt: guarded start, provider call, settle.
///
/// On success `redirect` receives the session and the home path before the
/// outcome is returned. On failure nothing navigates.
pub async fn run_attempt<C, P, F>(form: &C, provider: &P, method: SignInMethod, redirect: F) -> AttemptOutcome
where
    C: FormCell,
    P: IdentityProvider + ?Sized,
    F: FnOnce(&Session, &str),
{
    let attempt = match form.with_form(|f| f.begin(method)) {
        Some(Ok(attempt)) => attempt,
        Some(Err(rejected)) => return AttemptOutcome::Rejected(rejected),
        None => return AttemptOutcome::Abandoned,
    };

    let result = match attempt {
        Attempt::Credentials(credentials) => provider.sign_in_with_email_password(credentials).await,
        Attempt::Federated(federated) => provider.sign_in_with_popup(federated).await,
    };

    match form.with_form(|f| f.settle(result)) {
        Some(Some(session)) => {
            redirect(&session, HOME_PATH);
            AttemptOutcome::SignedIn(session)
        }
        Some(None) => AttemptOutcome::Failed,
        None => AttemptOutcome::Abandoned,
    }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = expect_context::<AuthClient>();
    let navigate = use_navigate();
    let form = RwSignal::new(SignInForm::default());

    let start = move |method: SignInMethod| {
        let client = client.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let redirect = |session: &Session, path: &str| {
                auth.update(|a| a.sign_in(session.clone()));
                navigate(path, NavigateOptions::default());
            };
            match run_attempt(&form, client.provider(), method, redirect).await {
                AttemptOutcome::SignedIn(session) => {
                    leptos::logging::log!("signed in via {}", session.provider);
                }
                AttemptOutcome::Failed => leptos::logging::log!("sign-in failed"),
                AttemptOutcome::Rejected(rejected) => {
                    leptos::logging::log!("sign-in attempt rejected: {rejected}");
                }
                AttemptOutcome::Abandoned => {}
            }
        });
    };

    let on_submit = {
        let start = start.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            start(SignInMethod::Credentials);
        }
    };
    let on_google = move |_| start(SignInMethod::Federated(FederatedProvider::Google));

    let submitting = move || form.with(SignInForm::is_submitting);

    view! {
        <div class="sign-in-page">
            <div class="sign-in-card">
                <h2 class="sign-in-card__title">"Sign In"</h2>
                <form class="sign-in-form" on:submit=on_submit>
                    <div class="sign-in-form__field">
                        <label class="sign-in-form__label" for="sign-in-email">"Email"</label>
                        <input
                            id="sign-in-email"
                            class="sign-in-form__input"
                            type="email"
                            name="email"
                            placeholder="Enter your email"
                            autocomplete="email"
                            required
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                        />
                    </div>
                    <div class="sign-in-form__field">
                        <label class="sign-in-form__label" for="sign-in-password">"Password"</label>
                        <input
                            id="sign-in-password"
                            class="sign-in-form__input"
                            type="password"
                            name="password"
                            placeholder="Enter your password"
                            autocomplete="current-password"
                            required
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                        />
                    </div>
                    <Show when=move || form.with(|f| f.visible_error().is_some())>
                        <p class="sign-in-form__error" role="alert">
                            {move || form.with(|f| f.visible_error().unwrap_or_default().to_owned())}
                        </p>
                    </Show>
                    <button class="sign-in-form__submit" type="submit" disabled=submitting>
                        "Sign In"
                    </button>
                    <button
                        class="sign-in-form__google"
                        type="button"
                        on:click=on_google
                        disabled=submitting
                    >
                        {format!("Sign In with {}", FederatedProvider::Google.label())}
                    </button>
                    <p class="sign-in-form__footer">
                        "Don't have an account?"
                        <a href=SIGN_UP_PATH class="sign-in-form__link">"Sign Up"</a>
                    </p>
                </form>
            </div>
            <BrandPanel/>
        </div>
    }
}
