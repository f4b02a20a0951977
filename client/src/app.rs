//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::config::{IdentityConfig, META_NAME};
use crate::net::firebase::FirebaseAuth;
use crate::net::identity::AuthClient;
use crate::pages::{home::HomePage, sign_in::SignInPage, sign_up::SignUpPage};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `identity` is embedded as a meta tag so the hydrated app builds the same
/// identity adapter the server rendered with.
pub fn shell(options: LeptosOptions, identity: IdentityConfig) -> impl IntoView {
    let identity_meta = identity.to_meta_content();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=META_NAME content=identity_meta/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the signed-in session and the identity client, then sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let client = AuthClient::new(FirebaseAuth::new(IdentityConfig::load()));

    provide_context(auth);
    provide_context(client);

    view! {
        <Stylesheet id="leptos" href="/pkg/genesis.css"/>
        <Title text="Genesis"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("signin") view=SignInPage/>
                <Route path=StaticSegment("signup") view=SignUpPage/>
            </Routes>
        </Router>
    }
}
