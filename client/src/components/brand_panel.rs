//! Product title and tagline shown beside the sign-in form.

use leptos::prelude::*;

pub const PRODUCT_NAME: &str = "Genesis";
pub const TAGLINE: &str = "Explore in-depth analytics, statistics, and updates for all your favorite games.";

#[component]
pub fn BrandPanel() -> impl IntoView {
    view! {
        <div class="brand-panel">
            <h1 class="brand-panel__title">{PRODUCT_NAME}</h1>
            <p class="brand-panel__tagline">{TAGLINE}</p>
        </div>
    }
}
