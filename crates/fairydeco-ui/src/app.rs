//! Main application component.

use leptos::prelude::*;

use crate::components::Header;

/// Main application component.
///
/// Routing and page content belong to the surrounding application; this
/// shell only places the header above the content area.
#[component]

pub fn App() -> impl IntoView {
    view! {
        <div class="app">
            <Header />
            <main class="page-content"></main>
        </div>
    }
}
