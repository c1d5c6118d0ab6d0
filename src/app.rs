//! Root component: context wiring and page chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the shared `UiState` signal and the browser-wired toggler,
//! resolves the starting theme once on mount, and renders the header chrome
//! that hosts the toggle button. The article content itself is static
//! markup in the host page.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::state::ui::UiState;
use crate::util::browser;

/// Root of the client app.
#[component]
pub fn App() -> impl IntoView {
    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    let toggler = browser::toggler();
    provide_context(toggler);

    // Stored preference, else the OS color scheme. Runs once on mount so
    // `data-theme` is settled before the reader interacts.
    Effect::new(move || {
        let theme = toggler.initial(browser::system_preference());
        ui.update(|u| u.theme = theme);
    });

    view! {
        <header class="masthead">
            <span class="masthead__title">"rodolfo's blog"</span>
            <span class="masthead__spacer"></span>
            <ThemeToggle />
        </header>
    }
}
