//! The theme trigger button.
//!
//! SYSTEM CONTEXT
//! ==============
//! The one interactive element of the blog chrome. Its label always names
//! the theme the reader would switch *to*, never the active one, so
//! clicking it means "give me what the button says".

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::state::theme::Theme;
use crate::state::ui::UiState;
use crate::util::browser::BrowserToggler;

/// The label the trigger shows while `active` is displayed.
pub(crate) fn next_label(active: Theme) -> &'static str {
    active.opposite().as_str()
}

/// Theme toggle button for the page header.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let toggler = expect_context::<BrowserToggler>();

    view! {
        <button
            id="theme"
            class="theme-toggle"
            on:click=move |_| {
                let next = ui.get().theme.opposite();
                toggler.activate(next);
                ui.update(|u| u.theme = next);
            }
            title="Switch color theme"
        >
            {move || next_label(ui.get().theme)}
        </button>
    }
}
