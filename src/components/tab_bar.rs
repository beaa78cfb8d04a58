//! Tab navigation for the protected screens.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Home/Settings tabs plus the color-scheme toggle.
#[component]
pub fn TabBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle = move |_| {
        ui.update(|state| state.dark_mode = crate::util::dark_mode::toggle(state.dark_mode));
    };

    view! {
        <nav class="tab-bar">
            <a href="/" class="tab-bar__link">"Home"</a>
            <a href="/settings" class="tab-bar__link">"Settings"</a>
            <button class="tab-bar__toggle" title="Toggle dark mode" on:click=on_toggle>
                {move || if ui.get().dark_mode { "Light mode" } else { "Dark mode" }}
            </button>
        </nav>
    }
}
