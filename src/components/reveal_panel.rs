//! Reveal Panel
//!
//! Collapsible inspiration panel toggled by its own trigger. Every
//! trigger/panel pair keeps independent visibility and ARIA state.

use leptos::*;

/// A trigger/panel pair. Starts hidden; each trigger click toggles the
/// panel and flips both ARIA attributes to match.
#[component]
pub fn RevealPanel(
    /// Shared identifier tying the trigger to its panel for styling.
    reveal_id: &'static str,
    /// Trigger label.
    label: &'static str,
    children: Children,
) -> impl IntoView {
    let visible = create_rw_signal(false);

    view! {
        <div class="detail-reveal">
            <button
                class="detail-reveal__trigger"
                data-reveal-trigger=reveal_id
                aria-expanded=move || visible.get().to_string()
                on:click=move |_| visible.update(|v| *v = !*v)
            >
                {label}
            </button>
            <div
                class="detail-reveal__panel"
                class=("detail-reveal__panel--visible", move || visible.get())
                data-reveal-panel=reveal_id
                aria-hidden=move || (!visible.get()).to_string()
            >
                {children()}
            </div>
        </div>
    }
}
