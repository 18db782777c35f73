//! Home Page
//!
//! Landing view with the entry into the rooms grid.

use leptos::*;

use crate::state::global::GlobalState;
use crate::state::router::Page;

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <section
            class="page home-page"
            data-page="home"
            class=("active", move || state.active_page.get() == Page::Home)
        >
            <h1 class="home-page__title">"家的记忆"</h1>
            <p class="home-page__subtitle">"Home Memories"</p>

            <button class="home-page__button" on:click=move |_| state.navigate_to(Page::Rooms)>
                "走进新家"
            </button>
        </section>
    }
}
