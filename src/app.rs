//! App Root Component
//!
//! Composes every page behind the single-active-page router and wires
//! the global providers.

use leptos::*;

use crate::components::WishPlanModal;
use crate::pages::{DetailPage, HomePage, RoomsPage, TodoPage};
use crate::state::global::{provide_global_state, GlobalState};
use crate::state::router::{Page, Room};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Land on the home page with its side effects applied.
    state.navigate_to(Page::Home);

    view! {
        <div class="app">
            <HomeExperience />
            <CustomCursor />

            <main class="app__pages">
                <HomePage />
                <RoomsPage />
                {Room::ALL
                    .iter()
                    .map(|room| view! { <DetailPage room=*room /> })
                    .collect_view()}
                <TodoPage />
            </main>

            // Create/edit overlay for the wish list
            <WishPlanModal />
        </div>
    }
}

/// Ambient background layer active only while the home page is shown.
#[component]
fn HomeExperience() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div
            class="home-experience"
            id="homeExperience"
            class=("home-experience--inactive", move || !state.home_ambient.get())
        />
    }
}

/// Custom pointer overlay. Navigation hides it for home and non-home
/// targets alike, exactly as the original behaves.
#[component]
fn CustomCursor() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div
            class="custom-cursor"
            id="customCursor"
            style:opacity=move || if state.cursor_hidden.get() { "0" } else { "1" }
        />
    }
}
