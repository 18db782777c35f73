//! Todo Page
//!
//! The wish list: a grid of wish cards plus the add entry point.

use leptos::*;

use crate::components::WishGrid;
use crate::state::global::GlobalState;
use crate::state::router::Page;

/// Wish list page component
#[component]
pub fn TodoPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <section
            class="page todo-page"
            data-page="todo"
            class=("active", move || state.active_page.get() == Page::Todo)
        >
            <header class="todo-page__header">
                <button
                    class="todo-page__back-button"
                    on:click=move |_| state.navigate_to(Page::Rooms)
                >
                    "返回"
                </button>
                <h1 class="todo-page__title">"愿望清单"</h1>
                <button
                    class="todo-page__add-button"
                    on:click=move |_| state.open_wish_creator()
                >
                    "+"
                </button>
            </header>

            <WishGrid />
        </section>
    }
}
