//! Rooms Page
//!
//! Room card grid with the move-in countdown ring.

use leptos::*;

use crate::components::CountdownRing;
use crate::state::global::GlobalState;
use crate::state::router::{Page, Room};

/// Days left until move-in, as displayed inside the ring.
const DAYS_REMAINING_LABEL: &str = "71";

/// Rooms overview page component
#[component]
pub fn RoomsPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <section
            class="page rooms-page"
            data-page="rooms"
            class=("active", move || state.active_page.get() == Page::Rooms)
        >
            <header class="rooms-page__header">
                <button
                    class="rooms-page__back-button"
                    on:click=move |_| state.navigate_to(Page::Home)
                >
                    "返回"
                </button>
                <h1 class="rooms-page__title">"房间"</h1>
                <button
                    class="rooms-page__todo-button"
                    on:click=move |_| state.navigate_to(Page::Todo)
                >
                    "愿望清单"
                </button>
            </header>

            // Move-in countdown
            <div class="rooms-page__countdown">
                <CountdownRing days_text=DAYS_REMAINING_LABEL restart=state.ring_epoch />
                <p class="rooms-page__countdown-caption">"距离入住"</p>
            </div>

            <div class="rooms-page__grid">
                {Room::ALL
                    .iter()
                    .map(|room| view! { <RoomCard room=*room /> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// A clickable room card opening the matching detail page.
#[component]
fn RoomCard(room: Room) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div
            class="room-card"
            data-room=room.slug()
            data-room-name=room.display_name()
            data-room-name-en=room.display_name_en()
            on:click=move |_| state.open_room_detail(room, room.display_name())
        >
            <span class="room-card__emoji">{room.emoji()}</span>
            <span class="room-card__name">{room.display_name()}</span>
            <span class="room-card__name-en">{room.display_name_en()}</span>
        </div>
    }
}
