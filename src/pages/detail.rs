//! Detail Pages
//!
//! Per-room detail view: two cross-fading background layers scrubbed
//! by the timeline slider, plus an inspiration reveal. Every detail
//! page owns an independent slider instance.

use leptos::*;

use crate::components::timeline_slider::{layer_opacities, INITIAL_POSITION};
use crate::components::{RevealPanel, TimelineSlider};
use crate::state::global::GlobalState;
use crate::state::router::{Page, Room};

/// Room detail page component
#[component]
pub fn DetailPage(room: Room) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let position = create_rw_signal(INITIAL_POSITION);

    view! {
        <section
            class="page detail-page"
            data-page=Page::Detail(room).slug()
            class=("active", move || state.active_page.get() == Page::Detail(room))
        >
            // Cross-fade layers driven by the slider position
            <div
                class="detail-page__background detail-page__background--layer-1"
                style:opacity=move || format!("{}", layer_opacities(position.get()).0)
            >
                <img
                    class="detail-page__background-image"
                    src=format!("assets/{}-before.jpg", room.slug())
                    alt=""
                />
            </div>
            <div
                class="detail-page__background detail-page__background--layer-2"
                style:opacity=move || format!("{}", layer_opacities(position.get()).1)
            >
                <img
                    class="detail-page__background-image"
                    src=format!("assets/{}-after.jpg", room.slug())
                    alt=""
                />
            </div>

            <header class="detail-page__header">
                <button
                    class="detail-page__back-button"
                    on:click=move |_| state.navigate_to(Page::Rooms)
                >
                    "返回"
                </button>
                <h1 class="detail-page__title">{move || state.detail_title(room)}</h1>
            </header>

            <div class="timeline">
                <span class="timeline__label">"改造前"</span>
                <TimelineSlider position=position />
                <span class="timeline__label">"改造后"</span>
            </div>

            <RevealPanel reveal_id=room.slug() label="灵感">
                <p class="detail-reveal__text">{inspiration(room)}</p>
            </RevealPanel>
        </section>
    }
}

/// Inspiration blurb for each room's reveal panel.
fn inspiration(room: Room) -> &'static str {
    match room {
        Room::LivingRoom => "把咖啡角安排在窗边，配一盏落地灯和一张小边几。",
        Room::Bedroom => "床头墙留给照片，暖色灯带沿着吊顶走一圈。",
        Room::Balcony => "绿植分三层摆放，留出一把折叠椅的位置。",
        Room::Study => "书架靠西墙通顶，桌面只留一盏台灯。",
        Room::Spare => "先空着，等住进来再决定它的用途。",
    }
}
