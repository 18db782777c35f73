//! Wish Cards
//!
//! The wish grid, rebuilt from the store signal on every change so
//! repeated renders with identical contents stay equivalent.

use leptos::*;

use crate::color;
use crate::state::global::GlobalState;
use crate::state::wishes::room_color;

/// Alpha applied to room colors so the frosted backdrop shows through.
const CARD_ALPHA: f64 = 0.7;

/// Wish card grid bound to the store. Clicking a card opens the edit
/// modal pre-filled with that wish.
#[component]
pub fn WishGrid() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="wish-grid" id="wishGrid">
            {move || {
                state.wishes.with(|wishes| {
                    wishes
                        .items()
                        .iter()
                        .map(|wish| {
                            let id = wish.id;
                            let background = color::translucent(room_color(&wish.room), CARD_ALPHA);
                            view! {
                                <div
                                    class="wish-card"
                                    data-wish-id=id.to_string()
                                    style:background-color=background
                                    on:click=move |_| state.open_wish_editor(id)
                                >
                                    <div class="wish-card__emoji">{wish.emoji.clone()}</div>
                                    <div class="wish-card__title">{wish.title.clone()}</div>
                                    <div class="wish-card__room">{format!("📍{}", wish.room)}</div>
                                </div>
                            }
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}
