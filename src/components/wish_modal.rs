//! Wish Plan Modal
//!
//! Create/edit form overlay bound to the wish store. Closing discards
//! the draft; saving validates the title before touching the store.

use leptos::*;

use crate::state::global::GlobalState;
use crate::state::wishes::ROOM_CHOICES;

/// Wish plan form overlay.
#[component]
pub fn WishPlanModal() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let modal = state.modal;

    let on_save = move |_| {
        if let Err(message) = state.save_wish() {
            // Blocking prompt; the modal stays open with the draft.
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&message);
            }
        }
    };

    view! {
        <div
            class="wish-plan"
            id="wishPlanModal"
            class=("active", move || modal.open.get())
        >
            <div class="wish-plan-backdrop" on:click=move |_| state.close_wish_modal() />

            <div class="wish-plan__dialog">
                <button class="wish-plan-close" on:click=move |_| state.close_wish_modal()>
                    "×"
                </button>

                <h2 class="wish-plan__heading">
                    {move || if modal.editing.get().is_some() { "编辑愿望" } else { "新愿望" }}
                </h2>

                // Tap to cycle through the fixed emoji list
                <div class="wish-plan__emoji-row">
                    <span class="wish-plan__emoji" id="wishPlanEmoji">
                        {move || modal.emoji.get()}
                    </span>
                    <button
                        class="wish-plan__emoji-change"
                        id="wishPlanEmojiChange"
                        on:click=move |_| state.cycle_wish_emoji()
                    >
                        "换一个"
                    </button>
                </div>

                <label class="wish-plan__field">
                    <span>"愿望标题"</span>
                    <input
                        type="text"
                        id="wishPlanTitle"
                        prop:value=move || modal.title.get()
                        on:input=move |ev| modal.title.set(event_target_value(&ev))
                    />
                </label>

                <label class="wish-plan__field">
                    <span>"房间"</span>
                    <select
                        id="wishPlanRoom"
                        prop:value=move || modal.room.get()
                        on:change=move |ev| modal.room.set(event_target_value(&ev))
                    >
                        {ROOM_CHOICES
                            .iter()
                            .map(|room| view! { <option value=*room>{*room}</option> })
                            .collect_view()}
                    </select>
                </label>

                <label class="wish-plan__field">
                    <span>"备注"</span>
                    <textarea
                        id="wishPlanNote"
                        prop:value=move || modal.note.get()
                        on:input=move |ev| modal.note.set(event_target_value(&ev))
                    />
                </label>

                <button class="wish-plan__save" id="wishPlanSave" on:click=on_save>
                    "保存"
                </button>
            </div>
        </div>
    }
}
