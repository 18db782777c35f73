//! Global Application State
//!
//! Reactive state management using Leptos signals. The state is
//! constructed once at startup and provided to every component via
//! context; all navigation and wish mutations flow through it.

use leptos::*;
use std::collections::HashMap;

use crate::state::router::{nav_effects, Page, Room};
use crate::state::wishes::{next_emoji, WishList, DEFAULT_EMOJI, DEFAULT_ROOM, EMPTY_TITLE_PROMPT};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// The single active page.
    pub active_page: RwSignal<Page>,
    /// Ambient home-background experience toggle.
    pub home_ambient: RwSignal<bool>,
    /// Custom pointer overlay visibility, hidden after any navigation.
    pub cursor_hidden: RwSignal<bool>,
    /// Detail page titles, overwritten by room-card clicks.
    pub detail_titles: RwSignal<HashMap<Room, String>>,
    /// All wishes.
    pub wishes: RwSignal<WishList>,
    /// Bumped whenever the countdown-ring fill should restart.
    pub ring_epoch: RwSignal<u32>,
    /// Wish plan modal state.
    pub modal: WishModalState,
}

/// Transient state of the wish plan modal. Holds only a draft of the
/// wish being edited; the store stays authoritative until save.
#[derive(Clone, Copy)]
pub struct WishModalState {
    pub open: RwSignal<bool>,
    /// Id of the wish being edited, `None` while creating.
    pub editing: RwSignal<Option<u32>>,
    pub emoji: RwSignal<String>,
    pub title: RwSignal<String>,
    pub room: RwSignal<String>,
    pub note: RwSignal<String>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let modal = WishModalState {
        open: create_rw_signal(false),
        editing: create_rw_signal(None),
        emoji: create_rw_signal(DEFAULT_EMOJI.to_string()),
        title: create_rw_signal(String::new()),
        room: create_rw_signal(DEFAULT_ROOM.to_string()),
        note: create_rw_signal(String::new()),
    };

    let titles: HashMap<Room, String> = Room::ALL
        .iter()
        .map(|room| (*room, room.display_name().to_string()))
        .collect();

    let state = GlobalState {
        active_page: create_rw_signal(Page::Home),
        home_ambient: create_rw_signal(true),
        cursor_hidden: create_rw_signal(false),
        detail_titles: create_rw_signal(titles),
        wishes: create_rw_signal(WishList::seeded()),
        ring_epoch: create_rw_signal(0),
        modal,
    };

    provide_context(state);
}

impl GlobalState {
    /// Navigate to a page, applying the per-target side effects.
    pub fn navigate_to(&self, target: Page) {
        let effects = nav_effects(target);
        self.active_page.set(target);
        self.home_ambient.set(effects.ambient_home);
        self.cursor_hidden.set(effects.hide_cursor);
        if effects.restart_ring {
            self.ring_epoch.update(|epoch| *epoch += 1);
        }
        // The wish grid follows the store signal, so refresh_grid
        // needs no extra work here.
    }

    /// Navigate by page identifier. Unknown identifiers are a silent
    /// no-op: the previously active page stays active.
    pub fn navigate_to_slug(&self, slug: &str) {
        if let Some(target) = Page::from_slug(slug) {
            self.navigate_to(target);
        }
    }

    /// Room-card click: overwrite the detail page title with the
    /// card's display name, then open that detail page.
    pub fn open_room_detail(&self, room: Room, display_name: &str) {
        let display_name = display_name.to_string();
        self.detail_titles.update(|titles| {
            titles.insert(room, display_name);
        });
        self.navigate_to(Page::Detail(room));
    }

    /// Title currently shown on a detail page.
    pub fn detail_title(&self, room: Room) -> String {
        self.detail_titles.with(|titles| {
            titles
                .get(&room)
                .cloned()
                .unwrap_or_else(|| room.display_name().to_string())
        })
    }

    /// Open the modal with a blank draft.
    pub fn open_wish_creator(&self) {
        self.modal.editing.set(None);
        self.modal.emoji.set(DEFAULT_EMOJI.to_string());
        self.modal.title.set(String::new());
        self.modal.room.set(DEFAULT_ROOM.to_string());
        self.modal.note.set(String::new());
        self.modal.open.set(true);
    }

    /// Open the modal pre-filled with an existing wish, or no-op when
    /// the id is unknown.
    pub fn open_wish_editor(&self, id: u32) {
        let wish = match self.wishes.with_untracked(|wishes| wishes.get(id).cloned()) {
            Some(wish) => wish,
            None => return,
        };
        self.modal.editing.set(Some(id));
        self.modal.emoji.set(wish.emoji);
        self.modal.title.set(wish.title);
        self.modal.room.set(wish.room);
        self.modal.note.set(wish.note);
        self.modal.open.set(true);
    }

    /// Persist the draft: update the edited wish, or create a new one
    /// when no id is being edited. An empty trimmed title aborts with
    /// the user-facing prompt and leaves store and modal untouched.
    pub fn save_wish(&self) -> Result<(), String> {
        let title = self.modal.title.get_untracked();
        if title.trim().is_empty() {
            return Err(EMPTY_TITLE_PROMPT.to_string());
        }
        let emoji = self.modal.emoji.get_untracked();
        let room = self.modal.room.get_untracked();
        let note = self.modal.note.get_untracked();

        let editing = self.modal.editing.get_untracked();
        let mut result = Ok(());
        self.wishes.update(|wishes| {
            result = match editing {
                Some(id) => {
                    // Unknown ids fall through silently, as the
                    // original editor does.
                    wishes.update(id, &emoji, &title, &room, &note);
                    Ok(())
                }
                None => wishes.add(&emoji, &title, &room, &note).map(|_id| ()),
            };
        });

        if result.is_ok() {
            self.close_wish_modal();
        }
        result
    }

    /// Close the modal, discarding unsaved edits.
    pub fn close_wish_modal(&self) {
        self.modal.open.set(false);
        self.modal.editing.set(None);
    }

    /// Advance the draft emoji through the fixed cycle.
    pub fn cycle_wish_emoji(&self) {
        self.modal.emoji.update(|emoji| {
            *emoji = next_emoji(emoji).to_string();
        });
    }
}
