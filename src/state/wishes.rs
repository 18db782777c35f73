//! Wish Store
//!
//! In-memory list of wish items with create/update semantics, plus the
//! fixed emoji cycle and room color table the wish views draw from.

use serde::{Deserialize, Serialize};

/// Message shown when a wish is saved without a title.
pub const EMPTY_TITLE_PROMPT: &str = "请输入愿望标题";

/// Default emoji for a freshly created wish.
pub const DEFAULT_EMOJI: &str = "☕";

/// Default room for a freshly created wish.
pub const DEFAULT_ROOM: &str = "客厅";

/// Fallback card color for rooms missing from the table.
pub const DEFAULT_ROOM_COLOR: &str = "#E8DED5";

/// Emoji choices offered by the modal, in cycling order.
pub const EMOJI_CHOICES: [&str; 15] = [
    "☕", "🌿", "📸", "🛋️", "🍳", "📚", "🛏️", "🌱", "🖼️", "💡", "🎨", "📖", "🪴", "🕯️", "🎵",
];

/// Known room names selectable for a wish.
pub const ROOM_CHOICES: [&str; 6] = ["客厅", "卧室", "厨房", "阳台", "书房", "房间"];

/// Card background color for a room name.
pub fn room_color(room: &str) -> &'static str {
    match room {
        "客厅" => "#E8DED5",
        "卧室" => "#E8D5D8",
        "厨房" => "#F4E8D9",
        "阳台" => "#DEE8D5",
        "书房" => "#E8DED5",
        "房间" => "#E8D5D8",
        _ => DEFAULT_ROOM_COLOR,
    }
}

/// Next emoji in the cycle, wrapping at the end. A value outside the
/// cycle restarts at the first entry.
pub fn next_emoji(current: &str) -> &'static str {
    let next = EMOJI_CHOICES
        .iter()
        .position(|emoji| *emoji == current)
        .map(|index| (index + 1) % EMOJI_CHOICES.len())
        .unwrap_or(0);
    EMOJI_CHOICES[next]
}

/// A single wish entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WishItem {
    pub id: u32,
    pub emoji: String,
    pub title: String,
    pub room: String,
    #[serde(default)]
    pub note: String,
}

/// Insertion-ordered wish list. Ids are unique and monotonic; items
/// are mutated in place and never deleted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WishList {
    items: Vec<WishItem>,
}

impl WishList {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The six starter wishes shown before any editing.
    pub fn seeded() -> Self {
        let seeds = [
            (1, "☕", "设置咖啡角", "客厅"),
            (2, "🌿", "养绿植", "阳台"),
            (3, "📸", "照片墙", "卧室"),
            (4, "🛋️", "买沙发", "客厅"),
            (5, "🍳", "添置烤箱", "厨房"),
            (6, "📚", "书架", "书房"),
        ];
        Self {
            items: seeds
                .iter()
                .map(|(id, emoji, title, room)| WishItem {
                    id: *id,
                    emoji: (*emoji).to_string(),
                    title: (*title).to_string(),
                    room: (*room).to_string(),
                    note: String::new(),
                })
                .collect(),
        }
    }

    /// Append a new wish and return its id. The title must be
    /// non-empty after trimming; otherwise the list is left untouched
    /// and the user-facing prompt is returned as the error.
    pub fn add(&mut self, emoji: &str, title: &str, room: &str, note: &str) -> Result<u32, String> {
        let title = title.trim();
        if title.is_empty() {
            return Err(EMPTY_TITLE_PROMPT.to_string());
        }
        let id = self.items.iter().map(|wish| wish.id).max().unwrap_or(0) + 1;
        self.items.push(WishItem {
            id,
            emoji: emoji.to_string(),
            title: title.to_string(),
            room: room.to_string(),
            note: note.trim().to_string(),
        });
        Ok(id)
    }

    /// Overwrite the fields of an existing wish in place. Returns
    /// false without mutating anything when the id is unknown.
    pub fn update(&mut self, id: u32, emoji: &str, title: &str, room: &str, note: &str) -> bool {
        match self.items.iter_mut().find(|wish| wish.id == id) {
            Some(wish) => {
                wish.emoji = emoji.to_string();
                wish.title = title.trim().to_string();
                wish.room = room.to_string();
                wish.note = note.trim().to_string();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: u32) -> Option<&WishItem> {
        self.items.iter().find(|wish| wish.id == id)
    }

    /// All wishes in insertion order.
    pub fn items(&self) -> &[WishItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_assigns_next_id() {
        let mut wishes = WishList::seeded();
        let id = wishes.add("💡", "买台灯", "客厅", "").expect("valid title");
        assert_eq!(id, 7);
        assert_eq!(wishes.len(), 7);
        assert_eq!(wishes.get(7).map(|w| w.title.as_str()), Some("买台灯"));
    }

    #[test]
    fn first_id_is_one() {
        let mut wishes = WishList::new();
        assert_eq!(wishes.add("☕", "设置咖啡角", "客厅", ""), Ok(1));
    }

    #[test]
    fn blank_title_add_is_rejected() {
        let mut wishes = WishList::seeded();
        let before = wishes.clone();
        let result = wishes.add("💡", "   ", "客厅", "备注");
        assert_eq!(result, Err(EMPTY_TITLE_PROMPT.to_string()));
        assert_eq!(wishes, before);
    }

    #[test]
    fn update_overwrites_in_place() {
        let mut wishes = WishList::seeded();
        assert!(wishes.update(3, "🖼️", "新照片墙", "卧室", "挂在床头"));
        let wish = wishes.get(3).unwrap();
        assert_eq!(wish.emoji, "🖼️");
        assert_eq!(wish.title, "新照片墙");
        assert_eq!(wish.note, "挂在床头");
        // The other entries keep their fields and order.
        assert_eq!(wishes.get(2).unwrap().title, "养绿植");
        assert_eq!(wishes.items()[2].id, 3);
        assert_eq!(wishes.len(), 6);
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let mut wishes = WishList::seeded();
        let before = wishes.clone();
        assert!(!wishes.update(999, "💡", "不存在", "客厅", ""));
        assert_eq!(wishes, before);
    }

    #[test]
    fn emoji_cycle_wraps() {
        assert_eq!(next_emoji("☕"), "🌿");
        assert_eq!(next_emoji("🎵"), "☕");
        assert_eq!(next_emoji("🤖"), "☕");
    }

    #[test]
    fn unmapped_rooms_use_default_color() {
        assert_eq!(room_color("客厅"), "#E8DED5");
        assert_eq!(room_color("厨房"), "#F4E8D9");
        assert_eq!(room_color("车库"), DEFAULT_ROOM_COLOR);
    }
}
