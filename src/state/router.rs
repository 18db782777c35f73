//! Page Router
//!
//! Single-active-page navigation state machine. Exactly one page is
//! active at any time, transitions happen only through the navigation
//! entry points on `GlobalState`, and an unknown page identifier
//! leaves the currently active page untouched.

/// Rooms with a dedicated detail page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Room {
    LivingRoom,
    Bedroom,
    Balcony,
    Study,
    Spare,
}

impl Room {
    pub const ALL: [Room; 5] = [
        Room::LivingRoom,
        Room::Bedroom,
        Room::Balcony,
        Room::Study,
        Room::Spare,
    ];

    /// Stable identifier used in element attributes and asset names.
    pub fn slug(self) -> &'static str {
        match self {
            Room::LivingRoom => "living-room",
            Room::Bedroom => "bedroom",
            Room::Balcony => "balcony",
            Room::Study => "study",
            Room::Spare => "room",
        }
    }

    /// Display name shown on room cards and detail page titles.
    pub fn display_name(self) -> &'static str {
        match self {
            Room::LivingRoom => "客厅",
            Room::Bedroom => "卧室",
            Room::Balcony => "阳台",
            Room::Study => "书房",
            Room::Spare => "房间",
        }
    }

    pub fn display_name_en(self) -> &'static str {
        match self {
            Room::LivingRoom => "Living Room",
            Room::Bedroom => "Bedroom",
            Room::Balcony => "Balcony",
            Room::Study => "Study",
            Room::Spare => "Room",
        }
    }

    /// Emoji shown on the room card.
    pub fn emoji(self) -> &'static str {
        match self {
            Room::LivingRoom => "🛋️",
            Room::Bedroom => "🛏️",
            Room::Balcony => "🌿",
            Room::Study => "📚",
            Room::Spare => "🚪",
        }
    }
}

/// Top-level pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Rooms,
    Todo,
    Detail(Room),
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::Rooms,
        Page::Todo,
        Page::Detail(Room::LivingRoom),
        Page::Detail(Room::Bedroom),
        Page::Detail(Room::Balcony),
        Page::Detail(Room::Study),
        Page::Detail(Room::Spare),
    ];

    /// Page identifier as carried by the `data-page` attribute.
    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Rooms => "rooms",
            Page::Todo => "todo",
            Page::Detail(Room::LivingRoom) => "detail-living-room",
            Page::Detail(Room::Bedroom) => "detail-bedroom",
            Page::Detail(Room::Balcony) => "detail-balcony",
            Page::Detail(Room::Study) => "detail-study",
            Page::Detail(Room::Spare) => "detail-room",
        }
    }

    /// Look a page up by identifier. Unknown identifiers yield `None`,
    /// which navigation treats as a silent no-op.
    pub fn from_slug(slug: &str) -> Option<Page> {
        Page::ALL.iter().copied().find(|page| page.slug() == slug)
    }
}

/// Side effects keyed off a navigation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEffects {
    /// Ambient home-background experience on or off.
    pub ambient_home: bool,
    /// Whether the custom pointer overlay ends up hidden.
    pub hide_cursor: bool,
    /// Restart the countdown-ring fill animation.
    pub restart_ring: bool,
    /// Refresh the wish-card grid.
    pub refresh_grid: bool,
}

/// Compute the side effects of navigating to `target`.
pub fn nav_effects(target: Page) -> NavEffects {
    NavEffects {
        ambient_home: target == Page::Home,
        // Hidden for home and away alike, matching the original app.
        hide_cursor: true,
        restart_ring: target == Page::Rooms,
        refresh_grid: target == Page::Todo,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_slug(page.slug()), Some(page));
        }
    }

    #[test]
    fn unknown_slug_is_rejected() {
        assert_eq!(Page::from_slug("detail-garage"), None);
        assert_eq!(Page::from_slug("Home"), None);
        assert_eq!(Page::from_slug(""), None);
    }

    #[test]
    fn cursor_hides_for_home_and_away() {
        assert!(nav_effects(Page::Home).hide_cursor);
        assert!(nav_effects(Page::Rooms).hide_cursor);
        assert!(nav_effects(Page::Todo).hide_cursor);
        assert!(nav_effects(Page::Detail(Room::Bedroom)).hide_cursor);
    }

    #[test]
    fn ambient_follows_home_only() {
        assert!(nav_effects(Page::Home).ambient_home);
        assert!(!nav_effects(Page::Rooms).ambient_home);
        assert!(!nav_effects(Page::Detail(Room::Balcony)).ambient_home);
    }

    #[test]
    fn refreshes_are_per_target() {
        assert!(nav_effects(Page::Rooms).restart_ring);
        assert!(!nav_effects(Page::Rooms).refresh_grid);
        assert!(nav_effects(Page::Todo).refresh_grid);
        assert!(!nav_effects(Page::Todo).restart_ring);
        assert!(!nav_effects(Page::Home).restart_ring);
        assert!(!nav_effects(Page::Home).refresh_grid);
    }
}
