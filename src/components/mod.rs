//! UI Components
//!
//! Reusable Leptos components for the showcase widgets.

pub mod countdown_ring;
pub mod reveal_panel;
pub mod timeline_slider;
pub mod wish_card;
pub mod wish_modal;

pub use countdown_ring::CountdownRing;
pub use reveal_panel::RevealPanel;
pub use timeline_slider::TimelineSlider;
pub use wish_card::WishGrid;
pub use wish_modal::WishPlanModal;
