//! Layout and motion constants shared by the views.

use std::time::Duration;

pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 800.0;
pub const CONTENT_MAX_WIDTH: f32 = 1200.0;

pub mod navbar {
    pub const HEIGHT: f32 = 80.0;
    pub const COMPACT_HEIGHT: f32 = 64.0;
    /// Scroll offset past which the bar switches to its compact style.
    pub const SCROLLED_THRESHOLD: f32 = 20.0;
    /// Windows narrower than this show the collapsible menu.
    pub const MOBILE_BREAKPOINT: f32 = 768.0;
}

pub mod carousel {
    use std::time::Duration;

    pub const AREA_WIDTH: f32 = 640.0;
    pub const AREA_HEIGHT: f32 = 420.0;
    pub const ITEM_WIDTH: f32 = 260.0;
    pub const ITEM_HEIGHT: f32 = 340.0;
    pub const SLIDE_DURATION: Duration = Duration::from_millis(450);
    pub const DOT_SIZE: f32 = 10.0;
    pub const ACTIVE_DOT_WIDTH: f32 = 28.0;
}

pub mod reveal {
    use std::time::Duration;

    /// Fraction of a section that must be on screen before it reveals.
    pub const AMOUNT: f32 = 0.3;
    /// Distance the content travels while fading in.
    pub const DISTANCE: f32 = 50.0;
    pub const DURATION: Duration = Duration::from_millis(500);
    pub const STAGGER: Duration = Duration::from_millis(100);
}

pub mod sections {
    pub const HERO: f32 = 640.0;
    pub const CORE_VALUES: f32 = 520.0;
    pub const BRANDS: f32 = 760.0;
    pub const FIELDS: f32 = 460.0;
    pub const VARIETIES: f32 = 1040.0;
    pub const MARKETS: f32 = 380.0;
    pub const PRODUCTS_INTRO: f32 = 260.0;
    pub const PRODUCTS_BRAND: f32 = 620.0;
    pub const PRODUCTS_VARIETIES: f32 = 1420.0;
    pub const FAQ: f32 = 720.0;
    pub const CONTACT_INTRO: f32 = 240.0;
    pub const CONTACT_BODY: f32 = 900.0;
}

pub const ANIMATION_FRAME: Duration = Duration::from_millis(16);
pub const CONTACT_TICK: Duration = Duration::from_millis(250);
