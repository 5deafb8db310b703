pub mod subscriptions;

use iced::Size;
use iced::widget::scrollable;
use vagdevi_core::catalog::Page;

#[derive(Clone)]
pub enum Message {
    // Routing
    Navigate(Page),
    /// Open the contact page with the subject prefilled.
    Enquire(String),

    // Navbar
    ToggleMenu,

    // Scrolling and window events
    PageScrolled(scrollable::Viewport),
    WindowResized(Size),

    // Animation frame for navbar elevation and scroll reveals
    UpdateTransitions,

    // Images
    ImageLoaded(String, Result<Vec<u8>, String>),
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Navigate(page) => write!(f, "UI::Navigate({page})"),
            Self::Enquire(subject) => write!(f, "UI::Enquire({subject})"),
            Self::ToggleMenu => write!(f, "UI::ToggleMenu"),
            Self::PageScrolled(viewport) => write!(
                f,
                "UI::PageScrolled(y: {})",
                viewport.absolute_offset().y
            ),
            Self::WindowResized(size) => {
                write!(f, "UI::WindowResized({}x{})", size.width, size.height)
            }
            Self::UpdateTransitions => write!(f, "UI::UpdateTransitions"),
            Self::ImageLoaded(key, result) => write!(
                f,
                "UI::ImageLoaded({key}, {})",
                if result.is_ok() { "ok" } else { "failed" }
            ),
        }
    }
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Navigate(_) => "UI::Navigate",
            Self::Enquire(_) => "UI::Enquire",
            Self::ToggleMenu => "UI::ToggleMenu",
            Self::PageScrolled(_) => "UI::PageScrolled",
            Self::WindowResized(_) => "UI::WindowResized",
            Self::UpdateTransitions => "UI::UpdateTransitions",
            Self::ImageLoaded(_, _) => "UI::ImageLoaded",
        }
    }
}
