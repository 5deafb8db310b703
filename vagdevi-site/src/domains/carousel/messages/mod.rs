pub mod subscriptions;

use vagdevi_core::carousel::Direction;

#[derive(Debug, Clone)]
pub enum Message {
    /// Arrow button or keyboard arrow
    Navigate(Direction),
    /// Side slot or dot indicator
    JumpTo(usize),

    // Drag on the centered item
    DragStarted,
    PointerMoved(f32),
    PointerReleased,

    UpdateAnimation,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Navigate(_) => "Carousel::Navigate",
            Self::JumpTo(_) => "Carousel::JumpTo",
            Self::DragStarted => "Carousel::DragStarted",
            Self::PointerMoved(_) => "Carousel::PointerMoved",
            Self::PointerReleased => "Carousel::PointerReleased",
            Self::UpdateAnimation => "Carousel::UpdateAnimation",
        }
    }
}
