//! Drag-release handling for the centered carousel item.

use super::Direction;

/// Horizontal drag distance, in logical pixels, that counts as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 100.0;

/// Map a release offset to a navigation step.
///
/// A drag to the left (negative offset) beyond `threshold` shows the next
/// item; a drag to the right shows the previous one. Offsets exactly at the
/// threshold do nothing.
pub fn release_direction(offset: f32, threshold: f32) -> Option<Direction> {
    if offset < -threshold {
        Some(Direction::Next)
    } else if offset > threshold {
        Some(Direction::Previous)
    } else {
        None
    }
}

/// Tracks one press-move-release sequence along the x axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragGesture {
    origin: Option<f32>,
    latest: f32,
}

impl DragGesture {
    pub fn begin(&mut self, x: f32) {
        self.origin = Some(x);
        self.latest = x;
    }

    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// Record the pointer position. Ignored unless a drag is in progress.
    pub fn move_to(&mut self, x: f32) {
        if self.origin.is_some() {
            self.latest = x;
        }
    }

    /// Current displacement from the press position.
    pub fn offset(&self) -> f32 {
        self.origin.map_or(0.0, |origin| self.latest - origin)
    }

    /// Finish the drag, yielding the total offset if one was in progress.
    pub fn release(&mut self) -> Option<f32> {
        let offset = self.origin.map(|origin| self.latest - origin);
        *self = Self::default();
        offset
    }

    pub fn cancel(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(release_direction(-100.0, 100.0), None);
        assert_eq!(release_direction(100.0, 100.0), None);
        assert_eq!(release_direction(-150.0, 100.0), Some(Direction::Next));
        assert_eq!(release_direction(150.0, 100.0), Some(Direction::Previous));
        assert_eq!(release_direction(40.0, 100.0), None);
    }

    #[test]
    fn drag_reports_offset_from_press() {
        let mut drag = DragGesture::default();
        drag.move_to(30.0);
        assert!(!drag.is_active());
        assert_eq!(drag.offset(), 0.0);

        drag.begin(300.0);
        drag.move_to(260.0);
        drag.move_to(140.0);
        assert_eq!(drag.offset(), -160.0);
        assert_eq!(drag.release(), Some(-160.0));
        assert!(!drag.is_active());
        assert_eq!(drag.release(), None);
    }

    #[test]
    fn cancelled_drag_yields_nothing() {
        let mut drag = DragGesture::default();
        drag.begin(10.0);
        drag.move_to(400.0);
        drag.cancel();
        assert_eq!(drag.release(), None);
    }
}
