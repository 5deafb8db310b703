//! Hero carousel navigation.
//!
//! A [`Carousel`] owns a cursor over an immutable ring of items. Every item is
//! placed relative to the cursor by its signed circular distance, and that
//! distance selects a visual slot from the table in [`slot`].

pub mod gesture;
pub mod slot;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use gesture::{DEFAULT_SWIPE_THRESHOLD, DragGesture, release_direction};
pub use slot::{
    Depth, HIDDEN_SLOT, MAX_VISIBILITY_RADIUS, SlotDescriptor, SlotRole, slot_for, slot_within,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("Carousel index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

/// One image shown by the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselItem {
    pub id: String,
    pub source: String,
    pub label: String,
}

impl CarouselItem {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            label: label.into(),
        }
    }
}

/// Navigation step requested by an arrow or a release gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn step(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Previous => Direction::Next,
            Direction::Next => Direction::Previous,
        }
    }
}

/// Signed shortest-path distance from `cursor` to `index` on a ring of `len`.
///
/// Both indices must be below `len` and `len` must be non-zero. The result
/// lies in roughly `[-len/2, len/2]`; for even rings the antipodal item keeps
/// the raw sign of `index - cursor`.
pub fn circular_distance(index: usize, cursor: usize, len: usize) -> isize {
    debug_assert!(len > 0, "circular distance on an empty ring");
    debug_assert!(index < len && cursor < len);

    let len = len as isize;
    let mut diff = index as isize - cursor as isize;
    // Compare against len / 2 without truncating odd lengths.
    if 2 * diff > len {
        diff -= len;
    }
    if 2 * diff < -len {
        diff += len;
    }
    diff
}

/// An item together with where it currently sits relative to the cursor.
#[derive(Debug, Clone, Copy)]
pub struct Placement<'a> {
    pub index: usize,
    pub item: &'a CarouselItem,
    pub distance: isize,
    pub slot: SlotDescriptor,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    items: Vec<CarouselItem>,
    cursor: usize,
    visibility_radius: usize,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Carousel {
    /// Create a carousel centered on the first item.
    pub fn new(items: Vec<CarouselItem>) -> Self {
        Self {
            items,
            cursor: 0,
            visibility_radius: MAX_VISIBILITY_RADIUS,
        }
    }

    /// Limit rendering to items within `radius` of the cursor.
    ///
    /// The radius is clamped to the reach of the slot table.
    pub fn with_visibility_radius(mut self, radius: usize) -> Self {
        self.visibility_radius = radius.min(MAX_VISIBILITY_RADIUS);
        self
    }

    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn visibility_radius(&self) -> usize {
        self.visibility_radius
    }

    /// Index of the centered item, absent for an empty carousel.
    pub fn cursor(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.cursor)
    }

    pub fn current(&self) -> Option<&CarouselItem> {
        self.items.get(self.cursor)
    }

    pub fn distance_of(&self, index: usize) -> Option<isize> {
        if index >= self.len() {
            return None;
        }
        Some(circular_distance(index, self.cursor, self.len()))
    }

    pub fn slot_of(&self, index: usize) -> Option<SlotDescriptor> {
        self.distance_of(index)
            .map(|distance| slot_within(distance, self.visibility_radius))
    }

    /// Visible items ordered back to front, ready to be layered.
    pub fn placements(&self) -> Vec<Placement<'_>> {
        if self.is_empty() {
            return Vec::new();
        }

        let mut placements: Vec<Placement<'_>> = self
            .items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let distance = circular_distance(index, self.cursor, self.len());
                let slot = slot_within(distance, self.visibility_radius);
                slot.is_visible().then_some(Placement {
                    index,
                    item,
                    distance,
                    slot,
                })
            })
            .collect();

        placements.sort_by_key(|placement| placement.slot.z_index);
        placements
    }

    /// Move the cursor one step, wrapping around both ends.
    pub fn navigate(&mut self, direction: Direction) {
        if self.is_empty() {
            return;
        }

        let len = self.len() as isize;
        let next = (self.cursor as isize + direction.step()).rem_euclid(len);
        self.cursor = next as usize;

        tracing::trace!(cursor = self.cursor, ?direction, "carousel navigated");
    }

    /// Center the item at `index`.
    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len() {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }

        self.cursor = index;
        tracing::trace!(cursor = self.cursor, "carousel jumped");
        Ok(())
    }

    /// Apply a drag release of `offset` pixels against `threshold`.
    ///
    /// Dragging left past the threshold advances, dragging right goes back.
    /// Returns the direction taken, if any.
    pub fn on_release_gesture(&mut self, offset: f32, threshold: f32) -> Option<Direction> {
        if self.is_empty() {
            return None;
        }

        let direction = release_direction(offset, threshold)?;
        self.navigate(direction);
        Some(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(len: usize) -> Carousel {
        Carousel::new(
            (0..len)
                .map(|i| CarouselItem::new(format!("item-{i}"), format!("{i}.png"), format!("Item {i}")))
                .collect(),
        )
    }

    #[test]
    fn navigate_wraps_in_both_directions() {
        let mut c = carousel(5);
        c.navigate(Direction::Previous);
        assert_eq!(c.cursor(), Some(4));
        c.navigate(Direction::Next);
        assert_eq!(c.cursor(), Some(0));
    }

    #[test]
    fn navigate_then_reverse_restores_cursor() {
        for len in 1..12 {
            for start in 0..len {
                let mut c = carousel(len);
                c.jump_to(start).unwrap();
                for direction in [Direction::Next, Direction::Previous] {
                    c.navigate(direction);
                    c.navigate(direction.reversed());
                    assert_eq!(c.cursor(), Some(start), "len={len} start={start}");
                }
            }
        }
    }

    #[test]
    fn exactly_one_item_is_centered() {
        for len in 1..16 {
            for cursor in 0..len {
                let zeros = (0..len)
                    .filter(|&i| circular_distance(i, cursor, len) == 0)
                    .count();
                assert_eq!(zeros, 1, "len={len} cursor={cursor}");
            }
        }
    }

    #[test]
    fn distance_takes_the_short_way_round() {
        assert_eq!(circular_distance(4, 0, 5), -1);
        assert_eq!(circular_distance(0, 4, 5), 1);
        assert_eq!(circular_distance(3, 0, 5), -2);
        assert_eq!(circular_distance(2, 0, 5), 2);
        assert_eq!(circular_distance(1, 0, 2), 1);
    }

    #[test]
    fn distance_is_antisymmetric() {
        for len in 1..15 {
            for a in 0..len {
                for b in 0..len {
                    assert_eq!(
                        circular_distance(a, b, len),
                        -circular_distance(b, a, len)
                    );
                }
            }
        }
    }

    #[test]
    fn jump_out_of_range_is_rejected() {
        let mut c = carousel(3);
        c.jump_to(1).unwrap();
        assert_eq!(
            c.jump_to(3),
            Err(CarouselError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(c.cursor(), Some(1));
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut c = carousel(0);
        c.navigate(Direction::Next);
        assert_eq!(c.cursor(), None);
        assert!(c.placements().is_empty());
        assert_eq!(c.on_release_gesture(-500.0, 100.0), None);
        assert!(c.jump_to(0).is_err());
    }

    #[test]
    fn release_gesture_follows_threshold() {
        let mut c = carousel(5);
        assert_eq!(c.on_release_gesture(-150.0, 100.0), Some(Direction::Next));
        assert_eq!(c.cursor(), Some(1));
        assert_eq!(c.on_release_gesture(40.0, 100.0), None);
        assert_eq!(c.cursor(), Some(1));
        assert_eq!(c.on_release_gesture(101.0, 100.0), Some(Direction::Previous));
        assert_eq!(c.cursor(), Some(0));
    }

    #[test]
    fn placements_are_layered_back_to_front() {
        let c = carousel(7);
        let placements = c.placements();
        assert_eq!(placements.len(), 5);
        assert_eq!(placements.last().map(|p| p.index), Some(0));
        assert!(
            placements
                .windows(2)
                .all(|pair| pair[0].slot.z_index <= pair[1].slot.z_index)
        );
    }

    #[test]
    fn visibility_radius_hides_far_slots() {
        let c = carousel(7).with_visibility_radius(1);
        let visible: Vec<isize> = c.placements().iter().map(|p| p.distance).collect();
        assert_eq!(visible.len(), 3);
        assert!(visible.iter().all(|d| d.abs() <= 1));
        assert_eq!(c.slot_of(2).map(|s| s.role), Some(SlotRole::Hidden));
    }

    #[test]
    fn visibility_radius_is_clamped_to_table() {
        let c = carousel(9).with_visibility_radius(10);
        assert_eq!(c.visibility_radius(), MAX_VISIBILITY_RADIUS);
        assert_eq!(c.placements().len(), 5);
    }
}
