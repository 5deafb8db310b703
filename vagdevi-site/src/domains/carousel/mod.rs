//! Hero carousel domain
//!
//! Wraps the core [`Carousel`] navigator with drag tracking and the slide
//! animation between cursor positions.

pub mod messages;
pub mod update;

use std::time::Instant;

use iced::Task;
use vagdevi_config::CarouselConfig;
use vagdevi_core::carousel::{
    Carousel, CarouselError, CarouselItem, Direction, DragGesture,
    HIDDEN_SLOT, SlotDescriptor, SlotRole,
};

use crate::common::messages::{CrossDomainEvent, DomainMessage};
use crate::domains::ui::transitions::{
    EasingFunction, Interpolate, Transition, interpolate_f32,
};
use crate::infra::constants::layout::carousel::SLIDE_DURATION;

/// Share of the pointer travel the centered item follows while dragged.
const DRAG_ELASTICITY: f32 = 0.35;

/// Slot descriptors indexed by item, one per item in the carousel.
pub type SlotLayout = Vec<SlotDescriptor>;

impl Interpolate for SlotDescriptor {
    fn interpolate(from: &Self, to: &Self, t: f32) -> Self {
        let (depth, z_index) = if t < 0.5 {
            (from.depth, from.z_index)
        } else {
            (to.depth, to.z_index)
        };
        SlotDescriptor {
            role: to.role,
            offset: interpolate_f32(from.offset, to.offset, t),
            scale: interpolate_f32(from.scale, to.scale, t),
            opacity: interpolate_f32(from.opacity, to.opacity, t),
            depth,
            z_index,
            blur: interpolate_f32(from.blur, to.blur, t),
            rotate_y: interpolate_f32(from.rotate_y, to.rotate_y, t),
        }
    }
}

/// Where every item sits for the carousel's current cursor.
fn slot_layout(carousel: &Carousel) -> SlotLayout {
    let mut layout = vec![HIDDEN_SLOT; carousel.len()];
    for placement in carousel.placements() {
        layout[placement.index] = placement.slot;
    }
    layout
}

/// How one item is drawn on the current animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFrame<'a> {
    pub index: usize,
    pub item: &'a CarouselItem,
    /// Slot the item is heading to.
    pub role: SlotRole,
    /// Horizontal offset as a fraction of the item width.
    pub offset: f32,
    /// Additional horizontal shift in logical pixels from an active drag.
    pub shift: f32,
    pub scale: f32,
    pub opacity: f32,
    pub blur: f32,
    pub rotate_y: f32,
    pub z_index: u8,
}

#[derive(Debug, Clone)]
pub struct HeroCarouselState {
    pub carousel: Carousel,
    pub gesture: DragGesture,
    pub slide: Transition<SlotLayout>,
    pub swipe_threshold: f32,
    /// Last pointer x inside the carousel area.
    pub pointer_x: f32,
}

impl Default for HeroCarouselState {
    fn default() -> Self {
        Self::new(Vec::new(), &CarouselConfig::default())
    }
}

impl HeroCarouselState {
    pub fn new(items: Vec<CarouselItem>, config: &CarouselConfig) -> Self {
        let carousel =
            Carousel::new(items).with_visibility_radius(config.visibility_radius);
        let layout = slot_layout(&carousel);
        Self {
            carousel,
            gesture: DragGesture::default(),
            slide: Transition::new(layout, SLIDE_DURATION, EasingFunction::EaseOutCubic),
            swipe_threshold: config.swipe_threshold,
            pointer_x: 0.0,
        }
    }

    pub fn navigate_at(&mut self, direction: Direction, now: Instant) {
        self.carousel.navigate(direction);
        self.animate_to_cursor(now);
    }

    pub fn jump_to_at(
        &mut self,
        index: usize,
        now: Instant,
    ) -> Result<(), CarouselError> {
        self.carousel.jump_to(index)?;
        self.animate_to_cursor(now);
        Ok(())
    }

    /// Start dragging from the last known pointer position.
    pub fn begin_drag(&mut self) {
        if !self.carousel.is_empty() {
            self.gesture.begin(self.pointer_x);
        }
    }

    pub fn pointer_moved(&mut self, x: f32) {
        self.pointer_x = x;
        self.gesture.move_to(x);
    }

    /// End an active drag and navigate if it went past the swipe threshold.
    pub fn release_at(&mut self, now: Instant) -> Option<Direction> {
        let offset = self.gesture.release()?;
        let direction = self
            .carousel
            .on_release_gesture(offset, self.swipe_threshold)?;
        self.animate_to_cursor(now);
        Some(direction)
    }

    pub fn cancel_drag(&mut self) {
        self.gesture.cancel();
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_active()
    }

    pub fn tick(&mut self, now: Instant) {
        self.slide.update_at(now);
    }

    pub fn is_animating(&self) -> bool {
        self.slide.is_transitioning()
    }

    /// Finish any running slide immediately.
    pub fn settle(&mut self) {
        self.slide.settle();
    }

    fn animate_to_cursor(&mut self, now: Instant) {
        let target = slot_layout(&self.carousel);
        if target != self.slide.to {
            self.slide.transition_to_at(target, now);
        }
    }

    /// Every item that is visible at either end of the slide, back to front.
    pub fn frames(&self) -> Vec<ItemFrame<'_>> {
        let drag = self.gesture.offset() * DRAG_ELASTICITY;
        let current = self.slide.interpolated();

        let mut frames: Vec<ItemFrame<'_>> = self
            .carousel
            .items()
            .iter()
            .enumerate()
            .zip(self.slide.from.iter().zip(&self.slide.to))
            .zip(current)
            .filter_map(|(((index, item), (start, end)), slot)| {
                if start.opacity <= 0.0 && end.opacity <= 0.0 {
                    return None;
                }

                Some(ItemFrame {
                    index,
                    item,
                    role: slot.role,
                    offset: slot.offset,
                    shift: if slot.role == SlotRole::Center { drag } else { 0.0 },
                    scale: slot.scale,
                    opacity: slot.opacity,
                    blur: slot.blur,
                    rotate_y: slot.rotate_y,
                    z_index: slot.z_index,
                })
            })
            .collect();

        frames.sort_by_key(|frame| frame.z_index);
        frames
    }
}

#[derive(Debug, Default)]
pub struct CarouselDomain {
    pub state: HeroCarouselState,
}

impl CarouselDomain {
    pub fn new(state: HeroCarouselState) -> Self {
        Self { state }
    }

    pub fn handle_event(
        &mut self,
        event: &CrossDomainEvent,
    ) -> Task<DomainMessage> {
        match event {
            CrossDomainEvent::PageChanged(_) => {
                self.state.cancel_drag();
                self.state.settle();
                Task::none()
            }
            CrossDomainEvent::LayoutChanged { .. } => Task::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn state(len: usize) -> HeroCarouselState {
        let items = (0..len)
            .map(|i| CarouselItem::new(format!("item-{i}"), format!("{i}.png"), format!("Item {i}")))
            .collect();
        HeroCarouselState::new(items, &CarouselConfig::default())
    }

    #[test]
    fn slide_interpolates_between_slots() {
        let now = Instant::now();
        let mut hero = state(5);

        hero.navigate_at(Direction::Next, now);
        assert!(hero.is_animating());

        let start = hero.frames();
        let old_center = start.iter().find(|f| f.index == 0).expect("item 0 visible");
        assert_eq!(old_center.offset, 0.0);
        assert_eq!(old_center.role, SlotRole::NearLeft);

        hero.tick(now + SLIDE_DURATION);
        assert!(!hero.is_animating());

        let end = hero.frames();
        let new_center = end.last().expect("front item");
        assert_eq!(new_center.index, 1);
        assert_eq!(new_center.offset, 0.0);
        assert!((new_center.scale - 1.1).abs() < 1e-5);
    }

    #[test]
    fn second_click_mid_slide_continues_from_the_drawn_position() {
        let now = Instant::now();
        let mut hero = state(5);

        hero.navigate_at(Direction::Next, now);
        let halfway = now + SLIDE_DURATION / 2;
        hero.tick(halfway);

        let offset_of = |hero: &HeroCarouselState, index: usize| {
            hero.frames()
                .iter()
                .find(|frame| frame.index == index)
                .map(|frame| frame.offset)
        };

        let drawn = offset_of(&hero, 0).expect("item 0 visible mid-slide");
        assert!(drawn < 0.0 && drawn > -0.6);

        hero.navigate_at(Direction::Next, halfway);
        assert_eq!(hero.carousel.cursor(), Some(2));

        let resumed = offset_of(&hero, 0).expect("item 0 still drawn");
        assert!((resumed - drawn).abs() < 1e-5);

        hero.tick(halfway + SLIDE_DURATION);
        let settled = offset_of(&hero, 0).expect("item 0 in the far slot");
        assert!((settled + 0.9).abs() < 1e-5);
    }

    #[test]
    fn drag_past_threshold_advances() {
        let now = Instant::now();
        let mut hero = state(3);

        hero.pointer_moved(300.0);
        hero.begin_drag();
        hero.pointer_moved(150.0);
        assert!(hero.is_dragging());

        let dragged = hero.frames();
        let center = dragged.last().expect("center frame");
        assert!(center.shift < 0.0);

        assert_eq!(hero.release_at(now), Some(Direction::Next));
        assert_eq!(hero.carousel.cursor(), Some(1));
        assert!(!hero.is_dragging());
    }

    #[test]
    fn short_drag_keeps_cursor() {
        let mut hero = state(3);
        hero.pointer_moved(300.0);
        hero.begin_drag();
        hero.pointer_moved(260.0);

        assert_eq!(hero.release_at(Instant::now()), None);
        assert_eq!(hero.carousel.cursor(), Some(0));
        assert!(!hero.is_animating());
    }

    #[test]
    fn out_of_range_jump_changes_nothing() {
        let mut hero = state(3);
        assert!(hero.jump_to_at(7, Instant::now()).is_err());
        assert_eq!(hero.carousel.cursor(), Some(0));
        assert!(!hero.is_animating());
    }

    #[test]
    fn empty_carousel_renders_nothing() {
        let mut hero = state(0);
        hero.navigate_at(Direction::Next, Instant::now());
        hero.begin_drag();
        assert!(!hero.is_dragging());
        assert!(hero.frames().is_empty());
        hero.tick(Instant::now() + Duration::from_secs(1));
    }
}
