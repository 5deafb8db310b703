//! Scroll-triggered reveal of page sections.
//!
//! iced does not report where a widget ends up on screen, so each page
//! declares its sections with fixed heights and the tracker compares those
//! bounds with the scroll viewport. A section reveals once at least
//! [`AMOUNT`] of it is visible and stays revealed until the page changes.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use vagdevi_core::catalog::Page;

use crate::domains::ui::transitions::EasingFunction;
use crate::infra::constants::layout::reveal::{AMOUNT, DISTANCE, DURATION, STAGGER};
use crate::infra::constants::layout::sections;

/// Direction content travels from while it fades in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
    None,
}

impl RevealDirection {
    /// Starting offset `(x, y)` before the reveal begins.
    pub fn initial_offset(self, distance: f32) -> (f32, f32) {
        match self {
            RevealDirection::Up => (0.0, distance),
            RevealDirection::Down => (0.0, -distance),
            RevealDirection::Left => (distance, 0.0),
            RevealDirection::Right => (-distance, 0.0),
            RevealDirection::None => (0.0, 0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSpec {
    pub direction: RevealDirection,
    pub delay: Duration,
    pub duration: Duration,
}

impl Default for RevealSpec {
    fn default() -> Self {
        Self {
            direction: RevealDirection::Up,
            delay: Duration::ZERO,
            duration: DURATION,
        }
    }
}

impl RevealSpec {
    pub const fn new(direction: RevealDirection, delay: Duration) -> Self {
        Self {
            direction,
            delay,
            duration: DURATION,
        }
    }

    fn settles_after(&self) -> Duration {
        self.delay + self.duration
    }

    /// Opacity and offset `elapsed` after the section was revealed.
    pub fn frame(&self, elapsed: Option<Duration>) -> RevealFrame {
        let (x, y) = self.direction.initial_offset(DISTANCE);

        let progress = match elapsed {
            None => 0.0,
            Some(elapsed) if elapsed <= self.delay => 0.0,
            Some(_) if self.duration.is_zero() => 1.0,
            Some(elapsed) => EasingFunction::EaseOutCubic.apply(
                (elapsed - self.delay).as_secs_f32()
                    / self.duration.as_secs_f32(),
            ),
        };

        RevealFrame {
            opacity: progress,
            offset_x: x * (1.0 - progress),
            offset_y: y * (1.0 - progress),
        }
    }
}

/// What a reveal wrapper draws this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    pub opacity: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl RevealFrame {
    pub const VISIBLE: RevealFrame = RevealFrame {
        opacity: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    CoreValues,
    Brands,
    Fields,
    Varieties,
    Markets,
    ProductsIntro,
    ProductsBrands,
    ProductsVarieties,
    Faq,
    ContactIntro,
    ContactForm,
    ContactInfo,
}

impl SectionId {
    pub fn reveal(self) -> RevealSpec {
        let (direction, delay) = match self {
            SectionId::Hero
            | SectionId::Brands
            | SectionId::ProductsIntro
            | SectionId::ContactIntro
            | SectionId::Faq => (RevealDirection::Up, Duration::ZERO),
            SectionId::CoreValues
            | SectionId::Varieties
            | SectionId::ProductsVarieties => (RevealDirection::Up, STAGGER),
            SectionId::Fields => (RevealDirection::None, Duration::ZERO),
            SectionId::Markets => (RevealDirection::Down, Duration::ZERO),
            SectionId::ProductsBrands => (RevealDirection::Right, Duration::ZERO),
            SectionId::ContactForm => (RevealDirection::Up, 3 * STAGGER),
            SectionId::ContactInfo => (RevealDirection::Left, 5 * STAGGER),
        };
        RevealSpec::new(direction, delay)
    }
}

/// Where a section sits inside the scrolled page content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub id: SectionId,
    pub top: f32,
    pub height: f32,
}

/// Sections of `page` top to bottom. Sections sharing a row share bounds.
pub fn page_sections(page: Page) -> Vec<SectionBounds> {
    let rows: &[(&[SectionId], f32)] = match page {
        Page::Home => &[
            (&[SectionId::Hero], sections::HERO),
            (&[SectionId::CoreValues], sections::CORE_VALUES),
            (&[SectionId::Brands], sections::BRANDS),
            (&[SectionId::Fields], sections::FIELDS),
            (&[SectionId::Varieties], sections::VARIETIES),
            (&[SectionId::Markets], sections::MARKETS),
        ],
        Page::Products => &[
            (&[SectionId::ProductsIntro], sections::PRODUCTS_INTRO),
            (&[SectionId::ProductsBrands], 2.0 * sections::PRODUCTS_BRAND),
            (&[SectionId::ProductsVarieties], sections::PRODUCTS_VARIETIES),
            (&[SectionId::Faq], sections::FAQ),
        ],
        Page::Contact => &[
            (&[SectionId::ContactIntro], sections::CONTACT_INTRO),
            (
                &[SectionId::ContactForm, SectionId::ContactInfo],
                sections::CONTACT_BODY,
            ),
        ],
    };

    let mut top = 0.0;
    let mut bounds = Vec::new();
    for (ids, height) in rows {
        bounds.extend(ids.iter().map(|&id| SectionBounds {
            id,
            top,
            height: *height,
        }));
        top += height;
    }
    bounds
}

/// Fraction of `[top, top + height)` inside the viewport, in `[0, 1]`.
pub fn visible_fraction(
    top: f32,
    height: f32,
    viewport_top: f32,
    viewport_height: f32,
) -> f32 {
    if height <= 0.0 {
        return 0.0;
    }

    let start = top.max(viewport_top);
    let end = (top + height).min(viewport_top + viewport_height);
    ((end - start).max(0.0) / height).clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
pub struct RevealTracker {
    page: Page,
    sections: Vec<SectionBounds>,
    revealed: HashMap<SectionId, Instant>,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(Page::default())
    }
}

impl RevealTracker {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            sections: page_sections(page),
            revealed: HashMap::new(),
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Forget every reveal and track the sections of `page`.
    pub fn reset(&mut self, page: Page) {
        *self = Self::new(page);
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.revealed.contains_key(&id)
    }

    /// Reveal every section that is now sufficiently visible.
    ///
    /// Returns the sections revealed by this call.
    pub fn observe(
        &mut self,
        viewport_top: f32,
        viewport_height: f32,
        now: Instant,
    ) -> Vec<SectionId> {
        let mut newly = Vec::new();
        for bounds in &self.sections {
            if self.revealed.contains_key(&bounds.id) {
                continue;
            }

            let fraction = visible_fraction(
                bounds.top,
                bounds.height,
                viewport_top,
                viewport_height,
            );
            if fraction >= AMOUNT {
                self.revealed.insert(bounds.id, now);
                newly.push(bounds.id);
            }
        }

        if !newly.is_empty() {
            log::debug!("Revealed sections {:?} on {}", newly, self.page);
        }
        newly
    }

    pub fn frame(&self, id: SectionId, now: Instant) -> RevealFrame {
        if !self.sections.iter().any(|bounds| bounds.id == id) {
            return RevealFrame::VISIBLE;
        }

        let elapsed = self
            .revealed
            .get(&id)
            .map(|at| now.saturating_duration_since(*at));
        id.reveal().frame(elapsed)
    }

    /// Whether any revealed section is still mid-animation at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.revealed.iter().any(|(id, at)| {
            now.saturating_duration_since(*at) < id.reveal().settles_after()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_fraction_clamps_to_overlap() {
        assert_eq!(visible_fraction(0.0, 100.0, 0.0, 800.0), 1.0);
        assert_eq!(visible_fraction(900.0, 100.0, 0.0, 800.0), 0.0);
        assert!((visible_fraction(770.0, 100.0, 0.0, 800.0) - 0.3).abs() < 1e-4);
        assert!((visible_fraction(-50.0, 200.0, 0.0, 800.0) - 0.75).abs() < 1e-4);
        assert_eq!(visible_fraction(0.0, 0.0, 0.0, 800.0), 0.0);
    }

    #[test]
    fn sections_reveal_once_and_never_hide() {
        let now = Instant::now();
        let mut tracker = RevealTracker::new(Page::Home);

        let first = tracker.observe(0.0, 800.0, now);
        assert!(first.contains(&SectionId::Hero));
        assert!(!tracker.is_revealed(SectionId::Markets));

        let later = now + Duration::from_secs(1);
        let newly = tracker.observe(100_000.0, 800.0, later);
        assert!(newly.is_empty());
        assert!(tracker.is_revealed(SectionId::Hero));

        let again = tracker.observe(0.0, 800.0, later);
        assert!(again.is_empty());
    }

    #[test]
    fn below_threshold_stays_hidden() {
        let now = Instant::now();
        let mut tracker = RevealTracker::new(Page::Contact);
        let body_top = sections::CONTACT_INTRO;

        // Only 20% of the body row is inside the viewport.
        let viewport_height = body_top + 0.2 * sections::CONTACT_BODY;
        tracker.observe(0.0, viewport_height, now);
        assert!(!tracker.is_revealed(SectionId::ContactForm));

        tracker.observe(0.2 * sections::CONTACT_BODY, viewport_height, now);
        assert!(tracker.is_revealed(SectionId::ContactForm));
        assert!(tracker.is_revealed(SectionId::ContactInfo));
    }

    #[test]
    fn frame_eases_after_delay() {
        let spec = RevealSpec::new(RevealDirection::Left, Duration::from_millis(200));

        let hidden = spec.frame(None);
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.offset_x, DISTANCE);

        let waiting = spec.frame(Some(Duration::from_millis(150)));
        assert_eq!(waiting.opacity, 0.0);

        let halfway = spec.frame(Some(Duration::from_millis(450)));
        assert!(halfway.opacity > 0.5 && halfway.opacity < 1.0);
        assert!(halfway.offset_x > 0.0 && halfway.offset_x < DISTANCE);

        let done = spec.frame(Some(Duration::from_secs(5)));
        assert_eq!(done, RevealFrame::VISIBLE);
    }

    #[test]
    fn animation_settles_after_delay_and_duration() {
        let now = Instant::now();
        let mut tracker = RevealTracker::new(Page::Contact);
        tracker.observe(0.0, 2000.0, now);

        assert!(tracker.is_animating(now + Duration::from_millis(100)));
        assert!(!tracker.is_animating(now + Duration::from_secs(2)));
    }

    #[test]
    fn sections_of_other_pages_render_visible() {
        let tracker = RevealTracker::new(Page::Products);
        assert_eq!(
            tracker.frame(SectionId::Hero, Instant::now()),
            RevealFrame::VISIBLE
        );
    }
}
