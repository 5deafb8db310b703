//! Transition system for the carousel slide, navbar elevation and
//! scroll reveal animations.
//!
//! A [`Transition`] tracks two endpoints and eased progress. The value in
//! between comes from the endpoint type's [`Interpolate`] impl, so
//! retargeting mid-flight continues from what is on screen.

use std::time::{Duration, Instant};

/// Easing function types for transitions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    Linear,
    EaseOutCubic,
}

impl EasingFunction {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Values a [`Transition`] can blend between.
pub trait Interpolate: Clone {
    fn interpolate(from: &Self, to: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(from: &Self, to: &Self, t: f32) -> Self {
        interpolate_f32(*from, *to, t)
    }
}

/// Element-wise; a length change jumps straight to `to`.
impl<T: Interpolate> Interpolate for Vec<T> {
    fn interpolate(from: &Self, to: &Self, t: f32) -> Self {
        if from.len() != to.len() {
            return to.clone();
        }
        from.iter()
            .zip(to)
            .map(|(from, to)| T::interpolate(from, to, t))
            .collect()
    }
}

/// Generic transition state for animating between values
#[derive(Debug, Clone)]
pub struct Transition<T: Interpolate> {
    pub from: T,
    pub to: T,
    pub start_time: Option<Instant>,
    pub duration: Duration,
    pub easing: EasingFunction,
    pub progress: f32,
}

impl<T: Interpolate> Transition<T> {
    /// Create a new transition
    pub fn new(initial_value: T, duration: Duration, easing: EasingFunction) -> Self {
        Self {
            from: initial_value.clone(),
            to: initial_value,
            start_time: None,
            duration,
            easing,
            progress: 1.0, // Start fully transitioned
        }
    }

    /// Retarget from wherever the animation currently is.
    pub fn transition_to_at(&mut self, new_value: T, now: Instant) {
        self.from = self.interpolated();
        self.to = new_value;
        self.start_time = Some(now);
        self.progress = 0.0;
    }

    /// Jump straight to the target.
    pub fn settle(&mut self) {
        self.from = self.to.clone();
        self.start_time = None;
        self.progress = 1.0;
    }

    pub fn update_at(&mut self, now: Instant) {
        if let Some(start) = self.start_time {
            let elapsed = now.saturating_duration_since(start);
            let raw_progress = if self.duration.is_zero() {
                1.0
            } else {
                elapsed.as_secs_f32() / self.duration.as_secs_f32()
            };

            if raw_progress >= 1.0 {
                self.progress = 1.0;
                self.start_time = None; // Transition complete
            } else {
                self.progress = self.easing.apply(raw_progress);
            }
        }
    }

    /// Check if currently transitioning
    pub fn is_transitioning(&self) -> bool {
        self.start_time.is_some() && self.progress < 1.0
    }

    pub fn interpolated(&self) -> T {
        T::interpolate(&self.from, &self.to, self.progress)
    }
}

/// Interpolate between two colors
pub fn interpolate_color(from: iced::Color, to: iced::Color, t: f32) -> iced::Color {
    iced::Color {
        r: interpolate_f32(from.r, to.r, t),
        g: interpolate_f32(from.g, to.g, t),
        b: interpolate_f32(from.b, to.b, t),
        a: interpolate_f32(from.a, to.a, t),
    }
}

/// Interpolate between two f32 values
pub fn interpolate_f32(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
