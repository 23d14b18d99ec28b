use std::fmt;

use log::{debug, warn};

use super::easing::Easing;
use super::interpolate::Interpolate;
use super::AnimError;

/// A one-shot transition from `start` to `end` over `duration` seconds.
///
/// The owner advances it once per tick with the frame delta. The tween is
/// `Active` until the accumulated time reaches `duration`, then `Complete`
/// for good: further calls to [`Tween::advance`] return `end` unchanged.
pub struct Tween<T> {
    start: T,
    end: T,
    duration: f32,
    elapsed: f32,
    easing: Easing,
    on_finished: Option<Box<dyn FnOnce()>>,
    just_finished: bool,
}

impl<T: Interpolate + Clone> Tween<T> {
    pub fn new(start: T, end: T, duration: f32, easing: Easing) -> Result<Self, AnimError> {
        if !(duration.is_finite() && duration > 0.0) {
            warn!("Rejected tween with duration {}", duration);
            return Err(AnimError::InvalidDuration(duration));
        }

        Ok(Self {
            start,
            end,
            duration,
            elapsed: 0.0,
            easing,
            on_finished: None,
            just_finished: false,
        })
    }

    /// Install a callback run once, inside the `advance` call that completes
    /// the tween.
    pub fn on_finished(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_finished = Some(Box::new(callback));
        self
    }

    /// Move the tween forward by `dt` seconds and return the new value.
    pub fn advance(&mut self, dt: f32) -> Result<T, AnimError> {
        if !(dt >= 0.0) {
            warn!("Rejected negative frame delta {}", dt);
            return Err(AnimError::InvalidDelta(dt));
        }

        self.just_finished = false;
        if self.is_complete() {
            return Ok(self.end.clone());
        }

        self.elapsed = (self.elapsed + dt).min(self.duration);

        if self.is_complete() {
            self.just_finished = true;
            debug!("Tween finished after {:.3}s", self.duration);
            if let Some(callback) = self.on_finished.take() {
                callback();
            }
            return Ok(self.end.clone());
        }

        Ok(self.value())
    }

    /// Current value without advancing.
    pub fn value(&self) -> T {
        if self.is_complete() {
            return self.end.clone();
        }
        let t = self.easing.evaluate(self.progress());
        self.start.interpolate(&self.end, t)
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// True only right after the `advance` call that completed the tween.
    pub fn just_finished(&self) -> bool {
        self.just_finished
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn start(&self) -> &T {
        &self.start
    }

    pub fn end(&self) -> &T {
        &self.end
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }
}

impl<T: fmt::Debug> fmt::Debug for Tween<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("duration", &self.duration)
            .field("elapsed", &self.elapsed)
            .field("easing", &self.easing)
            .field("has_callback", &self.on_finished.is_some())
            .finish()
    }
}
