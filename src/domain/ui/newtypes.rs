// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! Value objects for the lightbox that are always within their valid range.

// =============================================================================
// Zoom Bounds
// =============================================================================

/// Lightbox zoom bounds (0.5x to 3.0x).
pub mod zoom_bounds {
    /// Minimum zoom factor.
    pub const MIN: f32 = 0.5;
    /// Maximum zoom factor.
    pub const MAX: f32 = 3.0;
    /// Zoom factor of a freshly shown image.
    pub const DEFAULT: f32 = 1.0;
    /// Minimum zoom step.
    pub const MIN_STEP: f32 = 0.1;
    /// Maximum zoom step.
    pub const MAX_STEP: f32 = 1.0;
    /// Default zoom step.
    pub const DEFAULT_STEP: f32 = 0.5;
}

// =============================================================================
// ZoomLevel
// =============================================================================

/// Zoom factor of the lightbox image, guaranteed within 0.5x–3.0x.
///
/// Scales the rendered image only; the loaded pixels are untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLevel(f32);

impl ZoomLevel {
    /// Creates a zoom level, clamping to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        Self(factor.clamp(zoom_bounds::MIN, zoom_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= zoom_bounds::MIN
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= zoom_bounds::MAX
    }

    /// Increases zoom by `step`, saturating at the maximum.
    #[must_use]
    pub fn zoom_in(self, step: ZoomStep) -> Self {
        Self::new(self.0 + step.value())
    }

    /// Decreases zoom by `step`, saturating at the minimum.
    #[must_use]
    pub fn zoom_out(self, step: ZoomStep) -> Self {
        Self::new(self.0 - step.value())
    }

    /// Rounded percentage for display (1.5 → 150).
    #[must_use]
    pub fn as_percent(self) -> u32 {
        (self.0 * 100.0).round() as u32
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(zoom_bounds::DEFAULT)
    }
}

// =============================================================================
// ZoomStep
// =============================================================================

/// Zoom increment, guaranteed within 0.1–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStep(f32);

impl ZoomStep {
    #[must_use]
    pub fn new(step: f32) -> Self {
        Self(step.clamp(zoom_bounds::MIN_STEP, zoom_bounds::MAX_STEP))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ZoomStep {
    fn default() -> Self {
        Self(zoom_bounds::DEFAULT_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_level_clamps() {
        assert_eq!(ZoomLevel::new(0.1).value(), zoom_bounds::MIN);
        assert_eq!(ZoomLevel::new(10.0).value(), zoom_bounds::MAX);
        assert_eq!(ZoomLevel::new(2.0).value(), 2.0);
    }

    #[test]
    fn zoom_level_default_is_one() {
        assert_eq!(ZoomLevel::default().value(), 1.0);
        assert_eq!(ZoomLevel::default().as_percent(), 100);
    }

    #[test]
    fn zoom_in_out_steps_by_half() {
        let step = ZoomStep::default();
        let zoom = ZoomLevel::default().zoom_in(step);
        assert_eq!(zoom.value(), 1.5);
        assert_eq!(zoom.zoom_out(step).zoom_out(step).value(), 0.5);
    }

    #[test]
    fn zoom_never_leaves_bounds() {
        let step = ZoomStep::default();
        let mut zoom = ZoomLevel::default();
        for _ in 0..10 {
            zoom = zoom.zoom_in(step);
            assert!(zoom.value() <= zoom_bounds::MAX);
        }
        assert!(zoom.is_max());
        for _ in 0..10 {
            zoom = zoom.zoom_out(step);
            assert!(zoom.value() >= zoom_bounds::MIN);
        }
        assert!(zoom.is_min());
    }

    #[test]
    fn zoom_step_clamps() {
        assert_eq!(ZoomStep::new(0.0).value(), zoom_bounds::MIN_STEP);
        assert_eq!(ZoomStep::new(5.0).value(), zoom_bounds::MAX_STEP);
    }
}
