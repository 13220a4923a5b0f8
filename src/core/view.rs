use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

// Fraction of the visible extent traversed by a single pan step.
const PAN_STEP_DIVISOR: f64 = 5.0;
// Scale factor applied to the pixel step by a single zoom step.
const ZOOM_SCALE_FACTOR: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/**
 * A rectangular window onto the complex plane, anchored at the top-left
 * pixel. Pixels are square: the same step spans both axes. The resolution
 * is fixed for the lifetime of the view; pan and zoom only move the origin
 * and rescale the step.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Complex coordinate of the top-left pixel: `origin[0]` is the real
    /// part, `origin[1]` the imaginary part.
    pub origin: Vector2<f64>,
    /// Distance in the complex plane between adjacent pixels.
    pub step: f64,
    /// Raster dimensions in pixels.
    pub resolution: Vector2<u32>,
}

impl Default for ViewState {
    fn default() -> ViewState {
        ViewState {
            origin: Vector2::new(-2.0, 2.0),
            step: 4.0 / 640.0,
            resolution: Vector2::new(640, 480),
        }
    }
}

impl ViewState {
    /// Width of the visible window, in complex-plane units.
    pub fn width(&self) -> f64 {
        (self.resolution[0] as f64) * self.step
    }

    /// Height of the visible window, in complex-plane units.
    pub fn height(&self) -> f64 {
        (self.resolution[1] as f64) * self.step
    }

    /// Complex coordinate at the center of the view. The imaginary axis
    /// points up while pixel rows grow down, so the center sits below the
    /// origin.
    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(
            self.origin[0] + 0.5 * self.width(),
            self.origin[1] - 0.5 * self.height(),
        )
    }

    /// Slide the window by one fifth of the visible extent.
    pub fn pan(&mut self, direction: PanDirection) {
        let horizontal = self.width() / PAN_STEP_DIVISOR;
        let vertical = self.height() / PAN_STEP_DIVISOR;
        match direction {
            PanDirection::Left => self.origin[0] -= horizontal,
            PanDirection::Right => self.origin[0] += horizontal,
            PanDirection::Up => self.origin[1] += vertical,
            PanDirection::Down => self.origin[1] -= vertical,
        }
    }

    /// Rescale the pixel step, holding the center of the view fixed by
    /// re-anchoring the origin.
    pub fn zoom(&mut self, direction: ZoomDirection) {
        let step_old = self.step;
        let step_new = match direction {
            ZoomDirection::In => step_old / ZOOM_SCALE_FACTOR,
            ZoomDirection::Out => step_old * ZOOM_SCALE_FACTOR,
        };
        self.origin[0] += 0.5 * (self.resolution[0] as f64) * (step_old - step_new);
        self.origin[1] -= 0.5 * (self.resolution[1] as f64) * (step_old - step_new);
        self.set_step(step_new);
    }

    // The step must stay strictly positive; clamp rather than trust the
    // caller (or a long zoom sequence) to preserve the invariant.
    fn set_step(&mut self, step: f64) {
        self.step = step.max(f64::MIN_POSITIVE);
    }
}
