//! Interpolation for derived values
//!
//! Maps an animated scalar onto a derived output range. The mapping is a
//! pure function evaluated at read time, so derived values (backdrop
//! opacity, tinting) never require their own animation state.

use sheetkit_core::Color;

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Color {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Color::lerp(self, other, t)
    }
}

/// A clamped linear mapping from an input scalar range to an output range
///
/// Inputs outside the range produce the nearest endpoint; the mapping never
/// extrapolates. The output range may be reversed (start greater than end),
/// which yields a monotonically decreasing mapping.
///
/// # Example
///
/// ```
/// use sheetkit_animation::Interpolation;
///
/// // Backdrop fade: fully dim at offset 0, fully clear at offset 260
/// let fade = Interpolation::clamped((0.0, 260.0), (1.0_f32, 0.0));
/// assert_eq!(fade.sample(0.0), 1.0);
/// assert_eq!(fade.sample(260.0), 0.0);
/// assert_eq!(fade.sample(-50.0), 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct Interpolation<T: Interpolate> {
    input_start: f32,
    input_end: f32,
    output_start: T,
    output_end: T,
}

impl<T: Interpolate> Interpolation<T> {
    /// Create a clamped mapping from `input` to `output`
    pub fn clamped(input: (f32, f32), output: (T, T)) -> Self {
        Self {
            input_start: input.0,
            input_end: input.1,
            output_start: output.0,
            output_end: output.1,
        }
    }

    /// Evaluate the mapping at `x`
    pub fn sample(&self, x: f32) -> T {
        let span = self.input_end - self.input_start;
        if span.abs() < f32::EPSILON {
            return self.output_start.clone();
        }
        let t = ((x - self.input_start) / span).clamp(0.0, 1.0);
        self.output_start.lerp(&self.output_end, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_interpolation() {
        assert!((0.0_f32.lerp(&1.0, 0.5) - 0.5).abs() < 1e-6);
        assert!((10.0_f32.lerp(&20.0, 0.25) - 12.5).abs() < 1e-6);
    }

    #[test]
    fn test_backdrop_fade_is_monotone_and_clamped() {
        let fade = Interpolation::clamped((0.0, 300.0), (1.0_f32, 0.0));

        // Clamped outside the range
        assert_eq!(fade.sample(-100.0), 1.0);
        assert_eq!(fade.sample(400.0), 0.0);

        // Monotonically non-increasing across the range
        let mut prev = fade.sample(0.0);
        for i in 1..=30 {
            let x = i as f32 * 10.0;
            let v = fade.sample(x);
            assert!(v <= prev + 1e-6);
            assert!((0.0..=1.0).contains(&v));
            prev = v;
        }
    }

    #[test]
    fn test_degenerate_input_range() {
        let flat = Interpolation::clamped((100.0, 100.0), (0.3_f32, 0.9));
        assert_eq!(flat.sample(0.0), 0.3);
        assert_eq!(flat.sample(100.0), 0.3);
    }

    #[test]
    fn test_color_interpolation() {
        let tint = Interpolation::clamped((0.0, 1.0), (Color::BLACK, Color::WHITE));
        let mid = tint.sample(0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
    }
}
