//! Interpolatable value types
//!
//! Linear blending for the values constraints resolve to: `f32` for
//! positions and sizes, [`Color`] for colors.

use trellis_core::Color;

/// A value that can be blended toward another value
pub trait Interpolate: Copy {
    /// Blend from `self` toward `other` by eased progress `t`
    ///
    /// `t == 0.0` returns `self` and `t == 1.0` returns `other` bit for bit.
    /// Values outside `[0, 1]` extrapolate (easing overshoot).
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        if t == 0.0 {
            return *self;
        }
        if t == 1.0 {
            return *other;
        }
        self + (other - self) * t
    }
}

impl Interpolate for Color {
    /// Per-channel blend, each channel rounded and clamped to `0..=255`
    fn lerp(&self, other: &Self, t: f32) -> Self {
        let from = self.to_array();
        let to = other.to_array();
        let mut out = [0u8; 4];
        for (channel, (a, b)) in out.iter_mut().zip(from.iter().zip(to.iter())) {
            let a = f32::from(*a);
            let b = f32::from(*b);
            *channel = (a + (b - a) * t).round().clamp(0.0, 255.0) as u8;
        }
        Color::from_array(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Easing;

    #[test]
    fn test_f32_endpoints_are_exact() {
        let from = 0.1_f32;
        let to = 0.7_f32;
        assert_eq!(from.lerp(&to, 0.0), from);
        assert_eq!(from.lerp(&to, 1.0), to);
        assert_eq!(10.0_f32.lerp(&20.0, 0.5), 15.0);
    }

    #[test]
    fn test_f32_extrapolates_on_overshoot() {
        assert_eq!(0.0_f32.lerp(&10.0, 1.5), 15.0);
    }

    #[test]
    fn test_color_rounds_each_channel() {
        let from = Color::rgba(0, 0, 0, 0);
        let to = Color::rgba(255, 1, 3, 255);
        assert_eq!(from.lerp(&to, 0.5), Color::rgba(128, 1, 2, 128));
    }

    #[test]
    fn test_color_channels_stay_in_range() {
        let pairs = [
            (Color::rgba(0, 0, 0, 0), Color::rgba(255, 255, 255, 255)),
            (Color::rgba(255, 255, 255, 255), Color::rgba(0, 0, 0, 0)),
            (Color::rgba(120, 120, 120, 0), Color::rgba(0, 170, 165, 255)),
        ];

        // Within [0, 1] a channel never leaves the span of its endpoints.
        for easing in Easing::ALL {
            for (from, to) in pairs {
                for step in 0..=100 {
                    let t = easing.apply(step as f32 / 100.0);
                    let blended = from.lerp(&to, t);
                    for (channel, (lo, hi)) in blended
                        .to_array()
                        .iter()
                        .zip(from.to_array().iter().zip(to.to_array().iter()))
                    {
                        let (lo, hi) = ((*lo).min(*hi), (*lo).max(*hi));
                        if (0.0..=1.0).contains(&t) {
                            assert!(*channel >= lo && *channel <= hi, "{easing} t={t}");
                        }
                    }
                }
            }
        }

        assert_eq!(
            Color::rgba(0, 0, 0, 0).lerp(&Color::rgba(255, 255, 255, 255), 1.4),
            Color::rgba(255, 255, 255, 255)
        );
        assert_eq!(
            Color::rgba(255, 255, 255, 255).lerp(&Color::rgba(0, 0, 0, 0), 1.4),
            Color::rgba(0, 0, 0, 0)
        );
    }
}
