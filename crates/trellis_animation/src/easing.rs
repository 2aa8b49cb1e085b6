//! Named easing curves
//!
//! Every curve maps linear progress in `[0, 1]` to eased progress. Input is
//! clamped to `[0, 1]` first and both endpoints are pinned, so an animation
//! resolves to exactly its start value at progress 0 and exactly its target at
//! progress 1 whatever curve it uses. In between, the `Back` and `Elastic`
//! families overshoot outside `[0, 1]`.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Easing strategy applied to animation progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InQuint,
    OutQuint,
    InOutQuint,
    InSin,
    OutSin,
    InOutSin,
    InExp,
    OutExp,
    InOutExp,
    InCirc,
    OutCirc,
    InOutCirc,
    InBack,
    OutBack,
    InOutBack,
    InElastic,
    OutElastic,
    InOutElastic,
    InBounce,
    OutBounce,
    InOutBounce,
}

const BACK_C1: f32 = 1.70158;
const BACK_C2: f32 = BACK_C1 * 1.525;
const BACK_C3: f32 = BACK_C1 + 1.0;
const ELASTIC_C4: f32 = (2.0 * PI) / 3.0;
const ELASTIC_C5: f32 = (2.0 * PI) / 4.5;

impl Easing {
    /// Every easing, in declaration order
    pub const ALL: [Easing; 31] = [
        Easing::Linear,
        Easing::InQuad,
        Easing::OutQuad,
        Easing::InOutQuad,
        Easing::InCubic,
        Easing::OutCubic,
        Easing::InOutCubic,
        Easing::InQuart,
        Easing::OutQuart,
        Easing::InOutQuart,
        Easing::InQuint,
        Easing::OutQuint,
        Easing::InOutQuint,
        Easing::InSin,
        Easing::OutSin,
        Easing::InOutSin,
        Easing::InExp,
        Easing::OutExp,
        Easing::InOutExp,
        Easing::InCirc,
        Easing::OutCirc,
        Easing::InOutCirc,
        Easing::InBack,
        Easing::OutBack,
        Easing::InOutBack,
        Easing::InElastic,
        Easing::OutElastic,
        Easing::InOutElastic,
        Easing::InBounce,
        Easing::OutBounce,
        Easing::InOutBounce,
    ];

    /// Snake-case name, matching the serde representation
    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::InQuad => "in_quad",
            Easing::OutQuad => "out_quad",
            Easing::InOutQuad => "in_out_quad",
            Easing::InCubic => "in_cubic",
            Easing::OutCubic => "out_cubic",
            Easing::InOutCubic => "in_out_cubic",
            Easing::InQuart => "in_quart",
            Easing::OutQuart => "out_quart",
            Easing::InOutQuart => "in_out_quart",
            Easing::InQuint => "in_quint",
            Easing::OutQuint => "out_quint",
            Easing::InOutQuint => "in_out_quint",
            Easing::InSin => "in_sin",
            Easing::OutSin => "out_sin",
            Easing::InOutSin => "in_out_sin",
            Easing::InExp => "in_exp",
            Easing::OutExp => "out_exp",
            Easing::InOutExp => "in_out_exp",
            Easing::InCirc => "in_circ",
            Easing::OutCirc => "out_circ",
            Easing::InOutCirc => "in_out_circ",
            Easing::InBack => "in_back",
            Easing::OutBack => "out_back",
            Easing::InOutBack => "in_out_back",
            Easing::InElastic => "in_elastic",
            Easing::OutElastic => "out_elastic",
            Easing::InOutElastic => "in_out_elastic",
            Easing::InBounce => "in_bounce",
            Easing::OutBounce => "out_bounce",
            Easing::InOutBounce => "in_out_bounce",
        }
    }

    /// Apply the curve to linear progress `t`
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match self {
            Easing::Linear => t,

            Easing::InQuad => t * t,
            Easing::OutQuad => 1.0 - (1.0 - t).powi(2),
            Easing::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }

            Easing::InCubic => t.powi(3),
            Easing::OutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::InOutCubic => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }

            Easing::InQuart => t.powi(4),
            Easing::OutQuart => 1.0 - (1.0 - t).powi(4),
            Easing::InOutQuart => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }

            Easing::InQuint => t.powi(5),
            Easing::OutQuint => 1.0 - (1.0 - t).powi(5),
            Easing::InOutQuint => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(5) / 2.0
                }
            }

            Easing::InSin => 1.0 - (t * PI / 2.0).cos(),
            Easing::OutSin => (t * PI / 2.0).sin(),
            Easing::InOutSin => -((PI * t).cos() - 1.0) / 2.0,

            Easing::InExp => 2.0_f32.powf(10.0 * t - 10.0),
            Easing::OutExp => 1.0 - 2.0_f32.powf(-10.0 * t),
            Easing::InOutExp => {
                if t < 0.5 {
                    2.0_f32.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2.0_f32.powf(-20.0 * t + 10.0)) / 2.0
                }
            }

            Easing::InCirc => 1.0 - (1.0 - t * t).sqrt(),
            Easing::OutCirc => (1.0 - (t - 1.0).powi(2)).sqrt(),
            Easing::InOutCirc => {
                if t < 0.5 {
                    (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) / 2.0
                } else {
                    ((1.0 - (-2.0 * t + 2.0).powi(2)).sqrt() + 1.0) / 2.0
                }
            }

            Easing::InBack => BACK_C3 * t.powi(3) - BACK_C1 * t * t,
            Easing::OutBack => 1.0 + BACK_C3 * (t - 1.0).powi(3) + BACK_C1 * (t - 1.0).powi(2),
            Easing::InOutBack => {
                if t < 0.5 {
                    ((2.0 * t).powi(2) * ((BACK_C2 + 1.0) * 2.0 * t - BACK_C2)) / 2.0
                } else {
                    ((2.0 * t - 2.0).powi(2) * ((BACK_C2 + 1.0) * (t * 2.0 - 2.0) + BACK_C2) + 2.0)
                        / 2.0
                }
            }

            Easing::InElastic => {
                -(2.0_f32.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * ELASTIC_C4).sin()
            }
            Easing::OutElastic => {
                2.0_f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * ELASTIC_C4).sin() + 1.0
            }
            Easing::InOutElastic => {
                if t < 0.5 {
                    -(2.0_f32.powf(20.0 * t - 10.0) * ((20.0 * t - 11.125) * ELASTIC_C5).sin())
                        / 2.0
                } else {
                    (2.0_f32.powf(-20.0 * t + 10.0) * ((20.0 * t - 11.125) * ELASTIC_C5).sin())
                        / 2.0
                        + 1.0
                }
            }

            Easing::InBounce => 1.0 - bounce_out(1.0 - t),
            Easing::OutBounce => bounce_out(t),
            Easing::InOutBounce => {
                if t < 0.5 {
                    (1.0 - bounce_out(1.0 - 2.0 * t)) / 2.0
                } else {
                    (1.0 + bounce_out(2.0 * t - 1.0)) / 2.0
                }
            }
        }
    }
}

fn bounce_out(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when an easing name is not recognized
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown easing: {0}")]
pub struct ParseEasingError(pub String);

impl FromStr for Easing {
    type Err = ParseEasingError;

    /// Parses `out_exp`, `OUT_EXP` and `out-exp` alike
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Easing::ALL
            .iter()
            .copied()
            .find(|easing| easing.name() == normalized)
            .ok_or_else(|| ParseEasingError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_pinned() {
        for easing in Easing::ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing} at 0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing} at 1");
        }
    }

    #[test]
    fn test_input_is_clamped() {
        for easing in Easing::ALL {
            assert_eq!(easing.apply(-3.0), 0.0, "{easing} below 0");
            assert_eq!(easing.apply(7.5), 1.0, "{easing} above 1");
        }
    }

    #[test]
    fn test_linear_is_identity() {
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
        assert_eq!(Easing::Linear.apply(0.5), 0.5);
    }

    #[test]
    fn test_out_exp_is_sharp() {
        let value = Easing::OutExp.apply(0.3);
        assert!(value > 0.8, "out_exp should snap quickly: {value}");
    }

    #[test]
    fn test_out_back_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::OutBack.apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_curves_are_continuous_at_midpoint() {
        // in_out_circ has a vertical tangent at 0.5, so the step must be tiny
        for easing in Easing::ALL {
            let mid = easing.apply(0.5);
            let below = easing.apply(0.5 - 1e-6);
            let above = easing.apply(0.5 + 1e-6);
            assert!((mid - below).abs() < 0.01, "{easing} jumps below 0.5");
            assert!((above - mid).abs() < 0.01, "{easing} jumps above 0.5");
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("out_exp".parse::<Easing>(), Ok(Easing::OutExp));
        assert_eq!("OUT_EXP".parse::<Easing>(), Ok(Easing::OutExp));
        assert_eq!("in-out-bounce".parse::<Easing>(), Ok(Easing::InOutBounce));
        assert!("wobble".parse::<Easing>().is_err());
        for easing in Easing::ALL {
            assert_eq!(easing.name().parse::<Easing>(), Ok(easing));
        }
    }

    #[test]
    fn test_serde_uses_snake_case_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            easing: Easing,
        }

        let parsed: Wrapper = toml::from_str("easing = \"in_out_cubic\"").unwrap();
        assert_eq!(parsed.easing, Easing::InOutCubic);
    }
}
