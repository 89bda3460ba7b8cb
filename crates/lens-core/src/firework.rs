//! Firework shell data and the burst geometry models.
//!
//! A [`FireworkProfile`] says how high a shell bursts and how wide it opens.
//! A [`BurstModel`] turns that into the vertical band the camera has to
//! frame. Frontends pick the model; the calculator only sees the resulting
//! [`VerticalExtent`].

use crate::constants::{DEFAULT_SHELL_NUMBER, SHAKU_M};
use serde::Serialize;

/// A standard shell size with its rated burst diameter and height.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ShellSize {
    pub number: u32,
    pub name: &'static str,
    pub diameter_m: f64,
    pub height_m: f64,
}

pub const SHELL_SIZES: [ShellSize; 5] = [
    ShellSize { number: 3, name: "3号", diameter_m: 60.0, height_m: 120.0 },
    ShellSize { number: 6, name: "6号", diameter_m: 180.0, height_m: 220.0 },
    ShellSize { number: 10, name: "10号", diameter_m: 280.0, height_m: 330.0 },
    ShellSize { number: 30, name: "30号", diameter_m: 600.0, height_m: 550.0 },
    ShellSize { number: 40, name: "40号", diameter_m: 700.0, height_m: 700.0 },
];

impl ShellSize {
    pub fn by_number(number: u32) -> Option<ShellSize> {
        SHELL_SIZES.iter().copied().find(|s| s.number == number)
    }
}

impl Default for ShellSize {
    fn default() -> Self {
        // The table always carries the default shell
        ShellSize::by_number(DEFAULT_SHELL_NUMBER).unwrap_or(SHELL_SIZES[2])
    }
}

#[inline]
pub fn shaku_to_m(shaku: f64) -> f64 {
    shaku * SHAKU_M
}

/// Where the firework bursts and how far it spreads.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FireworkProfile {
    Preset(ShellSize),
    Freeform {
        launch_height_m: f64,
        spread_shaku: f64,
    },
}

impl Default for FireworkProfile {
    fn default() -> Self {
        FireworkProfile::Preset(ShellSize::default())
    }
}

impl FireworkProfile {
    pub fn launch_height_m(&self) -> f64 {
        match *self {
            FireworkProfile::Preset(shell) => shell.height_m,
            FireworkProfile::Freeform { launch_height_m, .. } => launch_height_m,
        }
    }

    /// Burst diameter in metres.
    pub fn spread_m(&self) -> f64 {
        match *self {
            FireworkProfile::Preset(shell) => shell.diameter_m,
            FireworkProfile::Freeform { spread_shaku, .. } => shaku_to_m(spread_shaku),
        }
    }
}

/// How the burst's vertical band is derived from a profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BurstModel {
    /// The rated height is the whole subject, measured from the ground.
    #[default]
    Simple,
    /// A band of the burst diameter centred on the launch height, floored at the ground.
    Banded,
}

impl BurstModel {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "simple" => Some(BurstModel::Simple),
            "banded" | "band" => Some(BurstModel::Banded),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            BurstModel::Simple => "simple",
            BurstModel::Banded => "banded",
        }
    }

    pub fn extent(self, profile: &FireworkProfile) -> VerticalExtent {
        let launch = profile.launch_height_m();
        match self {
            BurstModel::Simple => VerticalExtent {
                top_m: launch,
                bottom_m: 0.0,
                center_m: launch / 2.0,
            },
            BurstModel::Banded => {
                let radius = profile.spread_m() / 2.0;
                VerticalExtent {
                    top_m: launch + radius,
                    bottom_m: (launch - radius).max(0.0),
                    center_m: launch,
                }
            }
        }
    }
}

/// Vertical band occupied by the burst, in metres above the ground.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct VerticalExtent {
    pub top_m: f64,
    pub bottom_m: f64,
    pub center_m: f64,
}

impl VerticalExtent {
    #[inline]
    pub fn height_m(&self) -> f64 {
        self.top_m - self.bottom_m
    }

    pub fn is_usable(&self) -> bool {
        self.top_m.is_finite() && self.bottom_m.is_finite() && self.height_m() > 0.0
    }
}
