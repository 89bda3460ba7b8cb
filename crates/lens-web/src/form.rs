// Raw form values to calculator inputs. Pure, so it runs in host tests.

use lens_core::{
    BurstModel, FireworkProfile, SensorFormat, ShellSize, ShootingParameters,
    DEFAULT_DISTANCE_M, DEFAULT_GROUND_RATIO_PCT, DEFAULT_LAUNCH_HEIGHT_M, DEFAULT_SPREAD_SHAKU,
};

/// String values as read from the page; `None` when the element is absent.
#[derive(Clone, Debug, Default)]
pub struct FormValues {
    pub distance: Option<String>,
    pub ground_ratio: Option<String>,
    pub sensor: Option<String>,
    pub shell: Option<String>,
    pub launch_height: Option<String>,
    pub spread: Option<String>,
    pub model: Option<String>,
}

/// Parse a numeric field; empty, non-numeric and non-finite text yields `default`.
#[inline]
pub fn parse_number_or(raw: Option<&str>, default: f64) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

impl FormValues {
    pub fn params(&self) -> ShootingParameters {
        ShootingParameters {
            distance_m: parse_number_or(self.distance.as_deref(), DEFAULT_DISTANCE_M),
            ground_ratio_pct: parse_number_or(self.ground_ratio.as_deref(), DEFAULT_GROUND_RATIO_PCT),
            sensor: self
                .sensor
                .as_deref()
                .and_then(SensorFormat::from_key)
                .unwrap_or_default(),
        }
    }

    /// A known shell number picks the preset; anything else uses the freeform sliders.
    pub fn profile(&self) -> FireworkProfile {
        let preset = self
            .shell
            .as_deref()
            .and_then(|s| s.trim().parse::<u32>().ok())
            .and_then(ShellSize::by_number);
        match preset {
            Some(shell) => FireworkProfile::Preset(shell),
            None if self.launch_height.is_some() => FireworkProfile::Freeform {
                launch_height_m: parse_number_or(
                    self.launch_height.as_deref(),
                    DEFAULT_LAUNCH_HEIGHT_M,
                ),
                spread_shaku: parse_number_or(self.spread.as_deref(), DEFAULT_SPREAD_SHAKU),
            },
            None => FireworkProfile::default(),
        }
    }

    pub fn model(&self) -> BurstModel {
        self.model
            .as_deref()
            .and_then(BurstModel::from_key)
            .unwrap_or_default()
    }
}
