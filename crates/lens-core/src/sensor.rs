use serde::Serialize;

/// Camera sensor formats offered by the frontends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SensorFormat {
    #[default]
    FullFrame,
    ApsC,
    MicroFourThirds,
}

impl SensorFormat {
    pub const ALL: [SensorFormat; 3] = [
        SensorFormat::FullFrame,
        SensorFormat::ApsC,
        SensorFormat::MicroFourThirds,
    ];

    /// Sensor width in millimetres.
    pub fn width_mm(self) -> f64 {
        match self {
            SensorFormat::FullFrame => 36.0,
            SensorFormat::ApsC => 23.6,
            SensorFormat::MicroFourThirds => 17.3,
        }
    }

    /// Sensor height in millimetres. This is the dimension the firework is framed against.
    pub fn height_mm(self) -> f64 {
        match self {
            SensorFormat::FullFrame => 24.0,
            SensorFormat::ApsC => 15.7,
            SensorFormat::MicroFourThirds => 13.0,
        }
    }

    pub fn diagonal_mm(self) -> f64 {
        self.width_mm().hypot(self.height_mm())
    }

    /// Key used by the picker `<select>` and the CLI.
    pub fn key(self) -> &'static str {
        match self {
            SensorFormat::FullFrame => "full",
            SensorFormat::ApsC => "aps-c",
            SensorFormat::MicroFourThirds => "m43",
        }
    }

    #[inline]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "full" | "fullframe" | "full-frame" | "ff" => Some(SensorFormat::FullFrame),
            "aps-c" | "apsc" => Some(SensorFormat::ApsC),
            "m43" | "mft" | "micro-four-thirds" => Some(SensorFormat::MicroFourThirds),
            _ => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            SensorFormat::FullFrame => "Full frame (36×24mm)",
            SensorFormat::ApsC => "APS-C (23.6×15.7mm)",
            SensorFormat::MicroFourThirds => "Micro Four Thirds (17.3×13mm)",
        }
    }
}
