// Argument parsing and validation for the fireworks-lens command.

use clap::Parser;
use lens_core::{
    BurstModel, FireworkProfile, SensorFormat, ShellSize, ShootingParameters, DEFAULT_DISTANCE_M,
    DEFAULT_GROUND_RATIO_PCT, DEFAULT_SPREAD_SHAKU, SHELL_SIZES,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Recommend a lens focal length for photographing fireworks")]
pub struct Args {
    /// Distance from the camera to the fireworks, in metres
    #[arg(long, short, default_value_t = DEFAULT_DISTANCE_M, value_parser = parse_distance, env = "FIREWORKS_LENS_DISTANCE")]
    pub distance: f64,

    /// Share of the frame height given to the ground, in percent (0 to <100)
    #[arg(long, short, default_value_t = DEFAULT_GROUND_RATIO_PCT, value_parser = parse_ground_ratio, env = "FIREWORKS_LENS_GROUND_RATIO")]
    pub ground_ratio: f64,

    /// Sensor format: "full", "aps-c" or "m43"
    #[arg(long, default_value = "full", value_parser = parse_sensor, env = "FIREWORKS_LENS_SENSOR")]
    pub sensor: SensorFormat,

    /// Shell size number (3, 6, 10, 30, 40); defaults to 10 unless --launch-height is given
    #[arg(long, value_parser = parse_shell, conflicts_with = "launch_height", env = "FIREWORKS_LENS_SHELL")]
    pub shell: Option<ShellSize>,

    /// Freeform launch height in metres, instead of a shell preset
    #[arg(long, value_parser = parse_positive_f64)]
    pub launch_height: Option<f64>,

    /// Freeform burst spread in shaku (1 shaku ≈ 3.03 m); used with --launch-height
    #[arg(long, value_parser = parse_spread, requires = "launch_height")]
    pub spread_shaku: Option<f64>,

    /// Burst geometry: "simple" (rated height from the ground) or "banded"
    #[arg(long, default_value = "simple", value_parser = parse_model, env = "FIREWORKS_LENS_MODEL")]
    pub model: BurstModel,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the recommendation for every shell size and sensor
    #[arg(long, conflicts_with = "json")]
    pub table: bool,
}

impl Args {
    pub fn params(&self) -> ShootingParameters {
        ShootingParameters {
            distance_m: self.distance,
            ground_ratio_pct: self.ground_ratio,
            sensor: self.sensor,
        }
    }

    pub fn profile(&self) -> FireworkProfile {
        match (self.shell, self.launch_height) {
            (Some(shell), _) => FireworkProfile::Preset(shell),
            (None, Some(launch_height_m)) => FireworkProfile::Freeform {
                launch_height_m,
                spread_shaku: self.spread_shaku.unwrap_or(DEFAULT_SPREAD_SHAKU),
            },
            (None, None) => FireworkProfile::default(),
        }
    }
}

// ===================== CLI VALUE PARSERS =====================

fn parse_number(s: &str) -> Result<f64, String> {
    let v: f64 = s.trim().parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !v.is_finite() {
        return Err(format!("Value must be finite, got {}", v));
    }
    Ok(v)
}

fn parse_positive_f64(s: &str) -> Result<f64, String> {
    let v = parse_number(s)?;
    if v <= 0.0 {
        return Err(format!("Value must be positive, got {}", v));
    }
    Ok(v)
}

fn parse_distance(s: &str) -> Result<f64, String> {
    parse_positive_f64(s).map_err(|e| format!("Distance: {}", e))
}

fn parse_ground_ratio(s: &str) -> Result<f64, String> {
    let v = parse_number(s)?;
    if !(0.0..100.0).contains(&v) {
        return Err(format!("Ground ratio must be at least 0 and below 100, got {}", v));
    }
    Ok(v)
}

fn parse_spread(s: &str) -> Result<f64, String> {
    let v = parse_number(s)?;
    if v < 0.0 {
        return Err(format!("Spread cannot be negative, got {}", v));
    }
    Ok(v)
}

fn parse_sensor(s: &str) -> Result<SensorFormat, String> {
    SensorFormat::from_key(s)
        .ok_or_else(|| format!("Unknown sensor '{}', expected full, aps-c or m43", s))
}

fn parse_model(s: &str) -> Result<BurstModel, String> {
    BurstModel::from_key(s).ok_or_else(|| format!("Unknown model '{}', expected simple or banded", s))
}

fn parse_shell(s: &str) -> Result<ShellSize, String> {
    let n: u32 = s
        .trim()
        .trim_end_matches('号')
        .parse()
        .map_err(|_| format!("Invalid shell number: {}", s))?;
    ShellSize::by_number(n).ok_or_else(|| {
        let known: Vec<String> = SHELL_SIZES.iter().map(|s| s.number.to_string()).collect();
        format!("Unknown shell size {}, expected one of {}", n, known.join(", "))
    })
}
