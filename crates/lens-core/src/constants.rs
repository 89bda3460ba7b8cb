// Shared physical defaults and layout tuning used by both web and CLI frontends.

// Shooting defaults (also the fallback for unusable input)
pub const DEFAULT_DISTANCE_M: f64 = 500.0;
pub const DEFAULT_GROUND_RATIO_PCT: f64 = 30.0;
pub const DEFAULT_LAUNCH_HEIGHT_M: f64 = 300.0;
pub const DEFAULT_SPREAD_SHAKU: f64 = 0.0;
pub const DEFAULT_SHELL_NUMBER: u32 = 10;

// Traditional burst-size unit
pub const SHAKU_M: f64 = 3.03; // metres per shaku

// Input ranges exposed by the frontends
pub const DISTANCE_RANGE_M: (f64, f64) = (50.0, 5000.0);
pub const DISTANCE_STEP_M: f64 = 10.0;
pub const GROUND_RATIO_RANGE_PCT: (f64, f64) = (0.0, 100.0);
pub const GROUND_RATIO_STEP_PCT: f64 = 5.0;
pub const LAUNCH_HEIGHT_RANGE_M: (f64, f64) = (50.0, 1000.0);
pub const SPREAD_RANGE_SHAKU: (f64, f64) = (0.0, 4.0);
pub const SPREAD_STEP_SHAKU: f64 = 0.1;

// Clamps that keep the lens result finite
pub const MAX_GROUND_RATIO_PCT: f64 = 95.0; // highest ratio with sky left to frame into
pub const MAX_EFFECTIVE_ANGLE_DEG: f64 = 179.0; // widest vertical field we will invert
pub const MIN_FOCAL_LENGTH_MM: u32 = 1;
pub const MAX_FOCAL_LENGTH_MM: u32 = 1_000_000; // a kilometre of glass

// Composition preview
pub const PREVIEW_REFERENCE_DISTANCE_M: f64 = 500.0; // glyph shrinks beyond this distance
pub const PREVIEW_CAMERA_INSET_PX: f64 = 20.0;
pub const PREVIEW_CAMERA_RADIUS_PX: f64 = 8.0;
pub const PREVIEW_RING_COUNT: usize = 5;
pub const PREVIEW_RAY_COUNT: usize = 8;

// Side elevation diagram
pub const SIDE_MARGIN_PX: f64 = 40.0;
pub const SIDE_CAMERA_OFFSET_PX: f64 = 20.0; // camera sits this far right of the height axis
pub const SIDE_TRAILING_PAD_PX: f64 = 60.0;
pub const SIDE_MIN_DISTANCE_SPAN_M: f64 = 1000.0;
pub const SIDE_DISTANCE_HEADROOM: f64 = 1.5;
pub const SIDE_HEIGHT_HEADROOM: f64 = 1.2;
pub const SIDE_HEIGHT_TICK_M: f64 = 100.0;
pub const SIDE_DISTANCE_TICK_M: f64 = 200.0;
pub const SIDE_BAND_CAP_HALF_WIDTH_PX: f64 = 15.0;
