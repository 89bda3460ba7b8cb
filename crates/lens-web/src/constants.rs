// DOM wiring for the web frontend. Element ids match `index.html`.

// Inputs
pub const ID_DISTANCE: &str = "distance";
pub const ID_GROUND_RATIO: &str = "groundRatio";
pub const ID_SENSOR: &str = "sensorSize";
pub const ID_SHELL: &str = "fireworksSize"; // shell number; any other value selects the sliders below
pub const ID_LAUNCH_HEIGHT: &str = "launchHeight";
pub const ID_SPREAD: &str = "spreadShaku";
pub const ID_MODEL: &str = "burstModel";

pub const INPUT_IDS: [&str; 7] = [
    ID_DISTANCE,
    ID_GROUND_RATIO,
    ID_SENSOR,
    ID_SHELL,
    ID_LAUNCH_HEIGHT,
    ID_SPREAD,
    ID_MODEL,
];

// Canvases
pub const ID_PREVIEW_CANVAS: &str = "previewCanvas";
pub const ID_SIDE_CANVAS: &str = "sideCanvas";

// Readouts
pub const ID_LENS_MM: &str = "lensMm";
pub const ID_ANGLE_INFO: &str = "angleInfo";
pub const ID_COVERAGE_INFO: &str = "coverageInfo";
pub const ID_BURST_INFO: &str = "burstInfo";
pub const ID_PREVIEW_DISTANCE: &str = "previewDistance";
pub const ID_PREVIEW_GROUND: &str = "previewGroundRatio";
pub const ID_PREVIEW_LENS: &str = "previewLens";

// Canvas text
pub const FONT_FAMILY: &str = "system-ui, sans-serif";
