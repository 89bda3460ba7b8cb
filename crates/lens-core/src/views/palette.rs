use super::scene::Rgba;

// Preview backdrop
pub const SKY_TOP: Rgba = Rgba::rgb(0x1a, 0x1a, 0x2e);
pub const SKY_MID: Rgba = Rgba::rgb(0x16, 0x21, 0x3e);
pub const SKY_HORIZON: Rgba = Rgba::rgb(0x0f, 0x34, 0x60);
pub const GROUND_NEAR: Rgba = Rgba::rgb(0x2d, 0x50, 0x16);
pub const GROUND_FAR: Rgba = Rgba::rgb(0x1a, 0x30, 0x09);
pub const HORIZON: Rgba = Rgba::rgb(0x66, 0x66, 0x66);

pub const WHITE: Rgba = Rgba::rgb(0xff, 0xff, 0xff);
pub const CAMERA_OUTLINE: Rgba = Rgba::rgb(0x33, 0x33, 0x33);

// Burst rings and rays, cycled by index
pub const BURST_COLORS: [Rgba; 5] = [
    Rgba::rgb(0xff, 0x6b, 0x6b), // red
    Rgba::rgb(0x4e, 0xcd, 0xc4), // cyan
    Rgba::rgb(0xff, 0xe6, 0x6d), // yellow
    Rgba::rgb(0xff, 0x8c, 0x42), // orange
    Rgba::rgb(0x95, 0xe1, 0xd3), // green
];

// Side diagram
pub const AXIS: Rgba = Rgba::rgb(0x80, 0x80, 0x80);
pub const LABEL: Rgba = Rgba::rgb(0x8a, 0x8a, 0x8e);
pub const CAMERA: Rgba = Rgba::rgb(0x00, 0x7a, 0xff);
pub const BAND: Rgba = Rgba::rgb(0xff, 0x3b, 0x30);
pub const BAND_END: Rgba = Rgba::rgb(0xff, 0x95, 0x00);
pub const FIELD_OF_VIEW: Rgba = Rgba::rgb(0x00, 0x7a, 0xff);
pub const DISTANCE: Rgba = Rgba::rgb(0x34, 0xc7, 0x59);
