//! Shared color palette for the maintenance tracker UI.
//!
//! Mirrors the product palette: deep purple primary with red/blue/
//! green/orange accents for badges and chips.

pub mod colors {
    use eframe::egui::Color32;

    pub const PRIMARY: Color32 = Color32::from_rgb(0x67, 0x3a, 0xb7);
    pub const BACKGROUND: Color32 = Color32::from_rgb(0xf4, 0xf7, 0xfa);
    pub const TEXT_DARK: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
    pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0x75, 0x75, 0x75);
    pub const BORDER: Color32 = Color32::from_rgb(0xe0, 0xe0, 0xe0);

    pub const DANGER: Color32 = Color32::from_rgb(0xf4, 0x43, 0x36);
    pub const DANGER_LIGHT: Color32 = Color32::from_rgb(0xff, 0xeb, 0xee);
    pub const INFO: Color32 = Color32::from_rgb(0x21, 0x96, 0xf3);
    pub const INFO_LIGHT: Color32 = Color32::from_rgb(0xe3, 0xf2, 0xfd);
    pub const SUCCESS: Color32 = Color32::from_rgb(0x4c, 0xaf, 0x50);
    pub const SUCCESS_LIGHT: Color32 = Color32::from_rgb(0xe8, 0xf5, 0xe9);
    pub const WARNING: Color32 = Color32::from_rgb(0xff, 0x98, 0x00);
    pub const WARNING_LIGHT: Color32 = Color32::from_rgb(0xff, 0xf3, 0xe0);

    /// Background tint for today's cell
    pub const TODAY_FILL: Color32 = Color32::from_rgb(0xee, 0xf2, 0xff);
    /// Background for leading padding cells
    pub const PADDING_FILL: Color32 = Color32::from_rgb(0xfa, 0xfa, 0xfa);
    /// Cell background on hover
    pub const HOVER_FILL: Color32 = Color32::from_rgb(0xf9, 0xfa, 0xfb);
}
