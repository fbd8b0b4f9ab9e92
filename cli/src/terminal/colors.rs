use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 110, g: 200, b: 250 };
pub const ACCENT: Color = Color::TrueColor { r: 250, g: 200, b: 90 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 210, g: 210, b: 210 };
pub const WEIGHT: Color = Color::TrueColor { r: 240, g: 150, b: 110 };
pub const DIMENSIONS: Color = Color::TrueColor { r: 150, g: 220, b: 150 };
pub const ACCEPTED: Color = Color::Green;
pub const REFUSED: Color = Color::Red;
