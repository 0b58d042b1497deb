use ratatui::style::Color;

pub const BRAND_ACCENT: Color = Color::Rgb(0x7c, 0x5c, 0xff);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const TEXT_DIM: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const FIELD_FOCUS: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
