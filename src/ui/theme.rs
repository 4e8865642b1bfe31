use ratatui::style::Color;

pub const BACKGROUND: Color = Color::Rgb(0x28, 0x2c, 0x34);
pub const CARD: Color = Color::Rgb(0x3c, 0x3f, 0x45);
pub const ACCENT: Color = Color::Rgb(0x61, 0xda, 0xfb);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x88, 0x88, 0x88);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
