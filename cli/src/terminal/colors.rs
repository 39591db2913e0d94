//! The terminal palette. Everything user-facing picks from here so the
//! tool keeps one look.

use colored::Color;

pub const PRIMARY: Color = Color::BrightCyan;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const POSITIVE: Color = Color::BrightGreen;
pub const CAUTION: Color = Color::Yellow;
pub const NEGATIVE: Color = Color::BrightRed;
