//! Low-level terminal printing helpers.
//!
//! Every helper writes into a caller-supplied [`Write`] so whole
//! sessions can be rendered into a buffer under test.

use std::{cell::Cell, fmt::Display, io};

use crate::terminal::colors;
use colored::*;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

thread_local! {
    static GLOBAL_KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

/// Sets the key column width used by [`aligned_line`] dot leaders.
pub fn set_key_width(width: usize) {
    GLOBAL_KEY_WIDTH.set(width);
}

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for String {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

pub fn banner(out: &mut impl io::Write) -> io::Result<()> {
    let text_content: String = format!("⟦ PROPR v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .bright_black();

    writeln!(out, "{}{}{}", sep, text, sep)?;
    centerln(out, "Property Investment Calculator")
}

pub fn header(out: &mut impl io::Write, msg: &str) -> io::Result<()> {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    writeln!(
        out,
        "{}{}{}",
        "─".repeat(left).color(colors::SEPARATOR),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right).color(colors::SEPARATOR)
    )
}

pub fn fat_separator(out: &mut impl io::Write) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(TOTAL_WIDTH).bright_black())
}

/// One `> key....: value` row, keys dot-padded to the width registered
/// with [`set_key_width`].
pub fn aligned_line<V>(out: &mut impl io::Write, key: &str, value: V) -> io::Result<()>
where
    V: Display + WithDefaultColor,
{
    let dots: String = ".".repeat((GLOBAL_KEY_WIDTH.get() + 1).saturating_sub(key.len()));
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);

    writeln!(
        out,
        "{} {}{}{} {}",
        ">".color(colors::SEPARATOR),
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    )
}

pub fn centerln(out: &mut impl io::Write, msg: &str) -> io::Result<()> {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    writeln!(out, "{}{}", space, msg)
}

pub fn end_of_program(out: &mut impl io::Write) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    )
}
