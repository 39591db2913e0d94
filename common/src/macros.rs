//! Status-line macros shared across the workspace.
//!
//! Each writes a single symbol-prefixed line to the given writer.
//! Rendering failures are ignored; callers that care about the writer
//! failing will notice on their next own write.

/// `[>]` neutral status.
#[macro_export]
macro_rules! info {
    ($dst:expr, $($arg:tt)*) => {{
        use ::colored::Colorize as _;
        let _ = ::std::writeln!($dst, "{} {}", "[>]".cyan().bold(), ::std::format!($($arg)*));
    }};
}

/// `[+]` something went right.
#[macro_export]
macro_rules! success {
    ($dst:expr, $($arg:tt)*) => {{
        use ::colored::Colorize as _;
        let _ = ::std::writeln!($dst, "{} {}", "[+]".green().bold(), ::std::format!($($arg)*));
    }};
}

/// `[*]` something needs the user's attention.
#[macro_export]
macro_rules! warn {
    ($dst:expr, $($arg:tt)*) => {{
        use ::colored::Colorize as _;
        let _ = ::std::writeln!($dst, "{} {}", "[*]".yellow().bold(), ::std::format!($($arg)*));
    }};
}

/// `[-]` something went wrong.
#[macro_export]
macro_rules! error {
    ($dst:expr, $($arg:tt)*) => {{
        use ::colored::Colorize as _;
        let _ = ::std::writeln!($dst, "{} {}", "[-]".red().bold(), ::std::format!($($arg)*));
    }};
}
