//! Shared CLI output formatting with colors, symbols, and JSON mode.

use crate::analysis::report::Status;

/// Check if color output is enabled.
pub fn color_enabled() -> bool {
    // Respect NO_COLOR env (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    // Respect --no-color flag via our global flag
    if std::env::var("SITELENS_NO_COLOR").is_ok() {
        return false;
    }
    // Default: enable color if stderr is a terminal
    atty_stderr()
}

/// Check if stderr is a TTY.
fn atty_stderr() -> bool {
    unsafe { libc_isatty(2) != 0 }
}

#[cfg(unix)]
extern "C" {
    fn isatty(fd: std::os::raw::c_int) -> std::os::raw::c_int;
}

#[cfg(unix)]
unsafe fn libc_isatty(fd: i32) -> i32 {
    unsafe { isatty(fd) }
}

#[cfg(not(unix))]
unsafe fn libc_isatty(_fd: i32) -> i32 {
    0
}

// ANSI color codes
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const CYAN: &str = "\x1b[36m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Colored string builder.
pub struct Styled {
    use_color: bool,
}

impl Styled {
    pub fn new() -> Self {
        Self {
            use_color: color_enabled(),
        }
    }

    /// Symbol for a verdict line: check, warning, cross, or circle.
    pub fn status_sym(&self, status: Status) -> &str {
        if !self.use_color {
            return match status {
                Status::Good => "OK",
                Status::NeedsImprovement => "??",
                Status::NeedsAttention => "!!",
                Status::Info => "--",
                Status::Note => "--",
            };
        }
        match status {
            Status::Good => "\x1b[32m\u{2713}\x1b[0m",
            Status::NeedsImprovement => "\x1b[33m\u{26a0}\x1b[0m",
            Status::NeedsAttention => "\x1b[31m\u{2717}\x1b[0m",
            Status::Info => "\x1b[34m\u{25cb}\x1b[0m",
            Status::Note => "\x1b[2m\u{25cb}\x1b[0m",
        }
    }

    /// Color `s` by the fixed verdict palette: green, orange (terminal
    /// yellow), red, blue, grey (terminal dim). Anything else passes
    /// through uncolored.
    pub fn status_color(&self, status: Status, s: &str) -> String {
        match status {
            Status::Good => self.green(s),
            Status::NeedsImprovement => self.yellow(s),
            Status::NeedsAttention => self.red(s),
            Status::Info => self.blue(s),
            Status::Note => self.dim(s),
        }
    }

    pub fn green(&self, s: &str) -> String {
        if self.use_color {
            format!("{GREEN}{s}{RESET}")
        } else {
            s.to_string()
        }
    }

    pub fn red(&self, s: &str) -> String {
        if self.use_color {
            format!("{RED}{s}{RESET}")
        } else {
            s.to_string()
        }
    }

    pub fn yellow(&self, s: &str) -> String {
        if self.use_color {
            format!("{YELLOW}{s}{RESET}")
        } else {
            s.to_string()
        }
    }

    pub fn blue(&self, s: &str) -> String {
        if self.use_color {
            format!("{BLUE}{s}{RESET}")
        } else {
            s.to_string()
        }
    }

    pub fn cyan(&self, s: &str) -> String {
        if self.use_color {
            format!("{CYAN}{s}{RESET}")
        } else {
            s.to_string()
        }
    }

    pub fn dim(&self, s: &str) -> String {
        if self.use_color {
            format!("{DIM}{s}{RESET}")
        } else {
            s.to_string()
        }
    }

    pub fn bold(&self, s: &str) -> String {
        if self.use_color {
            format!("{BOLD}{s}{RESET}")
        } else {
            s.to_string()
        }
    }
}

impl Default for Styled {
    fn default() -> Self {
        Self::new()
    }
}

/// Print a section header (e.g., "Page Title", "Meta Description").
pub fn print_section(s: &Styled, title: &str) {
    eprintln!("  {}", s.bold(title));
}

/// Print an indented detail line under a section.
pub fn print_detail(msg: &str) {
    eprintln!("    {msg}");
}

/// Check if --quiet mode is active.
pub fn is_quiet() -> bool {
    std::env::var("SITELENS_QUIET").is_ok()
}

/// Check if --verbose mode is active.
pub fn is_verbose() -> bool {
    std::env::var("SITELENS_VERBOSE").is_ok()
}

/// Check if --json mode is active.
pub fn is_json() -> bool {
    std::env::var("SITELENS_JSON").is_ok()
}

/// Print JSON output to stdout.
pub fn print_json(value: &serde_json::Value) {
    if let Ok(s) = serde_json::to_string_pretty(value) {
        println!("{s}");
    }
}
