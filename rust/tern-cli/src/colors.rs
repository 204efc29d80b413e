//! ANSI styling for `tern` output. Disabled when `NO_COLOR` is set.

fn paint(code: &str, s: &str) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        return s.to_string();
    }
    format!("\x1b[{}m{}\x1b[0m", code, s)
}

/// Success marks.
pub fn green(s: &str) -> String {
    paint("32", s)
}

/// Error prefix.
pub fn red(s: &str) -> String {
    paint("31", s)
}

pub fn bold(s: &str) -> String {
    paint("1", s)
}

/// Field labels in reports.
pub fn gray(s: &str) -> String {
    paint("90", s)
}
