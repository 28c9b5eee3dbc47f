//! Platform-aware shell argument escaping.
//!
//! Values interpolated into the sync pipeline (passwords, URLs, inline PHP)
//! come from external tool output and must survive one pass through the
//! target platform's shell untouched. POSIX and Windows quote differently,
//! so the dialect is picked once at startup and carried by the `Escaper`.

/// Characters that never need quoting on either platform.
/// Simple tokens (flag values, hostnames, ports) stay readable in debug output.
fn is_safe(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | ':' | '/' | '_' | '-'))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Posix,
    Windows,
}

impl Platform {
    /// Detect the platform the assembled pipeline will run on.
    pub fn detect() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }
}

/// Escapes arguments for one shell dialect, chosen at construction.
#[derive(Debug, Clone, Copy)]
pub struct Escaper {
    platform: Platform,
}

impl Escaper {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    pub fn detected() -> Self {
        Self::new(Platform::detect())
    }

    /// Escape a value and wrap it in the platform's quote character.
    pub fn escape(&self, value: &str) -> String {
        self.escape_inner(value, false)
    }

    /// Escape a value without outer quotes, for callers that add their own
    /// quoting layer.
    pub fn escape_raw(&self, value: &str) -> String {
        self.escape_inner(value, true)
    }

    fn escape_inner(&self, value: &str, raw: bool) -> String {
        // Short-circuit escaping for simple params (keep stuff readable)
        if is_safe(value) {
            return value.to_string();
        }

        match self.platform {
            Platform::Posix => escape_posix(value, raw),
            Platform::Windows => escape_windows(value, raw),
        }
    }
}

/// For single quotes existing in the string, we "exit" single-quote mode,
/// add a `\'` and then "re-enter" single-quote mode, so `quote` becomes
/// `'\''quote'\''`.
///
/// TAB/LF/CR/NUL/VT are translated to a plain space. A command line built
/// on one host may execute on a remote one, and these characters do not
/// survive every transport intact; stripping their shell meaning is the
/// conservative choice. Other control characters are passed through and
/// are not guaranteed to round-trip.
fn escape_posix(value: &str, raw: bool) -> String {
    let mut escaped = value.replace('\'', "'\\''");

    for c in ['\t', '\n', '\r', '\0', '\x0B'] {
        escaped = escaped.replace(c, " ");
    }

    if raw {
        escaped
    } else {
        format!("'{}'", escaped)
    }
}

/// cmd.exe quoting: double up backslashes, embedded double quotes, and `%`
/// (the latter defeats batch variable expansion).
fn escape_windows(value: &str, raw: bool) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('"', "\"\"")
        .replace('%', "%%");

    if raw {
        escaped
    } else {
        format!("\"{}\"", escaped)
    }
}
