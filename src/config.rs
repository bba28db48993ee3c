use std::path::PathBuf;

use tracing::warn;

pub const DEFAULT_PORT: u16 = 80;
pub const DEFAULT_SCREENSHOT_DIR: &str = "screenshots";
pub const DEFAULT_FAVICON_FILE: &str = "favicon.png";
pub const DEFAULT_INDEX_FILE: &str = "index.html";
pub const DEFAULT_PINNED_FILE: &str = "18-12-2025 19-23-43.png";

/// Request paths that serve the pinned screenshot.
///
/// The second form can never be requested over the wire (the request line is
/// split on whitespace) but is kept so both spellings map to the same file.
pub const DEFAULT_PINNED_PATHS: [&str; 2] = ["/18-12-2025%2019-23-43.png", "/18-12-2025 19-23-43.png"];

/// How the `/` and `/index.html` routes produce their page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexPage {
    /// Serve a companion HTML file from disk, 500 if it cannot be read.
    Template(PathBuf),
    /// Render a page inline that embeds `/latest-image` when a screenshot exists.
    Synthesized,
}

/// Startup configuration, built once and shared read-only by every handler.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub screenshot_dir: PathBuf,
    pub favicon_file: PathBuf,
    pub pinned_file: PathBuf,
    pub pinned_paths: Vec<String>,
    pub index: IndexPage,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            screenshot_dir: PathBuf::from(DEFAULT_SCREENSHOT_DIR),
            favicon_file: PathBuf::from(DEFAULT_FAVICON_FILE),
            pinned_file: PathBuf::from(DEFAULT_PINNED_FILE),
            pinned_paths: DEFAULT_PINNED_PATHS.iter().map(|p| p.to_string()).collect(),
            index: IndexPage::Template(PathBuf::from(DEFAULT_INDEX_FILE)),
        }
    }
}

impl Config {
    /// Loads the configuration from the process arguments and environment.
    ///
    /// Only the port is taken from outside: the first CLI argument, else the
    /// `PORT` environment variable, else 80.
    pub fn load() -> Self {
        let arg = std::env::args().nth(1);
        let env = std::env::var("PORT").ok();

        Self {
            port: resolve_port(arg.as_deref(), env.as_deref()),
            ..Self::default()
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_screenshot_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.screenshot_dir = dir.into();
        self
    }

    pub fn with_favicon_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.favicon_file = path.into();
        self
    }

    pub fn with_pinned_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.pinned_file = path.into();
        self
    }

    pub fn with_pinned_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pinned_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_index(mut self, index: IndexPage) -> Self {
        self.index = index;
        self
    }
}

/// Picks the listening port: CLI argument first, then the environment value.
///
/// The value is read as a leading integer: surrounding whitespace is skipped
/// and anything after the digits is ignored, so `8080abc` means 8080. A value
/// with no leading integer, or one outside `1..=65535`, is reported and
/// replaced by the default port.
pub fn resolve_port(arg: Option<&str>, env: Option<&str>) -> u16 {
    let raw = match arg.or(env) {
        Some(raw) => raw,
        None => return DEFAULT_PORT,
    };

    match parse_port(raw) {
        Some(port) => port,
        None => {
            warn!("Invalid port value '{}', falling back to {}", raw, DEFAULT_PORT);
            DEFAULT_PORT
        }
    }
}

fn parse_port(raw: &str) -> Option<u16> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    let value = s[..digits].parse::<i64>().ok()?;
    let value = if negative { -value } else { value };

    u16::try_from(value).ok().filter(|port| *port != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_a_port() {
        assert_eq!(parse_port("0"), None);
        assert_eq!(parse_port("65536"), None);
        assert_eq!(parse_port(" 8080 "), Some(8080));
    }

    #[test]
    fn leading_integer_is_used() {
        assert_eq!(parse_port("8080abc"), Some(8080));
        assert_eq!(parse_port("+443"), Some(443));
        assert_eq!(parse_port("\t3000.5"), Some(3000));
        assert_eq!(parse_port("-80"), None);
        assert_eq!(parse_port("abc8080"), None);
        assert_eq!(parse_port("+"), None);
        assert_eq!(parse_port(""), None);
        assert_eq!(parse_port("99999999999999999999"), None);
    }
}
