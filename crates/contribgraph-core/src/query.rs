//! Request parameters for a graph, as they arrive in a query string.

use crate::model::Organization;
use crate::orgs::parse_orgs;
use crate::{Error, Result};

pub const DEFAULT_MONTHS: u32 = 6;
pub const MIN_MONTHS: u32 = 1;
pub const MAX_MONTHS: u32 = 12;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Svg,
    Png,
}

impl OutputFormat {
    /// Case-insensitive; anything other than `png` (including nothing) is SVG.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.trim().eq_ignore_ascii_case("png") => Self::Png,
            _ => Self::Svg,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Svg => "image/svg+xml",
            Self::Png => "image/png",
        }
    }
}

/// Month count from user input: the leading integer of `raw`, [`DEFAULT_MONTHS`] when there is
/// none (or it is zero), clamped to `[MIN_MONTHS, MAX_MONTHS]`.
pub fn clamp_months(raw: Option<&str>) -> u32 {
    let parsed = raw.and_then(leading_integer).filter(|n| *n != 0);
    let months = parsed.unwrap_or(i64::from(DEFAULT_MONTHS));
    months.clamp(i64::from(MIN_MONTHS), i64::from(MAX_MONTHS)) as u32
}

fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, digits) = match s.as_bytes().first()? {
        b'-' => (-1, &s[1..]),
        b'+' => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Anything longer than i64 clamps to the top of the range anyway.
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * value)
}

/// `username`, `orgs`, `months`, `format` and `demo`, parsed leniently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphQuery {
    pub username: Option<String>,
    /// Raw organization spec (see [`parse_orgs`]); `auto` asks for auto-detection.
    pub orgs: Option<String>,
    pub months: u32,
    pub format: OutputFormat,
    pub demo: bool,
}

impl Default for GraphQuery {
    fn default() -> Self {
        Self {
            username: None,
            orgs: None,
            months: DEFAULT_MONTHS,
            format: OutputFormat::Svg,
            demo: false,
        }
    }
}

impl GraphQuery {
    /// Parses `username=alice&orgs=rails,hotwired&months=3&format=png&demo=true`.
    ///
    /// A leading `?` is ignored, unknown keys are ignored, later keys win.
    pub fn from_query_str(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        let mut out = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "username" => {
                    let v = value.trim();
                    out.username = (!v.is_empty()).then(|| v.to_string());
                }
                "orgs" => out.orgs = Some(value.into_owned()),
                "months" => out.months = clamp_months(Some(&value)),
                "format" => out.format = OutputFormat::parse(Some(&value)),
                "demo" => out.demo = value == "true",
                _ => {}
            }
        }
        out
    }

    pub fn username(&self) -> Result<&str> {
        self.username.as_deref().ok_or(Error::MissingUsername)
    }

    pub fn auto_detect_orgs(&self) -> bool {
        self.orgs
            .as_deref()
            .is_some_and(|s| s.trim().eq_ignore_ascii_case("auto"))
    }

    /// Organizations named by `orgs` (defaults when absent). Empty when auto-detection was
    /// requested, since those come from the fetcher.
    pub fn organizations(&self) -> Vec<Organization> {
        if self.auto_detect_orgs() {
            return Vec::new();
        }
        parse_orgs(self.orgs.as_deref())
    }

    /// Serializes back to a query string with the given output format.
    pub fn to_query_string(&self, format: OutputFormat) -> String {
        let mut out = url::form_urlencoded::Serializer::new(String::new());
        if let Some(username) = self.username.as_deref() {
            out.append_pair("username", username);
        }
        out.append_pair("months", &self.months.to_string());
        out.append_pair("format", format.as_str());
        if let Some(orgs) = self.orgs.as_deref() {
            out.append_pair("orgs", orgs);
        }
        if self.demo {
            out.append_pair("demo", "true");
        }
        out.finish()
    }
}
