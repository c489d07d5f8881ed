// File: crates/bench-core/src/output.rs
// Summary: printf-style single-placeholder templates for output paths (`%s`) and titles (`%d`).

use std::fmt;
use std::path::PathBuf;

use crate::error::ConfigError;

/// A template with exactly one placeholder; `%%` stands for a literal `%`.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Template {
    prefix: String,
    suffix: String,
}

impl Template {
    fn parse(text: &str, conversion: char) -> Result<Self, &'static str> {
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut seen = false;
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            let out = if seen { &mut suffix } else { &mut prefix };
            if c != '%' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('%') => out.push('%'),
                Some(c) if c == conversion => {
                    if seen {
                        return Err("more than one placeholder");
                    }
                    seen = true;
                }
                Some(_) => return Err("unsupported `%` conversion"),
                None => return Err("dangling `%` at end"),
            }
        }
        if !seen {
            return Err("no placeholder");
        }
        Ok(Self { prefix, suffix })
    }

    fn fill(&self, value: impl fmt::Display) -> String {
        format!("{}{}{}", self.prefix, value, self.suffix)
    }
}

/// Output filename pattern with one `%s` for the chart's output-key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPattern {
    raw: String,
    template: Template,
}

impl OutputPattern {
    pub fn parse(pattern: &str) -> Result<Self, ConfigError> {
        let template = Template::parse(pattern, 's')
            .map_err(|reason| ConfigError::BadPattern { pattern: pattern.to_string(), reason })?;
        Ok(Self { raw: pattern.to_string(), template })
    }

    /// Path for the chart with `output_key`.
    pub fn resolve(&self, output_key: &str) -> PathBuf {
        PathBuf::from(self.template.fill(output_key))
    }

    pub fn as_str(&self) -> &str { &self.raw }
}

impl std::str::FromStr for OutputPattern {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::parse(s) }
}

impl fmt::Display for OutputPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.raw) }
}

/// Substitute `output_key` into `pattern`.
pub fn resolve(pattern: &str, output_key: &str) -> Result<PathBuf, ConfigError> {
    Ok(OutputPattern::parse(pattern)?.resolve(output_key))
}

/// Substitute the bench-type selector into a `%d` title template.
pub fn format_title(template: &str, selector: u32) -> Result<String, ConfigError> {
    let t = Template::parse(template, 'd')
        .map_err(|reason| ConfigError::BadPattern { pattern: template.to_string(), reason })?;
    Ok(t.fill(selector))
}
