use std::fmt;
use std::str::FromStr;

use crate::ConfigError;

/// A 24-bit `0xrrggbb` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u32);

impl FromStr for Rgb {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor(raw.to_string()));
        }

        let value = match hex.len() {
            6 => u32::from_str_radix(hex, 16).ok(),
            // #abc expands to #aabbcc
            3 => u32::from_str_radix(hex, 16).ok().map(|short| {
                let (r, g, b) = ((short >> 8) & 0xf, (short >> 4) & 0xf, short & 0xf);
                (r * 0x11) << 16 | (g * 0x11) << 8 | (b * 0x11)
            }),
            _ => None,
        };

        value
            .map(Rgb)
            .ok_or_else(|| ConfigError::InvalidColor(raw.to_string()))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// Three-stop vertical gradient shared by every bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub start: Rgb,
    pub mid: Rgb,
    pub end: Rgb,
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            start: Rgb(0x6366f1),
            mid: Rgb(0xa855f7),
            end: Rgb(0xec4899),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub label: String,
    pub sublabel: String,
    pub gradient: Gradient,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            label: "Activity".into(),
            sublabel: "Last 7 days".into(),
            gradient: Gradient::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub value: f64,
    pub height_pct: u8,
}
