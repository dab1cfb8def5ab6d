//! Per-element configuration read once at registration time.
//!
//! Hosts pass the raw `data-origin` / `data-depth` attribute strings. The
//! strict parsers report what was wrong; [`ElementConfig::from_attributes`]
//! never fails and falls back to `center` / `0.5`. A depth that parses to
//! zero also reads as `0.5`, the same as a missing one.

use crate::constants::DEFAULT_DEPTH;
use crate::error::ConfigError;
use std::str::FromStr;

/// Edge an element appears to arrive from when it enters the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum OriginSide {
    Top,
    Bottom,
    Left,
    Right,
    #[default]
    Center,
}

impl FromStr for OriginSide {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(OriginSide::Top),
            "bottom" => Ok(OriginSide::Bottom),
            "left" => Ok(OriginSide::Left),
            "right" => Ok(OriginSide::Right),
            "center" => Ok(OriginSide::Center),
            _ => Err(ConfigError::UnknownOrigin(s.to_string())),
        }
    }
}

/// Parse a depth weight; it must be a finite number and is clamped to [0,1].
pub fn parse_depth(s: &str) -> Result<f32, ConfigError> {
    let v: f32 = s
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidDepth(s.to_string()))?;
    if !v.is_finite() {
        return Err(ConfigError::InvalidDepth(s.to_string()));
    }
    Ok(v.clamp(0.0, 1.0))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementConfig {
    pub origin: OriginSide,
    pub depth: f32,
}

impl Default for ElementConfig {
    fn default() -> Self {
        Self {
            origin: OriginSide::Center,
            depth: DEFAULT_DEPTH,
        }
    }
}

impl ElementConfig {
    pub fn from_attributes(origin: Option<&str>, depth: Option<&str>) -> Self {
        let origin = match origin.map(str::parse::<OriginSide>) {
            Some(Ok(o)) => o,
            Some(Err(e)) => {
                log::debug!("[config] {e}; using center");
                OriginSide::Center
            }
            None => OriginSide::Center,
        };
        let depth = match depth.map(parse_depth) {
            Some(Ok(d)) if d > 0.0 => d,
            Some(Ok(_)) => {
                log::debug!("[config] zero depth; using {DEFAULT_DEPTH}");
                DEFAULT_DEPTH
            }
            Some(Err(e)) => {
                log::debug!("[config] {e}; using {DEFAULT_DEPTH}");
                DEFAULT_DEPTH
            }
            None => DEFAULT_DEPTH,
        };
        Self { origin, depth }
    }
}
