//! Lighting settings
//!
//! The host owns the user-editable values and hands them over before each
//! frame. Raw values are validated here; a configuration is replaced only when
//! every supplied value parses, so a bad edit keeps the last good colors on
//! the keyboard.

use core::fmt;

use heapless::String;
use serde::{Deserialize, Serialize};

use crate::color::{ColorFormatError, Rgb, parse_hex};

const MODE_NAME_CANVAS: &str = "Canvas";
const MODE_NAME_FORCED: &str = "Forced";

pub const PROPERTY_SHUTDOWN_COLOR: &str = "shutdownColor";
pub const PROPERTY_LIGHTING_MODE: &str = "LightingMode";
pub const PROPERTY_FORCED_COLOR: &str = "forcedColor";

const DEFAULT_SHUTDOWN_COLOR: Rgb = Rgb { r: 0x00, g: 0x00, b: 0x00 };
const DEFAULT_FORCED_COLOR: Rgb = Rgb { r: 0x00, g: 0x9b, b: 0xde };

/// Capacity of a raw setting value
pub const SETTING_VALUE_LEN: usize = 16;

/// Capacity of the serialized parameter schema
pub const SCHEMA_JSON_LEN: usize = 1536;

/// Where key colors come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightingMode {
    /// Sample the effect canvas
    #[default]
    Canvas,
    /// Paint every key with the forced color
    Forced,
}

impl LightingMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Canvas => MODE_NAME_CANVAS,
            Self::Forced => MODE_NAME_FORCED,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_CANVAS => Some(Self::Canvas),
            MODE_NAME_FORCED => Some(Self::Forced),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A color property is not `#RRGGBB`
    InvalidColor {
        property: &'static str,
        error: ColorFormatError,
    },
    /// Lighting mode is neither `Canvas` nor `Forced`
    UnknownLightingMode,
    /// Settings payload is not valid JSON for the known properties
    Malformed,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::InvalidColor { property, error } => {
                write!(f, "invalid {}: {}", property, error)
            }
            ConfigurationError::UnknownLightingMode => write!(f, "unknown lighting mode"),
            ConfigurationError::Malformed => write!(f, "malformed settings payload"),
        }
    }
}

impl core::error::Error for ConfigurationError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            ConfigurationError::InvalidColor { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Validated lighting configuration, read-only during a render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightingConfiguration {
    pub lighting_mode: LightingMode,
    pub forced_color: Rgb,
    pub shutdown_color: Rgb,
}

impl LightingConfiguration {
    /// Configuration matching the parameter defaults
    pub const fn new() -> Self {
        Self {
            lighting_mode: LightingMode::Canvas,
            forced_color: DEFAULT_FORCED_COLOR,
            shutdown_color: DEFAULT_SHUTDOWN_COLOR,
        }
    }

    /// Set lighting mode
    #[must_use]
    pub const fn with_lighting_mode(mut self, mode: LightingMode) -> Self {
        self.lighting_mode = mode;
        self
    }

    /// Set forced color
    #[must_use]
    pub const fn with_forced_color(mut self, color: Rgb) -> Self {
        self.forced_color = color;
        self
    }

    /// Set shutdown color
    #[must_use]
    pub const fn with_shutdown_color(mut self, color: Rgb) -> Self {
        self.shutdown_color = color;
        self
    }

    /// Apply raw settings
    ///
    /// Missing values keep their current setting. On error nothing changes.
    pub fn apply(&mut self, settings: &LightingSettings) -> Result<(), ConfigurationError> {
        let mut next = *self;
        if let Some(mode) = &settings.lighting_mode {
            next.lighting_mode = LightingMode::parse_from_str(mode)
                .ok_or(ConfigurationError::UnknownLightingMode)?;
        }
        if let Some(color) = &settings.forced_color {
            next.forced_color = parse_property(PROPERTY_FORCED_COLOR, color)?;
        }
        if let Some(color) = &settings.shutdown_color {
            next.shutdown_color = parse_property(PROPERTY_SHUTDOWN_COLOR, color)?;
        }

        if next != *self {
            #[cfg(feature = "log")]
            log::debug!(
                "settings: mode={} forced={:?} shutdown={:?}",
                next.lighting_mode.as_str(),
                next.forced_color,
                next.shutdown_color
            );
        }
        *self = next;
        Ok(())
    }

    /// Apply settings from the host's JSON property map
    pub fn apply_json(&mut self, json: &str) -> Result<(), ConfigurationError> {
        let settings = LightingSettings::from_json(json)?;
        self.apply(&settings)
    }
}

impl Default for LightingConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_property(property: &'static str, value: &str) -> Result<Rgb, ConfigurationError> {
    parse_hex(value).map_err(|error| {
        #[cfg(feature = "log")]
        log::warn!("settings: rejected {}={:?}: {}", property, value, error);
        ConfigurationError::InvalidColor { property, error }
    })
}

/// Raw user settings as stored by the host
///
/// Each value is optional so the host can push partial updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightingSettings {
    #[serde(rename = "shutdownColor", skip_serializing_if = "Option::is_none")]
    pub shutdown_color: Option<String<SETTING_VALUE_LEN>>,
    #[serde(rename = "LightingMode", skip_serializing_if = "Option::is_none")]
    pub lighting_mode: Option<String<SETTING_VALUE_LEN>>,
    #[serde(rename = "forcedColor", skip_serializing_if = "Option::is_none")]
    pub forced_color: Option<String<SETTING_VALUE_LEN>>,
}

impl LightingSettings {
    /// Create an empty update
    pub const fn new() -> Self {
        Self {
            shutdown_color: None,
            lighting_mode: None,
            forced_color: None,
        }
    }

    /// Set shutdown color
    #[must_use]
    pub fn with_shutdown_color(mut self, value: &str) -> Self {
        self.shutdown_color = Some(truncated(value));
        self
    }

    /// Set lighting mode
    #[must_use]
    pub fn with_lighting_mode(mut self, value: &str) -> Self {
        self.lighting_mode = Some(truncated(value));
        self
    }

    /// Set forced color
    #[must_use]
    pub fn with_forced_color(mut self, value: &str) -> Self {
        self.forced_color = Some(truncated(value));
        self
    }

    /// Parse the host's JSON property map
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        serde_json_core::from_str::<Self>(json)
            .map(|(settings, _)| settings)
            .map_err(|_| ConfigurationError::Malformed)
    }
}

/// Copy at most [`SETTING_VALUE_LEN`] bytes, cut on a char boundary
///
/// An over-long value can never be a valid setting, so the cut value still
/// fails validation.
fn truncated(value: &str) -> String<SETTING_VALUE_LEN> {
    let mut out = String::new();
    for c in value.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Kind of a user-editable parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    Color,
    Combobox,
}

/// Declaration of one user-editable parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParameterSpec {
    pub property: &'static str,
    pub group: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<&'static str>,
    #[serde(rename = "type")]
    pub kind: ParameterKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<&'static [&'static str]>,
    pub default: &'static str,
}

pub const PARAMETERS: [ParameterSpec; 3] = [
    ParameterSpec {
        property: PROPERTY_SHUTDOWN_COLOR,
        group: "lighting",
        label: "Shutdown Color",
        description: "This color is applied to the device when the System, or SignalRGB is shutting down",
        min: Some("0"),
        max: Some("360"),
        kind: ParameterKind::Color,
        values: None,
        default: "#000000",
    },
    ParameterSpec {
        property: PROPERTY_LIGHTING_MODE,
        group: "lighting",
        label: "Lighting Mode",
        description: "Determines where the device's RGB comes from. Canvas will pull from the active Effect, while Forced will override it to a specific color",
        min: None,
        max: None,
        kind: ParameterKind::Combobox,
        values: Some(&[MODE_NAME_CANVAS, MODE_NAME_FORCED]),
        default: MODE_NAME_CANVAS,
    },
    ParameterSpec {
        property: PROPERTY_FORCED_COLOR,
        group: "lighting",
        label: "Forced Color",
        description: "The color used when 'Forced' Lighting Mode is enabled",
        min: Some("0"),
        max: Some("360"),
        kind: ParameterKind::Color,
        values: None,
        default: "#009bde",
    },
];

/// Serialize the parameter schema for the host
pub fn schema_json() -> Result<String<SCHEMA_JSON_LEN>, serde_json_core::ser::Error> {
    serde_json_core::to_string(&PARAMETERS)
}
