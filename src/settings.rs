//! User settings: canvas size, rectangle/slot geometry and colors.
//!
//! Stored as JSON at `<config dir>/slotboard/settings.json`. Every field has a
//! default, so a partial file (or none at all) is fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::constants::*;
use crate::error::{SettingsError, SettingsResult};
use crate::render::{Color, Palette};

/// Hex color strings, validated into a [`Palette`] on use
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSettings {
    pub slot: String,
    pub slot_hover: String,
    pub connection: String,
    pub preview: String,
    pub rect_fill: String,
    pub rect_border: String,
    pub rect_drag_border: String,
    pub background: String,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            slot: Color(SLOT_COLOR).to_string(),
            slot_hover: Color(SLOT_HOVER_COLOR).to_string(),
            connection: Color(CONNECTION_COLOR).to_string(),
            preview: Color(PREVIEW_COLOR).to_string(),
            rect_fill: Color(RECT_COLOR).to_string(),
            rect_border: Color(RECT_BORDER_COLOR).to_string(),
            rect_drag_border: Color(RECT_DRAG_BORDER_COLOR).to_string(),
            background: Color(CANVAS_BACKGROUND).to_string(),
        }
    }
}

impl ColorSettings {
    pub fn palette(&self) -> SettingsResult<Palette> {
        Ok(Palette {
            slot: Color::from_hex(&self.slot)?,
            slot_hover: Color::from_hex(&self.slot_hover)?,
            connection: Color::from_hex(&self.connection)?,
            preview: Color::from_hex(&self.preview)?,
            rect_fill: Color::from_hex(&self.rect_fill)?,
            rect_border: Color::from_hex(&self.rect_border)?,
            rect_drag_border: Color::from_hex(&self.rect_drag_border)?,
            background: Color::from_hex(&self.background)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub rect_width: f32,
    pub rect_height: f32,
    pub placement_margin: f32,
    pub slot_radius: f32,
    pub slot_hit_radius: f32,
    /// Fixed seed for rectangle placement; random when absent
    pub placement_seed: Option<u64>,
    pub colors: ColorSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            rect_width: RECT_WIDTH,
            rect_height: RECT_HEIGHT,
            placement_margin: PLACEMENT_MARGIN,
            slot_radius: SLOT_RADIUS,
            slot_hit_radius: SLOT_HIT_RADIUS,
            placement_seed: None,
            colors: ColorSettings::default(),
        }
    }
}

/// Default location of the settings file, if the platform has a config dir
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("slotboard").join("settings.json"))
}

impl Settings {
    /// Load from the default path, falling back to defaults on any problem.
    pub fn load() -> Self {
        Self::load_or_default(default_settings_path().as_deref())
    }

    /// Load from `path`, falling back to defaults when there is no path, no
    /// file, or the file is unreadable or invalid.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            warn!("No config directory on this platform, using default settings");
            return Self::default();
        };
        if !path.exists() {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(settings) => {
                info!(path = %path.display(), "Loaded settings");
                settings
            }
            Err(e) => {
                warn!(path = %path.display(), "Ignoring settings file: {}", e);
                Self::default()
            }
        }
    }

    /// Read and validate a settings file.
    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let json = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> SettingsResult<()> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("rect_width", self.rect_width),
            ("rect_height", self.rect_height),
            ("slot_radius", self.slot_radius),
            ("slot_hit_radius", self.slot_hit_radius),
        ];
        if let Some((name, value)) = positive.iter().find(|(_, v)| !(*v > 0.0)) {
            return Err(SettingsError::Invalid(format!("{name} must be positive, got {value}")));
        }
        if !(self.placement_margin >= 0.0) {
            return Err(SettingsError::Invalid(format!(
                "placement_margin must not be negative, got {}",
                self.placement_margin
            )));
        }
        if self.slot_hit_radius < self.slot_radius {
            return Err(SettingsError::Invalid(format!(
                "slot_hit_radius ({}) is smaller than slot_radius ({})",
                self.slot_hit_radius, self.slot_radius
            )));
        }
        self.colors.palette()?;
        Ok(())
    }
}
