//! Configuration for the winding viewer.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::controllers::SnapshotController;
use crate::error::{Result, WindingError};

// ─────────────────────────────────────────────────────────────────────────────
// Period slider
// ─────────────────────────────────────────────────────────────────────────────

/// Range and granularity of the interactive period control.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodSliderConfig {
    /// Smallest selectable period. Must be > 0. Default: `0.1`.
    pub min: f64,
    /// Largest selectable period. Default: `10.0`.
    pub max: f64,
    /// Step between selectable values. `None` = continuous.
    pub step: Option<f64>,
    /// Logarithmic slider scale.
    pub logarithmic: bool,
}

impl Default for PeriodSliderConfig {
    fn default() -> Self {
        Self {
            min: 0.1,
            max: 10.0,
            step: None,
            logarithmic: false,
        }
    }
}

impl PeriodSliderConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.min.is_finite() && self.min > 0.0) {
            return Err(WindingError::InvalidConfig(format!(
                "slider min must be a positive number, got {}",
                self.min
            )));
        }
        if !(self.max.is_finite() && self.max > self.min) {
            return Err(WindingError::InvalidConfig(format!(
                "slider max ({}) must be greater than min ({})",
                self.max, self.min
            )));
        }
        if let Some(step) = self.step {
            if !(step.is_finite() && step > 0.0) {
                return Err(WindingError::InvalidConfig(format!(
                    "slider step must be positive, got {step}"
                )));
            }
        }
        Ok(())
    }

    /// Clamp `period` into the slider range.
    pub fn clamp(&self, period: f64) -> f64 {
        period.clamp(self.min, self.max)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle individual viewer features. All default to `true`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotFeatures {
    /// Show the plot legends.
    pub legend: bool,
    /// Show the plot grid.
    pub grid: bool,
    /// Show the export buttons.
    pub export: bool,
    /// Show the "Auto period" button.
    pub auto_period_button: bool,
}

impl Default for PlotFeatures {
    fn default() -> Self {
        Self {
            legend: true,
            grid: true,
            export: true,
            auto_period_button: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// WindingConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the viewer.
#[derive(Clone)]
pub struct WindingConfig {
    /// Native window title.
    pub title: String,
    /// Optional headline rendered above the plots.
    pub headline: Option<String>,
    /// Period control range/step.
    pub slider: PeriodSliderConfig,
    /// Toggle individual UI features.
    pub features: PlotFeatures,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
    /// Optional observer/steering handle.
    pub controller: Option<SnapshotController>,
}

impl Default for WindingConfig {
    fn default() -> Self {
        Self {
            title: "Winding".to_string(),
            headline: None,
            slider: PeriodSliderConfig::default(),
            features: PlotFeatures::default(),
            native_options: None,
            controller: None,
        }
    }
}

impl WindingConfig {
    /// Overlay the serializable settings from `file`.
    pub fn apply_file(&mut self, file: WindingConfigFile) {
        self.title = file.title;
        self.headline = file.headline;
        self.slider = file.slider;
        self.features = file.features;
    }

    pub fn to_file(&self) -> WindingConfigFile {
        WindingConfigFile {
            title: self.title.clone(),
            headline: self.headline.clone(),
            slider: self.slider.clone(),
            features: self.features.clone(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// On-disk form
// ─────────────────────────────────────────────────────────────────────────────

/// The serializable part of [`WindingConfig`], stored as YAML.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindingConfigFile {
    pub title: String,
    pub headline: Option<String>,
    pub slider: PeriodSliderConfig,
    pub features: PlotFeatures,
}

impl Default for WindingConfigFile {
    fn default() -> Self {
        WindingConfig::default().to_file()
    }
}

impl WindingConfigFile {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let cfg: WindingConfigFile = serde_yaml::from_str(s)?;
        cfg.slider.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let s = std::fs::read_to_string(path.as_ref())?;
        let cfg = Self::from_yaml_str(&s)?;
        log::info!("loaded viewer config from {:?}", path.as_ref());
        Ok(cfg)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(dir) = path.as_ref().parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        std::fs::write(path.as_ref(), self.to_yaml_string()?)?;
        Ok(())
    }
}
