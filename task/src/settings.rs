use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::{AllocationCatalog, AllocationItem};
use crate::error::{Result, TaskError};
use crate::fonts::{Font, TaskFonts};

const MIN_SCALE: u32 = 1;
const MAX_SCALE: u32 = 12;
const MIN_SCREEN_W: u32 = 320;
const MIN_SCREEN_H: u32 = 240;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScreenSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FontSettings {
    pub title_scale: u32,
    pub text_scale: u32,
    pub input_scale: u32,
}

impl Default for FontSettings {
    fn default() -> Self {
        let fonts = TaskFonts::default();
        Self {
            title_scale: fonts.title.scale,
            text_scale: fonts.text.scale,
            input_scale: fonts.input.scale,
        }
    }
}

impl FontSettings {
    pub fn clamp(self) -> Self {
        Self {
            title_scale: self.title_scale.clamp(MIN_SCALE, MAX_SCALE),
            text_scale: self.text_scale.clamp(MIN_SCALE, MAX_SCALE),
            input_scale: self.input_scale.clamp(MIN_SCALE, MAX_SCALE),
        }
    }

    pub fn fonts(self) -> TaskFonts {
        TaskFonts {
            title: Font::new(self.title_scale),
            text: Font::new(self.text_scale),
            input: Font::new(self.input_scale),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskSettings {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub screen: ScreenSettings,
    #[serde(default)]
    pub fonts: FontSettings,
    #[serde(default = "default_start_round")]
    pub start_round: u32,
    /// Replaces the built-in item list when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Vec<AllocationItem>>,
    /// JSON-lines file that confirmed allocations are appended to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results_path: Option<PathBuf>,
}

impl Default for TaskSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            screen: ScreenSettings::default(),
            fonts: FontSettings::default(),
            start_round: default_start_round(),
            catalog: None,
            results_path: None,
        }
    }
}

impl TaskSettings {
    pub fn sanitized(mut self) -> Self {
        self.version = default_version();
        self.fonts = self.fonts.clamp();
        self.screen.width = self.screen.width.max(MIN_SCREEN_W);
        self.screen.height = self.screen.height.max(MIN_SCREEN_H);
        self.start_round = self.start_round.max(1);
        self
    }

    pub fn catalog(&self) -> Result<AllocationCatalog> {
        match &self.catalog {
            Some(items) => AllocationCatalog::new(items.clone()),
            None => Ok(AllocationCatalog::default()),
        }
    }
}

fn default_version() -> u32 {
    1
}

fn default_start_round() -> u32 {
    1
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_env() -> Self {
        if let Some(explicit) = std::env::var_os("ALLOCATION_TASK_SETTINGS") {
            return Self::at(explicit);
        }

        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
            .unwrap_or_else(|| PathBuf::from("."));

        Self::at(base.join("allocation-task").join("settings.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the settings file. A missing file yields defaults.
    pub fn load(&self) -> Result<TaskSettings> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(TaskSettings::default());
            }
            Err(source) => {
                return Err(TaskError::SettingsIo {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_slice::<TaskSettings>(&bytes)
            .map(TaskSettings::sanitized)
            .map_err(|source| TaskError::SettingsJson {
                path: self.path.clone(),
                source,
            })
    }

    pub fn save(&self, settings: &TaskSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}
