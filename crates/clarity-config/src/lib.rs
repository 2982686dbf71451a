//! Configuration loading and parsing.
//!
//! Parses `clarity.toml` (or an override path provided by the binary). Every
//! table and field is optional; missing values fall back to the view's
//! defaults. A file that fails to parse is logged and replaced by defaults so
//! a typo never prevents the view from starting. Unknown fields are ignored.
//!
//! ```toml
//! [text]
//! value = "Ab3!"
//! size = 12.0
//! [display]
//! density = 1.0
//! [colors]
//! default = "#000000"
//! digit = "#FF0000"
//! [padding]
//! left = 1
//! [classify]
//! lowercase = "legacy"
//! ```

use anyhow::Result;
use clarity_render::{
    CharClass, ClarityView, ClassColorMap, Classifier, Color, DEFAULT_TEXT_SIZE, LowercaseSet,
    Padding, TextMeasurer,
};
use serde::Deserialize;
use std::{fs, io::ErrorKind, path::PathBuf};
use tracing::{info, warn};

pub const FILE_NAME: &str = "clarity.toml";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TextConfig {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default = "TextConfig::default_size")]
    pub size: f32,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            value: None,
            size: Self::default_size(),
        }
    }
}

impl TextConfig {
    const fn default_size() -> f32 {
        DEFAULT_TEXT_SIZE
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "DisplayConfig::default_density")]
    pub density: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            density: Self::default_density(),
        }
    }
}

impl DisplayConfig {
    const fn default_density() -> f32 {
        1.0
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ColorsConfig {
    #[serde(default)]
    pub default: Option<Color>,
    #[serde(default)]
    pub symbol: Option<Color>,
    #[serde(default)]
    pub digit: Option<Color>,
    #[serde(default)]
    pub upper: Option<Color>,
    #[serde(default)]
    pub lower: Option<Color>,
}

impl ColorsConfig {
    pub fn get(&self, class: CharClass) -> Option<Color> {
        match class {
            CharClass::Symbol => self.symbol,
            CharClass::Digit => self.digit,
            CharClass::Upper => self.upper,
            CharClass::Lower => self.lower,
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
pub struct PaddingConfig {
    #[serde(default)]
    pub left: i32,
    #[serde(default)]
    pub top: i32,
    #[serde(default)]
    pub right: i32,
    #[serde(default)]
    pub bottom: i32,
}

impl From<PaddingConfig> for Padding {
    fn from(p: PaddingConfig) -> Self {
        Padding::new(p.left, p.top, p.right, p.bottom)
    }
}

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LowercaseConfig {
    #[default]
    Ascii,
    Legacy,
}

impl From<LowercaseConfig> for LowercaseSet {
    fn from(value: LowercaseConfig) -> Self {
        match value {
            LowercaseConfig::Ascii => LowercaseSet::Ascii,
            LowercaseConfig::Legacy => LowercaseSet::Legacy,
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClassifyConfig {
    #[serde(default)]
    pub lowercase: LowercaseConfig,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct ConfigFile {
    #[serde(default)]
    pub text: TextConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub colors: ColorsConfig,
    #[serde(default)]
    pub padding: PaddingConfig,
    #[serde(default)]
    pub classify: ClassifyConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub path: Option<PathBuf>,
    pub file: ConfigFile, // parsed (or default) data
}

/// Best-effort config path: `./clarity.toml`, then the platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from(FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("clarity").join(FILE_NAME);
    }
    local
}

/// Load `path`, or the discovered file when `None`. A discovered file that
/// does not exist is normal; an explicit path that cannot be read, or any
/// other read error, is logged as a warning. Both fall back to defaults.
pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let path = path.unwrap_or_else(discover);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(error) if explicit || error.kind() != ErrorKind::NotFound => {
            warn!(target: "config", path = %path.display(), %error, "config_unreadable");
            return Ok(Config::default());
        }
        Err(_) => {
            info!(target: "config", path = %path.display(), "config_defaults");
            return Ok(Config::default());
        }
    };
    match parse(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config {
                raw: Some(content),
                path: Some(path),
                file,
            })
        }
        Err(error) => {
            warn!(target: "config", path = %path.display(), %error, "config_parse_failed");
            Ok(Config::default())
        }
    }
}

/// Parse a config document without touching the filesystem.
pub fn parse(content: &str) -> Result<ConfigFile> {
    Ok(toml::from_str(content)?)
}

impl Config {
    pub fn default_color(&self) -> Color {
        self.file.colors.default.unwrap_or_default()
    }

    /// Per-class colors with unset classes resolved to the default color.
    pub fn class_colors(&self) -> ClassColorMap {
        let mut map = ClassColorMap::uniform(self.default_color());
        for class in CharClass::ALL {
            if let Some(color) = self.file.colors.get(class) {
                map.set(class, color);
            }
        }
        map
    }

    pub fn classifier(&self) -> Classifier {
        Classifier::new(self.file.classify.lowercase.into())
    }

    /// Push every configured value into `view`. Colors are applied in
    /// re-tag order before the text so the first tagging pass is final.
    pub fn apply<M: TextMeasurer>(&self, view: &mut ClarityView<M>) {
        view.set_classifier(self.classifier());
        let colors = self.class_colors();
        for class in CharClass::RETAG_ORDER {
            view.set_class_color(class, colors.get(class));
        }
        view.set_density(self.file.display.density);
        view.set_text_size(self.file.text.size);
        view.set_padding(self.file.padding.into());
        if let Some(text) = self.file.text.value.as_deref() {
            view.set_text(Some(text));
        }
    }
}
