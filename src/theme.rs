use std::sync::Mutex;

use thiserror::Error;

pub const THEME_STORAGE_KEY: &str = "isDark";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub shadow_color: &'static str,
    pub gradient: &'static str,
    pub background_gradient: &'static str,
}

pub const DARK: Palette = Palette {
    primary: "#3b82f6",
    secondary: "#10b981",
    background: "#0f172a",
    surface: "#1e293b",
    text: "#f8fafc",
    text_secondary: "#cbd5e1",
    border: "#334155",
    shadow_color: "rgba(0, 0, 0, 0.3)",
    gradient: "linear-gradient(135deg, #3b82f6 0%, #10b981 100%)",
    background_gradient: "radial-gradient(circle at top right, rgba(59, 130, 246, 0.1) 0%, rgba(16, 185, 129, 0.1) 100%)",
};

pub const LIGHT: Palette = Palette {
    primary: "#2563eb",
    secondary: "#10b981",
    background: "#f8fafc",
    surface: "#ffffff",
    text: "#1f2937",
    text_secondary: "#4b5563",
    border: "#e5e7eb",
    shadow_color: "rgba(0, 0, 0, 0.1)",
    gradient: "linear-gradient(135deg, #2563eb 0%, #10b981 100%)",
    background_gradient: "radial-gradient(circle at top right, rgba(37, 99, 235, 0.05) 0%, rgba(16, 185, 129, 0.05) 100%)",
};

impl Palette {
    pub fn css_vars(&self) -> String {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("background", self.background),
            ("surface", self.surface),
            ("text", self.text),
            ("text-secondary", self.text_secondary),
            ("border", self.border),
            ("shadow", self.shadow_color),
            ("gradient", self.gradient),
            ("background-gradient", self.background_gradient),
        ]
        .iter()
        .map(|(name, value)| format!("--color-{name}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Dark => &DARK,
            Self::Light => &LIGHT,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn as_flag(self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }

    /// A missing flag means dark; any stored value other than `"true"` means light.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            None | Some("true") => Self::Dark,
            Some("false") => Self::Light,
            Some(other) => {
                log::warn!("unrecognised theme flag {other:?}, using light");
                Self::Light
            }
        }
    }

    pub fn scheme(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
}

pub trait ThemeStorage {
    fn read_flag(&self) -> Result<Option<String>, StorageError>;
    fn write_flag(&self, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    value: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn with_flag(value: &str) -> Self {
        Self {
            value: Mutex::new(Some(value.to_string())),
        }
    }

    pub fn flag(&self) -> Option<String> {
        self.value.lock().ok().and_then(|v| v.clone())
    }
}

impl ThemeStorage for MemoryStorage {
    fn read_flag(&self) -> Result<Option<String>, StorageError> {
        self.value
            .lock()
            .map(|v| v.clone())
            .map_err(|e| StorageError::Access(e.to_string()))
    }

    fn write_flag(&self, value: &str) -> Result<(), StorageError> {
        let mut slot = self
            .value
            .lock()
            .map_err(|e| StorageError::Access(e.to_string()))?;
        *slot = Some(value.to_string());
        Ok(())
    }
}

impl<S: ThemeStorage> ThemeStorage for &S {
    fn read_flag(&self) -> Result<Option<String>, StorageError> {
        (**self).read_flag()
    }

    fn write_flag(&self, value: &str) -> Result<(), StorageError> {
        (**self).write_flag(value)
    }
}

#[derive(Debug)]
pub struct ThemeStore<S> {
    storage: S,
    mode: ThemeMode,
}

impl<S: ThemeStorage> ThemeStore<S> {
    pub fn load(storage: S) -> Self {
        let mode = match storage.read_flag() {
            Ok(flag) => ThemeMode::from_flag(flag.as_deref()),
            Err(err) => {
                log::debug!("theme flag unreadable, using default: {err}");
                ThemeMode::default()
            }
        };
        Self { storage, mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    pub fn palette(&self) -> &'static Palette {
        self.mode.palette()
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        if let Err(err) = self.storage.write_flag(self.mode.as_flag()) {
            log::debug!("theme flag not persisted: {err}");
        }
        self.mode
    }
}
