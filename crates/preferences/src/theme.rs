use crate::error::PreferenceError;
use crate::store::PreferenceStore;
use core_types::Theme;
use std::sync::Arc;

/// Key under which the theme is stored.
pub const THEME_KEY: &str = "theme";

pub type ThemeListener = Box<dyn Fn(Theme) + Send + Sync>;

/// Visibility of the sun and moon toggle icons for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeIcons {
    pub sun_visible: bool,
    pub moon_visible: bool,
}

impl ThemeIcons {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self { sun_visible: true, moon_visible: false },
            Theme::Dark => Self { sun_visible: false, moon_visible: true },
        }
    }
}

/// The single owner of the theme preference.
///
/// All reads and writes of the stored theme go through here, and every change
/// is pushed to the registered listeners (icon updaters and the like).
pub struct ThemeManager {
    store: Arc<dyn PreferenceStore>,
    current: Theme,
    listeners: Vec<ThemeListener>,
}

impl ThemeManager {
    /// Loads the stored theme, defaulting to light when nothing usable is stored.
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        let current = match store.get(THEME_KEY) {
            Ok(Some(raw)) => raw.parse::<Theme>().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring unrecognised stored theme.");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read the stored theme, using light.");
                Theme::default()
            }
        };

        Self {
            store,
            current,
            listeners: Vec::new(),
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Registers a listener and immediately calls it with the current theme,
    /// so freshly created icons start out in sync.
    pub fn subscribe(&mut self, listener: impl Fn(Theme) + Send + Sync + 'static) {
        listener(self.current);
        self.listeners.push(Box::new(listener));
    }

    /// Flips between light and dark and returns the new theme.
    pub fn toggle(&mut self) -> Result<Theme, PreferenceError> {
        let next = self.current.toggled();
        self.set(next)?;
        Ok(next)
    }

    /// Applies `theme`, notifies listeners and persists it.
    ///
    /// The theme stays applied for this session even if persisting fails; the
    /// error is still returned so the caller can report it.
    pub fn set(&mut self, theme: Theme) -> Result<(), PreferenceError> {
        self.current = theme;
        for listener in &self.listeners {
            listener(theme);
        }
        tracing::info!(%theme, "Theme changed.");
        self.store.set(THEME_KEY, theme.as_str())
    }
}

impl std::fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeManager")
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
