use serde::{Deserialize, Serialize};

/// Color scheme preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Display language for export labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

/// Line-break token mode for exports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineBreakMode {
    #[default]
    Lf,
    Crlf,
    Br,
    Marker,
}

/// Replacement marker used when `LineBreakMode::Marker` is selected
pub const DEFAULT_MARKER: &str = "[[MARKMD-BR]]";

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

/// Persisted user preferences.
///
/// The core codecs and formatters never read these directly; handlers
/// resolve them into explicit options at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub line_break: LineBreakMode,
    #[serde(default = "default_marker")]
    pub marker: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            theme: Theme::System,
            locale: Locale::Ja,
            line_break: LineBreakMode::Lf,
            marker: default_marker(),
        }
    }
}

type Listener = Box<dyn Fn(&Preferences)>;

/// Preference holder with change notification.
///
/// Presentation code subscribes and re-reads on change; there is no
/// ambient global. Single-threaded; listeners run on the caller's stack.
pub struct PrefsStore {
    prefs: Preferences,
    listeners: Vec<Listener>,
}

impl PrefsStore {
    pub fn new(prefs: Preferences) -> Self {
        PrefsStore {
            prefs,
            listeners: Vec::new(),
        }
    }

    pub fn current(&self) -> &Preferences {
        &self.prefs
    }

    /// Register a change listener. Listeners run synchronously on update.
    pub fn subscribe(&mut self, listener: impl Fn(&Preferences) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Apply a mutation and notify all listeners with the new value.
    pub fn update(&mut self, apply: impl FnOnce(&mut Preferences)) {
        apply(&mut self.prefs);
        for listener in &self.listeners {
            listener(&self.prefs);
        }
    }
}
