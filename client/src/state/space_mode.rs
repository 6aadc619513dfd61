//! Couple/personal space mode, persisted to local storage.
//!
//! DESIGN
//! ======
//! Mutators write storage first and memory second. A failed write is logged
//! and the in-memory value still moves, so the UI never lags the user's
//! choice; the next successful write brings storage back in line.
//!
//! TRADE-OFFS
//! ==========
//! Storage is read once when the store is built. Another tab changing the
//! value is not observed until the next load.

#[cfg(test)]
#[path = "space_mode_test.rs"]
mod space_mode_test;

use std::fmt;
use std::str::FromStr;

use crate::config::SPACE_MODE_KEY;
use crate::error::InvalidMode;
use crate::util::storage::KeyValueStore;

/// Which space the UI presents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpaceMode {
    #[default]
    Couple,
    Personal,
}

impl SpaceMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Couple => "couple",
            Self::Personal => "personal",
        }
    }

    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Couple => Self::Personal,
            Self::Personal => Self::Couple,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Couple => "Our space",
            Self::Personal => "My space",
        }
    }
}

impl fmt::Display for SpaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpaceMode {
    type Err = InvalidMode;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "couple" => Ok(Self::Couple),
            "personal" => Ok(Self::Personal),
            other => Err(InvalidMode(other.to_owned())),
        }
    }
}

/// Current space mode plus the storage it is mirrored to.
#[derive(Clone, Debug)]
pub struct SpaceModeStore<S> {
    mode: SpaceMode,
    storage: S,
}

impl<S: KeyValueStore> SpaceModeStore<S> {
    /// Build from whatever `storage` holds; `Couple` when it holds nothing
    /// usable or cannot be read.
    pub fn load(storage: S) -> Self {
        let mode = read_persisted(&storage);
        Self { mode, storage }
    }

    pub fn mode(&self) -> SpaceMode {
        self.mode
    }

    /// Re-read storage, as a fresh mount would.
    pub fn reload(&mut self) {
        self.mode = read_persisted(&self.storage);
    }

    /// Flip to the other mode and return it.
    pub fn toggle(&mut self) -> SpaceMode {
        let next = self.mode.toggled();
        self.set(next);
        next
    }

    pub fn set(&mut self, mode: SpaceMode) {
        if let Err(e) = self.storage.set(SPACE_MODE_KEY, mode.as_str()) {
            leptos::logging::warn!("space mode not persisted: {e}");
        }
        self.mode = mode;
    }

    /// Set from an untyped value such as a form field.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMode`] for anything but `"couple"` or `"personal"`;
    /// the store is left untouched.
    pub fn set_from_str(&mut self, raw: &str) -> Result<SpaceMode, InvalidMode> {
        let mode = raw.parse::<SpaceMode>()?;
        self.set(mode);
        Ok(mode)
    }
}

fn read_persisted<S: KeyValueStore>(storage: &S) -> SpaceMode {
    match storage.get(SPACE_MODE_KEY) {
        Ok(Some(raw)) => raw.parse().unwrap_or_else(|e: InvalidMode| {
            leptos::logging::warn!("ignoring persisted {e}");
            SpaceMode::default()
        }),
        Ok(None) | Err(_) => SpaceMode::default(),
    }
}
