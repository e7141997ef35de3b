//! Best score persistence
//!
//! Stored as a plain integer string in LocalStorage.

/// Best score with LocalStorage load/save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BestScore(pub u32);

/// Stored value, or 0 when missing or unreadable
pub fn parse_best_score(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

impl BestScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "snake-best";

    pub fn value(self) -> u32 {
        self.0
    }

    /// Load from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let raw = storage.and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten());
        let best = parse_best_score(raw.as_deref());
        log::info!("Loaded best score {}", best);
        Self(best)
    }

    /// Save to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if storage
                .set_item(Self::STORAGE_KEY, &self.0.to_string())
                .is_err()
            {
                log::warn!("Failed to save best score");
            } else {
                log::info!("Best score saved ({})", self.0);
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
