use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

/// Logical font slot. Each slot resolves independently through its own candidate chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSlot {
    /// Latin text on the orange badge.
    AiBadge,
    /// CJK text on the green label.
    FreeLabel,
}

impl FontSlot {
    pub const ALL: [Self; 2] = [Self::AiBadge, Self::FreeLabel];

    pub fn name(self) -> &'static str {
        match self {
            Self::AiBadge => "ai_badge",
            Self::FreeLabel => "free_label",
        }
    }
}

/// Where a resolved font came from.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSource {
    File(PathBuf),
    /// Generic `sans-serif` from the host font collection. Always available, may lack
    /// CJK coverage.
    SystemDefault,
}

impl std::fmt::Display for FontSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(p) => write!(f, "{}", p.display()),
            Self::SystemDefault => f.write_str("<system sans-serif>"),
        }
    }
}

/// Ordered list of font files to try. The system default closes every chain.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct FontChain {
    candidates: Vec<PathBuf>,
}

impl FontChain {
    pub fn new(candidates: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    /// Chain that goes straight to the system default.
    pub fn system_default() -> Self {
        Self::default()
    }

    pub fn ai_badge_default() -> Self {
        Self::new(["/System/Library/Fonts/Helvetica.ttc"])
    }

    pub fn free_label_default() -> Self {
        Self::new([
            "/System/Library/Fonts/PingFang.ttc",
            "/System/Library/Fonts/STHeiti Light.ttc",
        ])
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Read every readable candidate, preserving order. Unreadable files are skipped.
    pub fn load(&self) -> LoadedFontChain {
        let faces = self
            .candidates
            .iter()
            .filter_map(|path| match std::fs::read(path) {
                Ok(bytes) => Some(LoadedFontFile {
                    path: path.clone(),
                    bytes: Arc::new(bytes),
                }),
                Err(e) => {
                    tracing::debug!(
                        path = %path.display(),
                        error = %e,
                        "font candidate unreadable"
                    );
                    None
                }
            })
            .collect();
        LoadedFontChain { faces }
    }
}

/// Candidate chains for both slots.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FontSet {
    pub ai_badge: FontChain,
    pub free_label: FontChain,
}

impl Default for FontSet {
    fn default() -> Self {
        Self {
            ai_badge: FontChain::ai_badge_default(),
            free_label: FontChain::free_label_default(),
        }
    }
}

impl FontSet {
    /// Both slots resolve straight to the system default.
    pub fn system_only() -> Self {
        Self {
            ai_badge: FontChain::system_default(),
            free_label: FontChain::system_default(),
        }
    }

    pub fn chain(&self, slot: FontSlot) -> &FontChain {
        match slot {
            FontSlot::AiBadge => &self.ai_badge,
            FontSlot::FreeLabel => &self.free_label,
        }
    }

    pub fn load(&self) -> LoadedFontSet {
        LoadedFontSet {
            ai_badge: self.ai_badge.load(),
            free_label: self.free_label.load(),
        }
    }
}

#[derive(Clone)]
pub struct LoadedFontFile {
    pub path: PathBuf,
    pub bytes: Arc<Vec<u8>>,
}

impl std::fmt::Debug for LoadedFontFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedFontFile")
            .field("path", &self.path)
            .field("bytes_len", &self.bytes.len())
            .finish()
    }
}

/// Font file bytes read up front so rendering does no file IO.
#[derive(Clone, Debug, Default)]
pub struct LoadedFontChain {
    pub faces: Vec<LoadedFontFile>,
}

impl LoadedFontChain {
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.faces.iter().map(|f| f.path.as_path())
    }
}

#[derive(Clone, Debug, Default)]
pub struct LoadedFontSet {
    pub ai_badge: LoadedFontChain,
    pub free_label: LoadedFontChain,
}

impl LoadedFontSet {
    pub fn chain(&self, slot: FontSlot) -> &LoadedFontChain {
        match slot {
            FontSlot::AiBadge => &self.ai_badge,
            FontSlot::FreeLabel => &self.free_label,
        }
    }
}

/// Outcome of walking a chain: the face that will shape text for a slot.
#[derive(Clone, Debug)]
pub struct ResolvedFont {
    pub source: FontSource,
    /// Family name (or CSS generic) handed to the shaper.
    pub family: String,
    /// Backing bytes for file fonts; `None` for the system default.
    pub bytes: Option<Arc<Vec<u8>>>,
}

impl ResolvedFont {
    pub fn system_default() -> Self {
        Self {
            source: FontSource::SystemDefault,
            family: "sans-serif".to_string(),
            bytes: None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == FontSource::SystemDefault
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/fonts.rs"]
mod tests;
