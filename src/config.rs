//! Optional JSON configuration for the icon generator.
//!
//! ```json
//! {
//!   "res_dir": "app/src/main/res",
//!   "fonts": {
//!     "ai_badge": ["/usr/share/fonts/TTF/DejaVuSans.ttf"],
//!     "free_label": ["/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc"]
//!   }
//! }
//! ```
//!
//! Missing keys keep the built-in defaults.

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use crate::{
    foundation::error::{IconError, IconResult},
    text::fonts::{FontChain, FontSet},
};

pub const DEFAULT_RES_DIR: &str = "app/src/main/res";

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconSetConfig {
    pub res_dir: PathBuf,
    pub fonts: FontSet,
}

impl Default for IconSetConfig {
    fn default() -> Self {
        Self {
            res_dir: PathBuf::from(DEFAULT_RES_DIR),
            fonts: FontSet::default(),
        }
    }
}

impl IconSetConfig {
    pub fn from_path(path: &Path) -> IconResult<Self> {
        let f = File::open(path).map_err(|e| IconError::io(path, e))?;
        serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            IconError::validation(format!("invalid config '{}': {e}", path.display()))
        })
    }

    /// Command-line overrides win over file values. Empty override lists leave a slot alone.
    pub fn with_overrides(
        mut self,
        res_dir: Option<PathBuf>,
        ai_fonts: Vec<PathBuf>,
        label_fonts: Vec<PathBuf>,
    ) -> Self {
        if let Some(dir) = res_dir {
            self.res_dir = dir;
        }
        if !ai_fonts.is_empty() {
            self.fonts.ai_badge = FontChain::new(ai_fonts);
        }
        if !label_fonts.is_empty() {
            self.fonts.free_label = FontChain::new(label_fonts);
        }
        self
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
