use std::path::PathBuf;

use crate::{
    foundation::error::{IconError, IconResult},
    output::plan::IconTarget,
    render::icon::RenderedIcon,
};

/// Destination for rendered icons.
pub trait IconSink: Send {
    fn write_icon(&mut self, target: &IconTarget, icon: &RenderedIcon) -> IconResult<()>;
}

/// Writes each icon as a PNG at `target.path`, creating parent directories.
#[derive(Debug, Default)]
pub struct PngFileSink {
    written: Vec<PathBuf>,
}

impl PngFileSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl IconSink for PngFileSink {
    fn write_icon(&mut self, target: &IconTarget, icon: &RenderedIcon) -> IconResult<()> {
        if let Some(parent) = target.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| IconError::io(parent, e))?;
        }

        let png = icon.encode_png()?;
        std::fs::write(&target.path, png).map_err(|e| IconError::io(&target.path, e))?;

        tracing::info!(path = %target.path.display(), size = target.size, "created icon");
        self.written.push(target.path.clone());
        Ok(())
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    icons: Vec<(IconTarget, RenderedIcon)>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn icons(&self) -> &[(IconTarget, RenderedIcon)] {
        &self.icons
    }
}

impl IconSink for InMemorySink {
    fn write_icon(&mut self, target: &IconTarget, icon: &RenderedIcon) -> IconResult<()> {
        self.icons.push((target.clone(), icon.clone()));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/output/sink.rs"]
mod tests;
