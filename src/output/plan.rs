use std::path::{Path, PathBuf};

/// Android launcher density buckets and their icon edge lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DensityBucket {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl DensityBucket {
    pub const ALL: [Self; 5] = [
        Self::Mdpi,
        Self::Hdpi,
        Self::Xhdpi,
        Self::Xxhdpi,
        Self::Xxxhdpi,
    ];

    pub fn size(self) -> u32 {
        match self {
            Self::Mdpi => 48,
            Self::Hdpi => 72,
            Self::Xhdpi => 96,
            Self::Xxhdpi => 144,
            Self::Xxxhdpi => 192,
        }
    }

    /// Resource folder name, e.g. `mipmap-xhdpi`.
    pub fn folder(self) -> &'static str {
        match self {
            Self::Mdpi => "mipmap-mdpi",
            Self::Hdpi => "mipmap-hdpi",
            Self::Xhdpi => "mipmap-xhdpi",
            Self::Xxhdpi => "mipmap-xxhdpi",
            Self::Xxxhdpi => "mipmap-xxxhdpi",
        }
    }
}

/// Square and round launcher slots. Both receive the same artwork.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconVariant {
    Square,
    Round,
}

impl IconVariant {
    pub const ALL: [Self; 2] = [Self::Square, Self::Round];

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Square => "ic_launcher.png",
            Self::Round => "ic_launcher_round.png",
        }
    }
}

/// One file to produce.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct IconTarget {
    pub size: u32,
    pub bucket: DensityBucket,
    pub variant: IconVariant,
    pub path: PathBuf,
}

/// Every icon file for an Android `res/` directory, in bucket order.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct OutputPlan {
    pub res_dir: PathBuf,
    pub targets: Vec<IconTarget>,
}

impl OutputPlan {
    /// Five buckets x two variants under `<res_dir>/<bucket folder>/`.
    pub fn android(res_dir: impl Into<PathBuf>) -> Self {
        let res_dir = res_dir.into();
        let targets = DensityBucket::ALL
            .into_iter()
            .flat_map(|bucket| {
                let dir = res_dir.join(bucket.folder());
                IconVariant::ALL.into_iter().map(move |variant| IconTarget {
                    size: bucket.size(),
                    bucket,
                    variant,
                    path: dir.join(variant.file_name()),
                })
            })
            .collect();
        Self { res_dir, targets }
    }

    pub fn res_dir(&self) -> &Path {
        &self.res_dir
    }

    /// Distinct sizes in first-seen order.
    pub fn sizes(&self) -> Vec<u32> {
        let mut out = Vec::new();
        for t in &self.targets {
            if !out.contains(&t.size) {
                out.push(t.size);
            }
        }
        out
    }

    pub fn targets_for_size(&self, size: u32) -> impl Iterator<Item = &IconTarget> {
        self.targets.iter().filter(move |t| t.size == size)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/output/plan.rs"]
mod tests;
