use gpui::{Application, AssetSource, SharedString};
use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

pub(crate) const POWER_OFF_ICON: &str = "icons/power-off.svg";
pub(crate) const ARROW_LEFT_ICON: &str = "icons/arrow-left.svg";

const EMBEDDED: &[(&str, &[u8])] = &[
    (
        POWER_OFF_ICON,
        include_bytes!("../../assets/icons/power-off.svg"),
    ),
    (
        ARROW_LEFT_ICON,
        include_bytes!("../../assets/icons/arrow-left.svg"),
    ),
];

/// Serves icons from the workspace `assets/` directory, falling back to the
/// copies compiled into the binary.
#[derive(Clone)]
pub struct AuraAssets {
    root: PathBuf,
}

impl AuraAssets {
    pub fn new() -> Self {
        Self {
            root: Path::new(env!("CARGO_MANIFEST_DIR")).join("../assets"),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn embedded(path: &str) -> Option<&'static [u8]> {
        EMBEDDED
            .iter()
            .find(|(name, _)| *name == path)
            .map(|(_, bytes)| *bytes)
    }
}

impl Default for AuraAssets {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetSource for AuraAssets {
    fn load(&self, path: &str) -> gpui::Result<Option<Cow<'static, [u8]>>> {
        let resolved = self.resolve(path);
        match fs::read(&resolved) {
            Ok(bytes) => Ok(Some(Cow::Owned(bytes))),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::embedded(path).map(Cow::Borrowed))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn list(&self, path: &str) -> gpui::Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = EMBEDDED
            .iter()
            .filter(|(name, _)| name.starts_with(path))
            .map(|(name, _)| SharedString::from(*name))
            .collect();

        let resolved = self.resolve(path);
        let entries = match fs::read_dir(&resolved) {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(files),
            Err(err) => return Err(err.into()),
        };

        for entry in entries.flatten() {
            let path = entry.path();
            // Report disk entries relative to the root, as embedded names are.
            let relative = path.strip_prefix(&self.root).unwrap_or(&path);
            let name: SharedString = relative.to_string_lossy().into_owned().into();
            if !files.contains(&name) {
                files.push(name);
            }
        }
        Ok(files)
    }
}

pub fn application_with_assets() -> Application {
    Application::new().with_assets(AuraAssets::new())
}
