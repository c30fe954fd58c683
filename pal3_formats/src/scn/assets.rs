use serde::Serialize;

use super::SceneInfo;
use super::object::ObjectRecord;

/// Separator used inside packed (CPK) archive paths.
pub const ARCHIVE_SEPARATOR: char = '\\';
pub const ARCHIVE_EXTENSION: &str = ".cpk";
/// Archive holding shared item and object models.
pub const BASE_DATA_ARCHIVE: &str = "basedata.cpk";

/// Where an object's model comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum ModelAsset {
    /// Nothing to load (unnamed object).
    None,
    /// Special visual effect named by a leading `+`; no model file.
    Effect,
    Path(String),
}

impl ModelAsset {
    pub fn path(&self) -> Option<&str> {
        match self {
            ModelAsset::Path(path) => Some(path),
            _ => None,
        }
    }

    pub fn kind(&self) -> ModelKind {
        self.path().map(ModelKind::from_path).unwrap_or(ModelKind::Other)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModelKind {
    Pol,
    Cvd,
    Other,
}

impl ModelKind {
    pub fn from_path(path: &str) -> Self {
        let file_name = path.rsplit(['\\', '/']).next().unwrap_or(path);
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("pol") => ModelKind::Pol,
            Some("cvd") => ModelKind::Cvd,
            _ => ModelKind::Other,
        }
    }
}

impl ObjectRecord {
    /// Resolve the archive path of this object's model.
    ///
    /// `_name` is scene-local (`<city>.cpk\<model>\_name`), a bare name without
    /// an extension is an item model, anything else lives in the shared object
    /// folder.
    pub fn model_asset(&self, scene: &SceneInfo) -> ModelAsset {
        let name = self.name.as_str();
        let sep = ARCHIVE_SEPARATOR;
        if name.is_empty() {
            ModelAsset::None
        } else if name.starts_with('_') {
            ModelAsset::Path(format!(
                "{city}{ARCHIVE_EXTENSION}{sep}{model}{sep}{name}",
                city = scene.city_name,
                model = scene.model,
            ))
        } else if name.starts_with('+') {
            ModelAsset::Effect
        } else if !name.contains('.') {
            ModelAsset::Path(format!(
                "{BASE_DATA_ARCHIVE}{sep}item{sep}{name}{sep}{name}.pol"
            ))
        } else {
            ModelAsset::Path(format!("{BASE_DATA_ARCHIVE}{sep}object{sep}{name}"))
        }
    }
}
