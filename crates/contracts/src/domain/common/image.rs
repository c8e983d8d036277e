use serde::{Deserialize, Serialize};

/// Image state of a form that uploads a picture alongside text fields.
///
/// The file itself never leaves the browser layer; forms only need to know
/// whether something will be shown after saving.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSelection {
    #[default]
    Empty,
    /// Server-relative path of the image already stored for the item
    Existing(String),
    /// A freshly picked file, identified by its name
    Picked(String),
}

impl ImageSelection {
    pub fn is_present(&self) -> bool {
        !matches!(self, ImageSelection::Empty)
    }
}

/// Join the asset host and the server-relative path stored on an item.
pub fn asset_url(assets_base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = assets_base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence() {
        assert!(!ImageSelection::Empty.is_present());
        assert!(ImageSelection::Existing("/uploads/a.png".into()).is_present());
        assert!(ImageSelection::Picked("a.png".into()).is_present());
    }

    #[test]
    fn test_asset_url() {
        assert_eq!(
            asset_url("http://localhost:3000/", "/uploads/a.png"),
            "http://localhost:3000/uploads/a.png"
        );
        assert_eq!(
            asset_url("http://localhost:3000", "uploads/a.png"),
            "http://localhost:3000/uploads/a.png"
        );
        assert_eq!(
            asset_url("http://localhost:3000", "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }
}
