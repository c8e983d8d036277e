use serde::de::DeserializeOwned;

/// Anything that carries the backend's opaque `_id`.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// REST paths of one resource, relative to the API base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    /// `GET` target for a page of items
    pub list: &'static str,
    /// `POST` target; `None` for read-only resources
    pub create: Option<&'static str>,
    /// Prefix for `GET`/`PUT`/`DELETE` of a single item (`{item}/{id}`)
    pub item: Option<&'static str>,
}

impl Endpoints {
    /// A resource where every operation lives under the same path.
    pub const fn crud(path: &'static str) -> Self {
        Self {
            list: path,
            create: Some(path),
            item: Some(path),
        }
    }

    /// A resource that can only be listed.
    pub const fn read_only(list: &'static str) -> Self {
        Self {
            list,
            create: None,
            item: None,
        }
    }
}

/// Binds an item type to its place in the backend API.
pub trait Resource: 'static {
    type Item: Identifiable + DeserializeOwned + Clone + Send + Sync + 'static;

    const ENDPOINTS: Endpoints;

    /// Human name used in notifications ("Category saved").
    const SINGULAR: &'static str;
}

/// Reference fields arrive either as a bare id or as a populated document.
pub fn deserialize_ref<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Ref {
        Id(String),
        Document {
            #[serde(rename = "_id")]
            id: String,
        },
    }

    Ok(match Option::<Ref>::deserialize(deserializer)? {
        Some(Ref::Id(id)) | Some(Ref::Document { id }) => id,
        None => String::new(),
    })
}
