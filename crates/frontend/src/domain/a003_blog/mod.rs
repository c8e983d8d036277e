pub mod ui;

use contracts::domain::a003_blog::form::BlogForm;
use contracts::shared::forms::{FieldErrors, FormMode, Validate};

use crate::shared::crud::{ApiError, MultipartBody, MutationForm, RequestBody};

/// Blog form plus the cover file picked for it, if any.
pub struct BlogDraft {
    pub form: BlogForm,
    pub file: Option<web_sys::File>,
}

impl Validate for BlogDraft {
    fn validate(&self) -> FieldErrors {
        self.form.validate()
    }
}

impl MutationForm for BlogDraft {
    fn edit_id(&self) -> Option<&str> {
        self.form.mode.edit_id()
    }

    fn body(&self) -> Result<RequestBody, ApiError> {
        Ok(RequestBody::Multipart(MultipartBody {
            fields: self.form.multipart_fields(),
            file: self.file.clone().map(|file| ("image", file)),
        }))
    }
}

/// Mode the editor opens in for the `:id` route segment.
pub fn route_mode(id: Option<String>) -> FormMode {
    match id.filter(|id| !id.is_empty()) {
        Some(id) => FormMode::Edit { id },
        None => FormMode::Create,
    }
}

/// An editor whose blog failed to load has nothing valid to save.
pub fn can_save(loading: bool, load_failed: bool, busy: bool) -> bool {
    !(loading || load_failed || busy)
}

/// First `max` characters of `text` with an ellipsis when cut.
pub fn excerpt(text: &str, max: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max).collect();
    if chars.next().is_some() {
        format!("{}...", head.trim_end())
    } else {
        head
    }
}
