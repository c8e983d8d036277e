use contracts::domain::a002_language::aggregate::Language;
use leptos::prelude::*;

use crate::domain::common::named_list_view;

#[component]
pub fn LanguageList() -> impl IntoView {
    named_list_view::<Language>()
}
