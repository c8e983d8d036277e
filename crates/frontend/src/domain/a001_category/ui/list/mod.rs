use contracts::domain::a001_category::aggregate::Category;
use leptos::prelude::*;

use crate::domain::common::named_list_view;

#[component]
pub fn CategoryList() -> impl IntoView {
    named_list_view::<Category>()
}
