//! Blog editor on its own route: `/blogs/add` creates, `/blogs/add/:id`
//! loads the blog first and updates it.

use std::rc::Rc;

use contracts::domain::a003_blog::aggregate::Blog;
use contracts::domain::a003_blog::form::BlogForm;
use contracts::domain::common::ImageSelection;
use contracts::shared::forms::{FieldErrors, FormMode};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

use crate::domain::a003_blog::{can_save, route_mode, BlogDraft};
use crate::shared::components::form_field::FormField;
use crate::shared::components::image_picker::{picked_file, ImagePicker};
use crate::shared::components::ui::textarea::Textarea;
use crate::shared::crud::client::FALLBACK_MESSAGE;
use crate::shared::crud::coordinator::submit;
use crate::shared::crud::notify::Notifier;
use crate::shared::crud::{HttpResourceClient, ResourceClient, SaveOutcome};
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::auth::context::use_auth;

#[component]
pub fn BlogDetails() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let notifier = use_notifications();
    let (auth_state, _) = use_auth();
    let client: Rc<dyn ResourceClient<Blog>> = Rc::new(HttpResourceClient::<Blog>::from_config(
        auth_state.get_untracked().credential(),
    ));
    let client = StoredValue::new_local(client);

    let mode = RwSignal::new(FormMode::Create);
    let title = RwSignal::new(String::new());
    let short_description = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let image = RwSignal::new(ImageSelection::Empty);
    let file = picked_file();
    let errors = RwSignal::new(FieldErrors::new());
    let loading = RwSignal::new(false);
    let load_failed = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let fill = move |form: BlogForm| {
        mode.set(form.mode);
        title.set(form.title);
        short_description.set(form.short_description);
        content.set(form.content);
        image.set(form.image);
    };

    // Load the blog named by the route, if any.
    Effect::new(move |_| {
        let route = route_mode(params.with(|p| p.get("id")));
        let id = route.edit_id().map(str::to_string);
        // Edit before the fetch so a failed load can never save as a new blog
        mode.set(route);
        load_failed.set(false);
        let Some(id) = id else {
            return;
        };
        loading.set(true);
        let client = client.get_value();
        spawn_local(async move {
            match client.get(&id).await {
                Ok(blog) => fill(BlogForm::edit(&blog)),
                Err(e) => {
                    log::error!("Failed to load blog {}: {}", id, e);
                    let _ = load_failed.try_set(true);
                    notifier.request_failed(&e, FALLBACK_MESSAGE);
                }
            }
            let _ = loading.try_set(false);
        });
    });

    let navigate = StoredValue::new_local(navigate);
    let on_submit = move || {
        if !can_save(
            loading.get_untracked(),
            load_failed.get_untracked(),
            busy.get_untracked(),
        ) {
            return;
        }
        let draft = BlogDraft {
            form: BlogForm {
                mode: mode.get_untracked(),
                title: title.get_untracked(),
                short_description: short_description.get_untracked(),
                content: content.get_untracked(),
                image: image.get_untracked(),
            },
            file: file.get_untracked(),
        };
        busy.set(true);
        let client = client.get_value();
        spawn_local(async move {
            let outcome = submit(&*client, &draft, &notifier, "Blog").await;
            let _ = busy.try_set(false);
            match outcome {
                SaveOutcome::Invalid(invalid) => errors.set(invalid),
                SaveOutcome::Saved(_) => navigate.with_value(|go| go("/blogs", Default::default())),
                SaveOutcome::Failed(_) => {}
            }
        });
    };

    let error_of = move |field: &'static str| {
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    };
    let heading = move || {
        if mode.with(FormMode::is_edit) {
            "Edit Blog"
        } else {
            "Add Blog"
        }
    };

    view! {
        <PageFrame page_id="a003_blog--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{heading}</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| navigate.with_value(|go| go("/blogs", Default::default()))
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_submit()
                        disabled=Signal::derive(move || {
                            !can_save(loading.get(), load_failed.get(), busy.get())
                        })
                    >
                        {move || if busy.get() { "Saving..." } else { "Save Blog" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Show when=move || load_failed.get()>
                    <p class="form__error">"This blog could not be loaded. Go back and try again."</p>
                </Show>
                <Show when=move || !loading.get() && !load_failed.get() fallback=move || loading.get().then(|| view! { <Spinner /> })>
                    <form class="form" on:submit=move |ev| {
                        ev.prevent_default();
                        on_submit();
                    }>
                        <FormField label="Title" error=error_of("title") required=true>
                            <Input value=title placeholder="Blog title" />
                        </FormField>
                        <FormField label="Short description" error=error_of("shortDescription") required=true>
                            <Textarea value=short_description placeholder="A sentence or two" rows=3 />
                        </FormField>
                        <FormField label="Cover image" error=error_of("image") required=true>
                            <ImagePicker selection=image file=file disabled=busy />
                        </FormField>
                        <FormField label="Content" error=error_of("content") required=true>
                            <Textarea value=content placeholder="HTML content" rows=14 />
                        </FormField>
                        <div class="form__preview">
                            <div class="form__label">"Preview"</div>
                            <div class="blog-preview" inner_html=move || content.get()></div>
                        </div>
                    </form>
                </Show>
            </div>
        </PageFrame>
    }
}
