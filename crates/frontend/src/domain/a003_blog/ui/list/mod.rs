use contracts::domain::a003_blog::aggregate::Blog;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::domain::a003_blog::excerpt;
use crate::shared::api_utils::image_url;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::crud_list::{row_number, CrudListStatus, CrudPagination};
use crate::shared::crud::CrudHandle;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

const DESCRIPTION_PREVIEW: usize = 80;

#[component]
pub fn BlogList() -> impl IntoView {
    let handle = CrudHandle::new::<Blog>();
    let state = handle.state;
    let deleting = RwSignal::new(None::<Blog>);
    let navigate = use_navigate();

    handle.refresh();

    let confirm_delete = move || {
        if let Some(blog) = deleting.get_untracked() {
            handle.delete(blog.id.clone(), move || deleting.set(None));
        }
    };

    let open_editor = move |id: Option<String>| match id {
        Some(id) => navigate(&format!("/blogs/add/{}", id), Default::default()),
        None => navigate("/blogs/add", Default::default()),
    };
    let open_editor = StoredValue::new_local(open_editor);

    let rows = move || {
        state.with(|s| {
            s.items
                .iter()
                .enumerate()
                .map(|(index, blog)| {
                    let number = row_number(s.current_page, s.page_size, index);
                    let edit_id = blog.id.clone();
                    let for_delete = blog.clone();
                    let thumb = (!blog.image.is_empty()).then(|| (image_url(&blog.image), blog.title.clone()));
                    let title = blog.title.clone();
                    let description = excerpt(&blog.short_description, DESCRIPTION_PREVIEW);
                    let created_at = format_date(blog.created_at.as_ref());
                    view! {
                        <TableRow>
                            <TableCell><TableCellLayout>{number}</TableCellLayout></TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    {thumb.map(|(src, alt)| view! {
                                        <img class="table__thumb" src=src alt=alt />
                                    })}
                                </TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout truncate=true>
                                    <span style="font-weight: 500;">{title}</span>
                                </TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout truncate=true>
                                    {description}
                                </TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>{created_at}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <Flex gap=FlexGap::Small>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| open_editor.with_value(|open| open(Some(edit_id.clone())))
                                    >
                                        {icon("edit")}
                                    </Button>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| deleting.set(Some(for_delete.clone()))
                                    >
                                        {icon("delete")}
                                    </Button>
                                </Flex>
                            </TableCell>
                        </TableRow>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <PageFrame page_id="a003_blog--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Blogs"</h1>
                    <Badge>{move || state.with(|s| s.total_items.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| open_editor.with_value(|open| open(None))
                    >
                        {icon("plus")}
                        " Add Blog"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| handle.refresh()
                        disabled=Signal::derive(move || state.with(|s| s.is_loading))
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=50.0>"#"</TableHeaderCell>
                                <TableHeaderCell min_width=70.0>"Image"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"Title"</TableHeaderCell>
                                <TableHeaderCell min_width=280.0>"Short description"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Created"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>{rows}</TableBody>
                    </Table>
                    <CrudListStatus handle=handle empty_text="No blogs found" />
                </div>
                <CrudPagination handle=handle />
            </div>

            {move || deleting.get().map(|blog| view! {
                <ConfirmDialog
                    title="Delete Blog"
                    message=format!("Are you sure you want to delete \"{}\"?", blog.title)
                    busy=handle.busy
                    on_confirm=Callback::new(move |_| confirm_delete())
                    on_cancel=Callback::new(move |_| deleting.set(None))
                />
            })}
        </PageFrame>
    }
}
