//! Paginated list with an add/edit dialog for resources that are just a
//! name (categories, languages).

use std::sync::Arc;

use contracts::domain::common::{Identifiable, Resource};
use contracts::shared::forms::{FieldErrors, FormMode};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::crud_list::{row_number, CrudListStatus, CrudPagination};
use crate::shared::components::form_field::FormField;
use crate::shared::components::modal::Modal;
use crate::shared::crud::{CrudHandle, MutationForm};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

pub trait NamedResource:
    Resource<Item = Self> + Identifiable + Clone + Send + Sync + 'static
{
    type Form: MutationForm + 'static;

    const PAGE_ID: &'static str;
    const TITLE: &'static str;
    const EMPTY_TEXT: &'static str;
    /// Header of an extra read-only column
    const SECONDARY_COLUMN: Option<&'static str> = None;

    fn name(&self) -> &str;

    fn secondary(&self) -> String {
        String::new()
    }

    fn form(mode: FormMode, name: String) -> Self::Form;
}

pub fn named_list_view<R: NamedResource>() -> impl IntoView {
    let handle = CrudHandle::new::<R>();
    let state = handle.state;
    let editing = RwSignal::new(None::<FormMode>);
    let name = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let deleting = RwSignal::new(None::<R>);

    handle.refresh();

    let open_editor = move |mode: FormMode, initial: String| {
        name.set(initial);
        errors.set(FieldErrors::new());
        editing.set(Some(mode));
    };
    let close_editor = move || {
        editing.set(None);
        errors.set(FieldErrors::new());
    };
    let submit = move || {
        let Some(mode) = editing.get_untracked() else {
            return;
        };
        handle.save(
            R::form(mode, name.get_untracked()),
            move || {
                editing.set(None);
                name.set(String::new());
                errors.set(FieldErrors::new());
            },
            move |invalid| errors.set(invalid),
        );
    };
    let confirm_delete = move || {
        if let Some(item) = deleting.get_untracked() {
            handle.delete(item.id().to_string(), move || deleting.set(None));
        }
    };

    let name_error = Signal::derive(move || errors.with(|e| e.get("name").map(str::to_string)));
    let singular_lower = R::SINGULAR.to_lowercase();

    let rows = move || {
        state.with(|s| {
            s.items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    let number = row_number(s.current_page, s.page_size, index);
                    let for_edit = item.clone();
                    let for_delete = item.clone();
                    let name = item.name().to_string();
                    let secondary = R::SECONDARY_COLUMN.map(|_| item.secondary());
                    view! {
                        <TableRow>
                            <TableCell><TableCellLayout>{number}</TableCellLayout></TableCell>
                            <TableCell>
                                <TableCellLayout truncate=true>
                                    <span style="font-weight: 500;">{name}</span>
                                </TableCellLayout>
                            </TableCell>
                            {secondary.map(|secondary| view! {
                                <TableCell><TableCellLayout>{secondary}</TableCellLayout></TableCell>
                            })}
                            <TableCell>
                                <Flex gap=FlexGap::Small>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| open_editor(
                                            FormMode::Edit { id: for_edit.id().to_string() },
                                            for_edit.name().to_string(),
                                        )
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

    let editor = move || {
        editing.get().map(|mode| {
            let title = if mode.is_edit() {
                format!("Edit {}", R::SINGULAR)
            } else {
                format!("Add {}", R::SINGULAR)
            };
            let placeholder = format!("Enter {} name", singular_lower);
            let busy = handle.busy;
            let footer: ChildrenFn = Arc::new(move || {
                view! {
                    <Flex gap=FlexGap::Small justify=FlexJustify::End>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| close_editor()>
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| submit()
                            disabled=Signal::derive(move || busy.get())
                        >
                            {move || if busy.get() { "Saving..." } else { "Save" }}
                        </Button>
                    </Flex>
                }
                .into_any()
            });
            view! {
                <Modal title=title on_close=Callback::new(move |_| close_editor()) footer=footer>
                    <form on:submit=move |ev| {
                        ev.prevent_default();
                        submit();
                    }>
                        <FormField label="Name" error=name_error required=true>
                            <Input value=name placeholder=placeholder />
                        </FormField>
                    </form>
                </Modal>
            }
        })
    };

    let delete_dialog = move || {
        deleting.get().map(|item| {
            view! {
                <ConfirmDialog
                    title=format!("Delete {}", R::SINGULAR)
                    message=format!("Are you sure you want to delete \"{}\"?", item.name())
                    busy=handle.busy
                    on_confirm=Callback::new(move |_| confirm_delete())
                    on_cancel=Callback::new(move |_| deleting.set(None))
                />
            }
        })
    };

    view! {
        <PageFrame page_id=R::PAGE_ID category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{R::TITLE}</h1>
                    <Badge>{move || state.with(|s| s.total_items.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| open_editor(FormMode::Create, String::new())
                    >
                        {icon("plus")}
                        {format!(" Add {}", R::SINGULAR)}
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
                                <TableHeaderCell min_width=60.0>"#"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"Name"</TableHeaderCell>
                                {R::SECONDARY_COLUMN.map(|label| view! {
                                    <TableHeaderCell min_width=100.0>{label}</TableHeaderCell>
                                })}
                                <TableHeaderCell min_width=110.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>{rows}</TableBody>
                    </Table>
                    <CrudListStatus handle=handle empty_text=R::EMPTY_TEXT />
                </div>
                <CrudPagination handle=handle />
            </div>

            {editor}
            {delete_dialog}
        </PageFrame>
    }
}
