use contracts::system::users::{User, UserRole};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::crud_list::{row_number, CrudListStatus, CrudPagination};
use crate::shared::crud::CrudHandle;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

/// Plain shop users stand out from staff accounts.
fn role_color(role: &UserRole) -> BadgeColor {
    match role {
        UserRole::User => BadgeColor::Warning,
        _ => BadgeColor::Success,
    }
}

#[component]
pub fn UsersList() -> impl IntoView {
    let handle = CrudHandle::new::<User>();
    let state = handle.state;

    handle.refresh();

    let rows = move || {
        state.with(|s| {
            s.items
                .iter()
                .enumerate()
                .map(|(index, user)| {
                    let number = row_number(s.current_page, s.page_size, index);
                    let name = user.name.clone();
                    let email = user.email.clone();
                    let role_color = role_color(&user.role);
                    let role_label = user.role.as_str().to_string();
                    let created_at = format_date(user.created_at.as_ref());
                    view! {
                        <TableRow>
                            <TableCell><TableCellLayout>{number}</TableCellLayout></TableCell>
                            <TableCell>
                                <TableCellLayout truncate=true>
                                    <span style="font-weight: 500;">{name}</span>
                                </TableCellLayout>
                            </TableCell>
                            <TableCell><TableCellLayout truncate=true>{email}</TableCellLayout></TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    <Badge appearance=BadgeAppearance::Tint color=role_color>
                                        {role_label}
                                    </Badge>
                                </TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>{created_at}</TableCellLayout>
                            </TableCell>
                        </TableRow>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Users"</h1>
                    <Badge>{move || state.with(|s| s.total_items.to_string())}</Badge>
                </div>
                <div class="page__header-right">
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
                                <TableHeaderCell min_width=180.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=220.0>"Email"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Role"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Joined"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>{rows}</TableBody>
                    </Table>
                    <CrudListStatus handle=handle empty_text="No users found" />
                </div>
                <CrudPagination handle=handle />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_colors() {
        assert!(matches!(role_color(&UserRole::User), BadgeColor::Warning));
        assert!(matches!(role_color(&UserRole::Admin), BadgeColor::Success));
        assert!(matches!(
            role_color(&UserRole::Other("editor".into())),
            BadgeColor::Success
        ));
    }
}
