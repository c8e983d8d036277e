//! Navigation between the dashboard pages.

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Copy, Debug, PartialEq)]
struct MenuItem {
    path: &'static str,
    label: &'static str,
    icon: &'static str,
}

const MENU: &[MenuItem] = &[
    MenuItem { path: "/", label: "Dashboard", icon: "dashboard" },
    MenuItem { path: "/products", label: "Products", icon: "products" },
    MenuItem { path: "/orders", label: "Orders", icon: "orders" },
    MenuItem { path: "/category", label: "Categories", icon: "category" },
    MenuItem { path: "/language", label: "Languages", icon: "language" },
    MenuItem { path: "/blogs", label: "Blogs", icon: "blog" },
    MenuItem { path: "/users", label: "Users", icon: "users" },
];

/// Menu entry highlighted for `pathname`. Nested routes (`/blogs/add/1`)
/// keep their section highlighted.
fn active_item(pathname: &str) -> Option<&'static str> {
    MENU.iter()
        .filter(|item| {
            pathname == item.path
                || (item.path != "/" && pathname.starts_with(&format!("{}/", item.path)))
        })
        .map(|item| item.path)
        .next()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = leptos_router::hooks::use_location();
    let active = move || location.pathname.with(|p| active_item(p));

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"Shop Admin"</div>
            <ul class="sidebar__menu">
                {MENU
                    .iter()
                    .map(|item| {
                        let path = item.path;
                        view! {
                            <li class=move || {
                                if active() == Some(path) {
                                    "sidebar__item sidebar__item--active"
                                } else {
                                    "sidebar__item"
                                }
                            }>
                                <A href=path>
                                    {icon(item.icon)}
                                    <span class="sidebar__label">{item.label}</span>
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_item() {
        assert_eq!(active_item("/"), Some("/"));
        assert_eq!(active_item("/products"), Some("/products"));
        assert_eq!(active_item("/blogs/add/42"), Some("/blogs"));
        assert_eq!(active_item("/blogsx"), None);
        assert_eq!(active_item("/signin"), None);
    }
}
