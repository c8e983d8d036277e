use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_language::ui::list::LanguageList;
use crate::domain::a003_blog::ui::details::BlogDetails;
use crate::domain::a003_blog::ui::list::BlogList;
use crate::domain::a004_product::ui::list::ProductList;
use crate::domain::a005_order::ui::list::OrdersList;
use crate::layout::Shell;
use crate::system::auth::guard::{GuestOnly, RequireAuth};
use crate::system::pages::forgot_password::ForgotPasswordPage;
use crate::system::pages::login::LoginPage;
use crate::system::users::ui::list::UsersList;
use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes, A};
use leptos_router::path;

/// Shell around every page behind the sign-in guard.
#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <RequireAuth>
            <Shell>
                <Outlet />
            </Shell>
        </RequireAuth>
    }
}

#[component]
fn SignInRoute() -> impl IntoView {
    view! {
        <GuestOnly>
            <LoginPage />
        </GuestOnly>
    }
}

#[component]
fn ForgotPasswordRoute() -> impl IntoView {
    view! {
        <GuestOnly>
            <ForgotPasswordPage />
        </GuestOnly>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1 class="page__title">"Page not found"</h1>
            <A href="/">"Back to dashboard"</A>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/signin") view=SignInRoute />
                <Route path=path!("/forgot-password") view=ForgotPasswordRoute />
                <ParentRoute path=path!("") view=MainLayout>
                    <Route path=path!("") view=OverviewDashboard />
                    <Route path=path!("products") view=ProductList />
                    <Route path=path!("orders") view=OrdersList />
                    <Route path=path!("category") view=CategoryList />
                    <Route path=path!("language") view=LanguageList />
                    <Route path=path!("users") view=UsersList />
                    <Route path=path!("blogs") view=BlogList />
                    <Route path=path!("blogs/add") view=BlogDetails />
                    <Route path=path!("blogs/add/:id") view=BlogDetails />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
