mod dashboard;
mod health;
mod home;
mod login;
mod not_found;
mod register;

pub(crate) use dashboard::DashboardPage;
pub(crate) use health::HealthPage;
pub(crate) use home::HomePage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use register::RegisterPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Client-side route paths.
pub(crate) mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = crate::features::auth::guards::LOGIN_PATH;
    pub const REGISTER: &str = "/register";
    pub const DASHBOARD: &str = "/dashboard";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/health") view=HealthPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/dashboard") view=DashboardPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
