//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::config::ApiEndpoints;
use crate::pages::{
    about::AboutPage, create_ticket::CreateTicketPage, create_user::CreateUserPage, dashboard::DashboardPage,
    view_users::ViewUsersPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the backend endpoint table and sets up client-side routing with
/// the navigation header above every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiEndpoints::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/stackit.css"/>
        <Title text="StackIT Support"/>

        <Router>
            <Header/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=(StaticSegment("tickets"), StaticSegment("new")) view=CreateTicketPage/>
                    <Route path=(StaticSegment("users"), StaticSegment("new")) view=CreateUserPage/>
                    <Route path=StaticSegment("users") view=ViewUsersPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                </Routes>
            </main>
        </Router>
    }
}
