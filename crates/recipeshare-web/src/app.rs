//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::{Navbar, RouteGuard, ToastProvider};
use crate::config::api_config;
use crate::pages::{
    CreateRecipe, EditRecipe, Home, Login, NotFound, Profile, RecipeDetail, Register,
};
use crate::state::{provide_auth_context, provide_theme_context};

#[component]
pub fn App() -> impl IntoView {
    provide_theme_context();
    provide_auth_context(api_config());

    view! {
        <ToastProvider>
            <Router>
                <div class="app">
                    <Navbar />
                    <main class="content">
                        <Routes fallback=|| view! { <NotFound /> }>
                            <Route
                                path=path!("/login")
                                view=|| view! { <RouteGuard><Login /></RouteGuard> }
                            />
                            <Route
                                path=path!("/register")
                                view=|| view! { <RouteGuard><Register /></RouteGuard> }
                            />
                            <Route
                                path=path!("/")
                                view=|| view! { <RouteGuard><Home /></RouteGuard> }
                            />
                            <Route
                                path=path!("/create-recipe")
                                view=|| view! { <RouteGuard><CreateRecipe /></RouteGuard> }
                            />
                            <Route
                                path=path!("/recipe/:id")
                                view=|| view! { <RouteGuard><RecipeDetail /></RouteGuard> }
                            />
                            <Route
                                path=path!("/edit-recipe/:id")
                                view=|| view! { <RouteGuard><EditRecipe /></RouteGuard> }
                            />
                            <Route
                                path=path!("/profile")
                                view=|| view! { <RouteGuard><Profile /></RouteGuard> }
                            />
                        </Routes>
                    </main>
                </div>
            </Router>
        </ToastProvider>
    }
}
