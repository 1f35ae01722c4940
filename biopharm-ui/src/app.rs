//! App Root Component
//!
//! Routing plus the bridge that turns controller navigation requests into
//! router navigations.

use leptos::*;
use leptos_router::*;

use biopharm::view::Page;

use crate::pages::{Dashboard, Login};
use crate::state::provide_signal_view;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_signal_view();

    view! {
        <Router>
            <NavigationBridge />
            <Routes>
                <Route path=Page::Login.path() view=Login />
                <Route path=Page::Dashboard.path() view=Dashboard />
                <Route path="/*any" view=NotFound />
            </Routes>
        </Router>
    }
}

/// Follows `SignalView::pending_page`; must sit inside the router
#[component]
fn NavigationBridge() -> impl IntoView {
    let view = use_context::<crate::state::SignalView>().expect("SignalView not found");
    let navigate = use_navigate();

    create_effect(move |_| {
        if let Some(page) = view.pending_page.get() {
            view.pending_page.set_untracked(None);
            navigate(page.path(), Default::default());
        }
    });
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-screen text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <A href=Page::Login.path() class="px-6 py-3 bg-blue-600 text-white rounded-lg">
                "Back to login"
            </A>
        </div>
    }
}
