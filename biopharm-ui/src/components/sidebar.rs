//! Sidebar Component
//!
//! Role-filtered navigation with a collapse toggle.

use leptos::*;

use biopharm::dashboard::{NavItem, NAV_ITEMS};
use biopharm::view::{
    COLLAPSE_BUTTON_ID, NAV_ICON_CLASS, NAV_ITEM_CLASS, NAV_LABEL_CLASS, SIDEBAR_ID,
};

use crate::state::SignalView;

/// Sidebar with one entry per nav item; `on_toggle` fires on the collapse button
#[component]
pub fn Sidebar<F>(on_toggle: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    let view = use_context::<SignalView>().expect("SignalView not found");

    view! {
        <aside
            id=SIDEBAR_ID
            class=move || {
                if view.sidebar.get().collapsed {
                    "sidebar collapsed fixed inset-y-0 left-0 bg-blue-700 text-white transition-all"
                } else {
                    "sidebar fixed inset-y-0 left-0 bg-blue-700 text-white transition-all"
                }
            }
            style:width=move || view.sidebar.get().margin_left_css()
        >
            <div class="flex items-center justify-between px-4 py-5">
                <span class=NAV_LABEL_CLASS style:display=move || view.sidebar.get().label_display_css()>
                    "BioPharm"
                </span>
                <button
                    id=COLLAPSE_BUTTON_ID
                    class="text-white/80 hover:text-white"
                    on:click=move |_| on_toggle()
                >
                    "☰"
                </button>
            </div>

            <nav class="flex flex-col">
                {NAV_ITEMS.iter().map(|item| view! { <NavEntry item=*item /> }).collect_view()}
            </nav>
        </aside>
    }
}

#[component]
fn NavEntry(item: NavItem) -> impl IntoView {
    let view = use_context::<SignalView>().expect("SignalView not found");
    let key = item.key;

    view! {
        <a
            href="#"
            class=format!("{} flex items-center px-4 py-3 hover:bg-blue-600", NAV_ITEM_CLASS)
            data-key=key
            style:display=move || if view.is_nav_visible(key) { "flex" } else { "none" }
        >
            <span class=NAV_ICON_CLASS style:margin-right=move || view.sidebar.get().icon_margin_css()>
                {item.icon}
            </span>
            <span class=NAV_LABEL_CLASS style:display=move || view.sidebar.get().label_display_css()>
                {item.label}
            </span>
        </a>
    }
}
