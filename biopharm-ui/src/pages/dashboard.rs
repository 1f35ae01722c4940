//! Dashboard Page
//!
//! Loads the stored session on mount, then renders the role-filtered
//! sidebar, the stat cards and the two sample charts.

use leptos::*;

use biopharm::dashboard::{ChartSlot, DashboardController};
use biopharm::view::{StatField, USER_ROLE_LABEL_ID, WELCOME_USER_ID};

use crate::components::{ChartCanvas, Sidebar, StatCard};
use crate::state::{LocalStorage, SignalView};

const STAT_ACCENTS: [&str; 4] = ["#4e73df", "#1cc88a", "#f6c23e", "#e74a3b"];

#[component]
pub fn Dashboard() -> impl IntoView {
    let view = use_context::<SignalView>().expect("SignalView not found");
    let controller = store_value(DashboardController::new(LocalStorage, view));

    // Runs once per page load; the session is not re-read afterwards
    controller.update_value(|controller| {
        controller.open_dashboard();
    });

    let on_toggle = move || {
        controller.update_value(|controller| {
            controller.toggle_sidebar();
        });
    };

    let on_logout = move |_| {
        controller.update_value(|controller| {
            if let Err(e) = controller.logout() {
                web_sys::console::error_1(&e.to_string().into());
            }
        });
    };

    view! {
        <div class="min-h-screen bg-gray-100">
            <Sidebar on_toggle=on_toggle />

            <main
                class="transition-all p-6"
                style:margin-left=move || view.sidebar.get().margin_left_css()
            >
                <header class="flex items-center justify-between mb-6">
                    <div>
                        <h1 class="text-2xl font-bold text-gray-800">"Dashboard"</h1>
                        <p class="text-gray-500">
                            "Welcome, "
                            <span id=WELCOME_USER_ID>{move || view.welcome.get()}</span>
                        </p>
                    </div>
                    <div class="flex items-center space-x-4">
                        <span id=USER_ROLE_LABEL_ID class="px-3 py-1 rounded bg-blue-100 text-blue-700 capitalize">
                            {move || view.role_label.get()}
                        </span>
                        <button
                            class="px-4 py-2 bg-red-500 hover:bg-red-600 text-white rounded"
                            on:click=on_logout
                        >
                            "Logout"
                        </button>
                    </div>
                </header>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-6">
                    {StatField::ALL
                        .into_iter()
                        .zip(STAT_ACCENTS)
                        .map(|(field, accent)| view! { <StatCard field=field accent=accent /> })
                        .collect_view()}
                </div>

                <div class="grid md:grid-cols-2 gap-6">
                    <section class="bg-white rounded-lg shadow p-4">
                        <h2 class="font-semibold text-gray-700 mb-2">"Weekly Sales"</h2>
                        <ChartCanvas slot=ChartSlot::Sales />
                    </section>
                    <section class="bg-white rounded-lg shadow p-4">
                        <h2 class="font-semibold text-gray-700 mb-2">"Inventory"</h2>
                        <ChartCanvas slot=ChartSlot::Inventory />
                    </section>
                </div>
            </main>
        </div>
    }
}
