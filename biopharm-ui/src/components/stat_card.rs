//! Stat Card Component
//!
//! One headline number of the dashboard.

use leptos::*;

use biopharm::view::StatField;

use crate::state::SignalView;

#[component]
pub fn StatCard(field: StatField, accent: &'static str) -> impl IntoView {
    let view = use_context::<SignalView>().expect("SignalView not found");

    let value = move || {
        view.stats
            .with(|stats| stats.get(&field).cloned())
            .unwrap_or_else(|| "—".to_string())
    };

    view! {
        <div class="bg-white rounded-lg p-4 shadow border-l-4" style=format!("border-color: {}", accent)>
            <div class="text-xs uppercase font-semibold" style=format!("color: {}", accent)>
                {field.title()}
            </div>
            <div id=field.element_id() class="text-2xl font-bold text-gray-800 mt-1">
                {value}
            </div>
        </div>
    }
}
