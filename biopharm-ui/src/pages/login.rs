//! Login Page
//!
//! Role, username and password form. Submitting stores the session and
//! moves to the dashboard; blank credentials raise an alert instead.

use leptos::*;

use biopharm::dashboard::DashboardController;
use biopharm::session::Role;
use biopharm::view::FormField;

use crate::state::{LocalStorage, SignalView};

#[component]
pub fn Login() -> impl IntoView {
    let view = use_context::<SignalView>().expect("SignalView not found");
    let controller = store_value(DashboardController::new(LocalStorage, view));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        controller.update_value(|controller| {
            if let Err(e) = controller.submit_login() {
                web_sys::console::warn_1(&e.to_string().into());
            }
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-100">
            <form on:submit=on_submit class="bg-white rounded-lg shadow p-8 w-full max-w-sm space-y-4">
                <h1 class="text-2xl font-bold text-blue-700 text-center">"BioPharm"</h1>

                <label class="block">
                    <span class="text-sm text-gray-600">"Role"</span>
                    <select
                        id=FormField::Role.element_id()
                        class="mt-1 w-full border rounded px-3 py-2"
                        on:change=move |ev| view.role.set(event_target_value(&ev))
                    >
                        <option value="" selected=true>"Select role"</option>
                        {Role::known()
                            .into_iter()
                            .map(|role| {
                                let value = role.as_str().to_string();
                                view! { <option value=value.clone()>{capitalize(&value)}</option> }
                            })
                            .collect_view()}
                    </select>
                </label>

                <FormInput field=FormField::Username label="Username" kind="text" />
                <FormInput field=FormField::Password label="Password" kind="password" />

                <button
                    type="submit"
                    class="w-full py-2 bg-blue-600 hover:bg-blue-700 text-white rounded font-medium"
                >
                    "Login"
                </button>
            </form>
        </div>
    }
}

#[component]
fn FormInput(field: FormField, label: &'static str, kind: &'static str) -> impl IntoView {
    let view = use_context::<SignalView>().expect("SignalView not found");
    let signal = view.form_signal(field);

    view! {
        <label class="block">
            <span class="text-sm text-gray-600">{label}</span>
            <input
                id=field.element_id()
                type=kind
                class="mt-1 w-full border rounded px-3 py-2"
                prop:value=move || signal.get()
                on:input=move |ev| signal.set(event_target_value(&ev))
            />
        </label>
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("cashier"), "Cashier");
        assert_eq!(capitalize(""), "");
    }
}
