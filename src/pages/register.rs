//! Registration Page
//!
//! Form shell only: no account is created anywhere, submission checks that
//! the fields are present and clears the form.

use leptos::*;

use crate::state::global::GlobalState;

/// Registration page component
#[component]
pub fn Register() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if name.get().is_empty() || email.get().is_empty() || password.get().is_empty() {
            state.show_error("Please fill all the registration details!");
            return;
        }

        state.show_success("Account created successfully!");
        set_name.set(String::new());
        set_email.set(String::new());
        set_password.set(String::new());
    };

    view! {
        <div class="max-w-md mx-auto bg-gray-800 rounded-xl p-6 mt-8">
            <h1 class="text-2xl font-semibold mb-6">"Register"</h1>

            <form on:submit=on_submit class="space-y-4">
                // Full name
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Full Name"</label>
                    <input
                        type="text"
                        placeholder="Jane Smith"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                // Email
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                    <input
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                // Password
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <button
                    type="submit"
                    class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3
                           font-semibold transition-colors"
                >
                    "Register"
                </button>
            </form>
        </div>
    }
}
