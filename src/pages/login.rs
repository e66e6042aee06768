//! Login Page

use leptos::prelude::*;

use crate::context::use_app;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match ctx.session.login(&username.get(), &password.get()) {
            Ok(()) => {
                set_error.set(None);
                ctx.toasts.success("Welcome back", "You are now logged in.");
            }
            Err(e) => {
                tracing::warn!("login rejected");
                set_password.set(String::new());
                set_error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <div class="login-screen">
            <form class="login-card" on:submit=submit>
                <h1>"Shoe Admin"</h1>
                <label class="form-field">
                    <span class="form-label">"Username"</span>
                    <input
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </label>
                <label class="form-field">
                    <span class="form-label">"Password"</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                <button type="submit" class="primary-btn">"Log in"</button>
            </form>
        </div>
    }
}
