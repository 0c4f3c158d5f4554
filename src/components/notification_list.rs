//! Toast stack rendering the shared notification list.

use leptos::prelude::*;

use crate::state::notifications::Notifications;

/// Fixed-position stack of toasts with manual dismiss buttons.
#[component]
pub fn NotificationList() -> impl IntoView {
    let notifications = expect_context::<RwSignal<Notifications>>();

    view! {
        <div class="toast-stack">
            {move || {
                notifications
                    .with(|list| {
                        list.items()
                            .iter()
                            .cloned()
                            .map(|toast| {
                                let id = toast.id;
                                view! {
                                    <div class=format!("toast toast--{}", toast.level.css_class())>
                                        <span class="toast__message">{toast.message}</span>
                                        <button
                                            class="toast__dismiss"
                                            on:click=move |_| {
                                                notifications.update(|list| list.dismiss(id));
                                            }
                                        >
                                            "\u{d7}"
                                        </button>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    })
            }}
        </div>
    }
}
