//! User management page: list, create, delete.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::components::layout::MainLayout;
use crate::net::types::{Role, UserPayload};
use crate::net::users::fetch_users;
use crate::state::loading::LoadingState;
use crate::state::notifications::Notifications;

#[cfg(feature = "hydrate")]
use crate::net::users::{create_user, delete_user};
#[cfg(feature = "hydrate")]
use crate::state::notifications::{Level, notify};

/// Minimum accepted password length for new accounts.
const MIN_PASSWORD_LEN: usize = 8;

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Admin => "Administrator",
        Role::User => "User",
    }
}

/// Validate the create-user form, returning a request payload.
fn parse_user_form(
    name: &str,
    email: &str,
    password: &str,
    admin: bool,
) -> Result<UserPayload, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() {
        return Err("Enter a name and email.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    Ok(UserPayload {
        name: name.to_owned(),
        email: email.to_owned(),
        role: if admin { Role::Admin } else { Role::User },
        password: Some(password.to_owned()),
        active: None,
    })
}

/// Users page — account table plus a create form.
#[component]
pub fn UsersPage() -> impl IntoView {
    let notifications = expect_context::<RwSignal<Notifications>>();
    let users = LocalResource::new(|| async { fetch_users().await.ok() });
    let form = RwSignal::new(LoadingState::default());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let admin = RwSignal::new(false);

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with(|f| f.loading) {
            return;
        }
        let payload = match parse_user_form(&name.get(), &email.get(), &password.get(), admin.get())
        {
            Ok(payload) => payload,
            Err(message) => {
                form.update(|f| f.fail(message));
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            form.update(LoadingState::start);
            match create_user(&payload).await {
                Ok(created) => {
                    form.update(LoadingState::finish);
                    name.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    admin.set(false);
                    notify(
                        notifications,
                        Level::Success,
                        format!("User {} created.", created.name),
                    );
                    users.refetch();
                }
                Err(error) => {
                    form.update(|f| f.fail(error.to_string()));
                    notify(notifications, Level::Error, "Could not create user.");
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&payload, notifications);
        }
    };

    let on_delete = move |id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match delete_user(id).await {
                Ok(()) => {
                    notify(notifications, Level::Success, "User deleted.");
                    users.refetch();
                }
                Err(_) => notify(notifications, Level::Error, "Could not delete user."),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    view! {
        <MainLayout>
        <section class="users-page">
            <header class="users-page__header">
                <h1>"Users"</h1>
            </header>

            <form class="record-form" on:submit=on_create>
                <input
                    class="record-form__input"
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="record-form__input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="record-form__input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <label class="record-form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || admin.get()
                        on:change=move |ev| admin.set(event_target_checked(&ev))
                    />
                    "Administrator"
                </label>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || form.with(|f| f.loading)
                >
                    "Add User"
                </button>
                <Show when=move || form.with(|f| f.error.is_some())>
                    <p class="record-form__error">
                        {move || form.with(|f| f.error.clone().unwrap_or_default())}
                    </p>
                </Show>
            </form>

            <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                {move || {
                    users
                        .get()
                        .map(|list| match list {
                            Some(list) => {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Name"</th>
                                                <th>"Email"</th>
                                                <th>"Role"</th>
                                                <th>"Active"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|user| {
                                                    let id = user.id;
                                                    view! {
                                                        <tr>
                                                            <td>{user.name.clone()}</td>
                                                            <td>{user.email.clone()}</td>
                                                            <td>{role_label(user.role)}</td>
                                                            <td>
                                                                {if user.active.unwrap_or(true) {
                                                                    "yes"
                                                                } else {
                                                                    "no"
                                                                }}
                                                            </td>
                                                            <td>
                                                                <button
                                                                    class="btn btn--danger"
                                                                    on:click=move |_| on_delete(id)
                                                                >
                                                                    "Delete"
                                                                </button>
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            None => {
                                view! { <p class="page-error">"Users are unavailable."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
        </MainLayout>
    }
}
