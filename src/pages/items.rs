//! Item management page: filterable list, create, delete.

#[cfg(test)]
#[path = "items_test.rs"]
mod items_test;

use leptos::prelude::*;

use crate::components::layout::MainLayout;
use crate::net::items::{ItemFilter, fetch_items};
use crate::net::types::ItemPayload;
use crate::state::loading::LoadingState;
use crate::state::notifications::Notifications;

#[cfg(feature = "hydrate")]
use crate::net::items::{create_item, delete_item};
#[cfg(feature = "hydrate")]
use crate::state::notifications::{Level, notify};

/// Turn the raw filter input into an optional category.
fn category_filter(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Validate the create-item form, returning a request payload.
fn parse_item_form(
    name: &str,
    description: &str,
    category: &str,
    price: &str,
    quantity: &str,
) -> Result<ItemPayload, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter an item name.");
    }
    let price = match price.trim() {
        "" => None,
        raw => Some(raw.parse::<f64>().map_err(|_| "Price must be a number.")?),
    };
    let quantity = quantity
        .trim()
        .parse::<i64>()
        .map_err(|_| "Quantity must be a whole number.")?;
    let description = description.trim();
    let category = category.trim();
    Ok(ItemPayload {
        name: name.to_owned(),
        description: (!description.is_empty()).then(|| description.to_owned()),
        category: (!category.is_empty()).then(|| category.to_owned()),
        price,
        quantity,
        active: true,
    })
}

/// Items page — inventory table with a category filter and create form.
#[component]
pub fn ItemsPage() -> impl IntoView {
    let notifications = expect_context::<RwSignal<Notifications>>();
    let category = RwSignal::new(String::new());
    let items = LocalResource::new(move || {
        let filter = ItemFilter {
            category: category_filter(&category.get()),
            active: None,
        };
        async move { fetch_items(&filter).await.ok() }
    });
    let form = RwSignal::new(LoadingState::default());

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let new_category = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with(|f| f.loading) {
            return;
        }
        let payload = match parse_item_form(
            &name.get(),
            &description.get(),
            &new_category.get(),
            &price.get(),
            &quantity.get(),
        ) {
            Ok(payload) => payload,
            Err(message) => {
                form.update(|f| f.fail(message));
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            form.update(LoadingState::start);
            match create_item(&payload).await {
                Ok(created) => {
                    form.update(LoadingState::finish);
                    name.set(String::new());
                    description.set(String::new());
                    new_category.set(String::new());
                    price.set(String::new());
                    quantity.set(String::new());
                    notify(
                        notifications,
                        Level::Success,
                        format!("Item {} created.", created.name),
                    );
                    items.refetch();
                }
                Err(error) => {
                    form.update(|f| f.fail(error.to_string()));
                    notify(notifications, Level::Error, "Could not create item.");
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
            match delete_item(id).await {
                Ok(()) => {
                    notify(notifications, Level::Success, "Item deleted.");
                    items.refetch();
                }
                Err(_) => notify(notifications, Level::Error, "Could not delete item."),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    view! {
        <MainLayout>
        <section class="items-page">
            <header class="items-page__header">
                <h1>"Items"</h1>
                <input
                    class="items-page__filter"
                    type="text"
                    placeholder="Filter by category"
                    prop:value=move || category.get()
                    on:input=move |ev| category.set(event_target_value(&ev))
                />
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
                    type="text"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
                <input
                    class="record-form__input"
                    type="text"
                    placeholder="Category"
                    prop:value=move || new_category.get()
                    on:input=move |ev| new_category.set(event_target_value(&ev))
                />
                <input
                    class="record-form__input record-form__input--narrow"
                    type="text"
                    placeholder="Price"
                    prop:value=move || price.get()
                    on:input=move |ev| price.set(event_target_value(&ev))
                />
                <input
                    class="record-form__input record-form__input--narrow"
                    type="text"
                    placeholder="Quantity"
                    prop:value=move || quantity.get()
                    on:input=move |ev| quantity.set(event_target_value(&ev))
                />
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || form.with(|f| f.loading)
                >
                    "Add Item"
                </button>
                <Show when=move || form.with(|f| f.error.is_some())>
                    <p class="record-form__error">
                        {move || form.with(|f| f.error.clone().unwrap_or_default())}
                    </p>
                </Show>
            </form>

            <Suspense fallback=move || view! { <p>"Loading items..."</p> }>
                {move || {
                    items
                        .get()
                        .map(|list| match list {
                            Some(list) => {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Name"</th>
                                                <th>"Category"</th>
                                                <th>"Price"</th>
                                                <th>"Qty"</th>
                                                <th>"Owner"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|item| {
                                                    let id = item.id;
                                                    view! {
                                                        <tr>
                                                            <td>{item.name.clone()}</td>
                                                            <td>
                                                                {item
                                                                    .category
                                                                    .clone()
                                                                    .unwrap_or_default()}
                                                            </td>
                                                            <td>
                                                                {item
                                                                    .price
                                                                    .map(|p| format!("{p:.2}"))
                                                                    .unwrap_or_default()}
                                                            </td>
                                                            <td>{item.quantity}</td>
                                                            <td>{item.user.name.clone()}</td>
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
                                view! { <p class="page-error">"Items are unavailable."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
        </MainLayout>
    }
}
