use yew::prelude::*;

use crate::Route;
use crate::components::PropertyManagementItem;
use crate::hooks::{use_properties, use_push_route};

/// The management dashboard: every listing as a card with its actions menu.
#[function_component]
pub fn ManagePropertiesPage() -> Html {
    let properties_hook = use_properties();
    let push_route = use_push_route();

    let on_add_click = {
        let push_route = push_route.clone();
        Callback::from(move |_| {
            push_route.emit(Route::CreateProperty);
        })
    };

    html! {
        <div>
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Manage Properties"}
                </h1>
                <button
                    onclick={on_add_click}
                    class="px-4 py-2 text-sm font-medium text-white bg-neutral-900 \
                           hover:bg-neutral-700 dark:bg-neutral-100 dark:text-neutral-900 \
                           dark:hover:bg-neutral-300 rounded-md transition-colors"
                >
                    {"Add Property"}
                </button>
            </div>

            {properties_hook.render("properties", |properties, _, _| {
                if properties.is_empty() {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {"No properties yet. Add your first listing to get started."}
                            </p>
                        </div>
                    }
                } else {
                    html! {
                        <div>
                            {for properties.iter().map(|property| html! {
                                <PropertyManagementItem
                                    key={property.id.to_string()}
                                    property={property.clone()}
                                />
                            })}
                        </div>
                    }
                }
            })}
        </div>
    }
}
