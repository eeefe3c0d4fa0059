use payloads::PropertyId;
use yew::prelude::*;

use crate::Route;
use crate::hooks::{use_property, use_property_images, use_push_route};
use crate::utils::format::{format_area, format_price, pluralize};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub property_id: PropertyId,
}

/// Read-only view of a single listing with its image gallery.
#[function_component]
pub fn PropertyDetailPage(props: &Props) -> Html {
    let property_id = props.property_id;
    let property_hook = use_property(property_id);
    let images_hook = use_property_images(property_id);
    let push_route = use_push_route();

    let on_back_click = {
        let push_route = push_route.clone();
        Callback::from(move |_| push_route.emit(Route::Properties))
    };
    let on_edit_click = {
        let push_route = push_route.clone();
        Callback::from(move |_| {
            push_route.emit(Route::EditProperty { id: property_id })
        })
    };
    let on_images_click = {
        let push_route = push_route.clone();
        Callback::from(move |_| {
            push_route.emit(Route::PropertyImages { id: property_id })
        })
    };

    let gallery = images_hook.data.as_ref().map(|images| {
        if images.is_empty() {
            html! {
                <div class="h-64 bg-neutral-100 dark:bg-neutral-700 rounded-lg flex items-center justify-center text-sm text-neutral-500 dark:text-neutral-400">
                    {"No Image Available"}
                </div>
            }
        } else {
            html! {
                <div class="grid grid-cols-2 sm:grid-cols-3 gap-4">
                    {for images.iter().map(|image| html! {
                        <img
                            key={image.id.to_string()}
                            src={image.image_url.clone()}
                            alt={image.description.clone().unwrap_or_default()}
                            class="w-full h-40 object-cover rounded-lg"
                        />
                    })}
                </div>
            }
        }
    });

    html! {
        <div>
            <button
                onclick={on_back_click}
                class="text-sm text-neutral-600 dark:text-neutral-400 hover:underline mb-4"
            >
                {"← Back to properties"}
            </button>

            {property_hook.render("property", move |property, _, _| html! {
                <div class="space-y-6">
                    <div class="flex items-start justify-between">
                        <div>
                            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                                {&property.title}
                            </h1>
                            <p class="text-sm text-neutral-600 dark:text-neutral-400 mt-1">
                                {&property.location}
                            </p>
                        </div>
                        <div class="flex gap-2">
                            <button
                                onclick={on_edit_click.clone()}
                                class="px-3 py-1.5 text-sm border border-neutral-300 dark:border-neutral-600 rounded-md hover:bg-neutral-100 dark:hover:bg-neutral-700"
                            >
                                {"Edit"}
                            </button>
                            <button
                                onclick={on_images_click.clone()}
                                class="px-3 py-1.5 text-sm border border-neutral-300 dark:border-neutral-600 rounded-md hover:bg-neutral-100 dark:hover:bg-neutral-700"
                            >
                                {"Manage Images"}
                            </button>
                        </div>
                    </div>

                    <div class="flex flex-wrap gap-2">
                        <span class={format!(
                            "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium text-white {}",
                            if property.listing_type.is_rent() {
                                "bg-neutral-700"
                            } else {
                                "bg-neutral-900"
                            }
                        )}>
                            {property.listing_type.to_string()}
                        </span>
                        <span class="inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-neutral-100 text-neutral-800 dark:bg-neutral-700 dark:text-neutral-200">
                            {&property.property_type}
                        </span>
                    </div>

                    <p class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                        {format_price(&property.price, property.listing_type)}
                    </p>

                    <div class="flex gap-6 text-sm text-neutral-600 dark:text-neutral-400">
                        <span>
                            {format!(
                                "{} {}",
                                property.bedrooms,
                                pluralize(property.bedrooms, "Bed", "Beds")
                            )}
                        </span>
                        <span>
                            {format!(
                                "{} {}",
                                property.bathrooms,
                                pluralize(property.bathrooms, "Bath", "Baths")
                            )}
                        </span>
                        <span>{format_area(property.area)}</span>
                    </div>

                    {if let Some(description) = &property.description {
                        html! {
                            <p class="text-neutral-700 dark:text-neutral-300 whitespace-pre-line">
                                {description}
                            </p>
                        }
                    } else {
                        html! {}
                    }}

                    {if let Some(owner_name) = &property.owner_name {
                        html! {
                            <p class="text-sm text-neutral-500 dark:text-neutral-400">
                                {format!("Listed by {owner_name}")}
                            </p>
                        }
                    } else {
                        html! {}
                    }}

                    {gallery.clone().unwrap_or_else(|| html! {})}
                </div>
            })}
        </div>
    }
}
