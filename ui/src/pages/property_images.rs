use payloads::{PropertyId, PropertyImageId, requests};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::Route;
use crate::components::ConfirmationModal;
use crate::contexts::toast::use_toast;
use crate::hooks::{use_property, use_property_images, use_push_route};
use crate::get_api_client;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub property_id: PropertyId,
}

/// Image management for one listing: add by URL, choose the primary image,
/// delete with confirmation.
#[function_component]
pub fn PropertyImagesPage(props: &Props) -> Html {
    let property_id = props.property_id;
    let property_hook = use_property(property_id);
    let images_hook = use_property_images(property_id);
    let toast = use_toast();
    let push_route = use_push_route();

    // Add-image form state
    let image_url = use_state(String::new);
    let image_description = use_state(String::new);
    let is_adding = use_state(|| false);

    // Delete confirmation state
    let delete_target = use_state(|| None::<PropertyImageId>);
    let is_deleting = use_state(|| false);
    let delete_error = use_state(|| None::<String>);

    let on_back_click = {
        let push_route = push_route.clone();
        Callback::from(move |_| push_route.emit(Route::Properties))
    };

    let on_url_input = {
        let image_url = image_url.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            image_url.set(input.value());
        })
    };

    let on_description_input = {
        let image_description = image_description.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            image_description.set(input.value());
        })
    };

    // Handle add-image submit
    let on_add_submit = {
        let image_url = image_url.clone();
        let image_description = image_description.clone();
        let is_adding = is_adding.clone();
        let toast = toast.clone();
        let refetch = images_hook.refetch.clone();
        let no_images_yet = images_hook
            .data
            .as_ref()
            .map(|images| images.is_empty())
            .unwrap_or(false);

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let url = image_url.trim().to_string();
            if url.is_empty() {
                return;
            }

            let image_url = image_url.clone();
            let image_description = image_description.clone();
            let is_adding = is_adding.clone();
            let toast = toast.clone();
            let refetch = refetch.clone();

            let description = image_description.trim().to_string();
            let details = requests::SavePropertyImage {
                property_id,
                image_url: url,
                description: if description.is_empty() {
                    None
                } else {
                    Some(description)
                },
                // The first image uploaded becomes the cover
                is_primary: no_images_yet,
            };

            wasm_bindgen_futures::spawn_local(async move {
                is_adding.set(true);

                let api_client = get_api_client();
                match api_client.create_property_image(&details).await {
                    Ok(_) => {
                        image_url.set(String::new());
                        image_description.set(String::new());
                        toast.success("Image added.");
                        refetch.emit(());
                    }
                    Err(e) => {
                        toast.error(format!("Failed to add image: {e}"));
                    }
                }

                is_adding.set(false);
            });
        })
    };

    // Handle set-primary click
    let on_set_primary = {
        let toast = toast.clone();
        let refetch = images_hook.refetch.clone();

        Callback::from(move |image_id: PropertyImageId| {
            let toast = toast.clone();
            let refetch = refetch.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let api_client = get_api_client();
                match api_client.set_primary_image(&image_id).await {
                    Ok(_) => {
                        toast.success("Primary image updated.");
                        refetch.emit(());
                    }
                    Err(e) => {
                        toast.error(format!(
                            "Failed to update primary image: {e}"
                        ));
                    }
                }
            });
        })
    };

    // Handle delete click
    let on_delete_click = {
        let delete_target = delete_target.clone();
        Callback::from(move |image_id: PropertyImageId| {
            delete_target.set(Some(image_id));
        })
    };

    // Handle delete confirm
    let on_delete_confirm = {
        let delete_target = delete_target.clone();
        let is_deleting = is_deleting.clone();
        let delete_error = delete_error.clone();
        let toast = toast.clone();
        let refetch = images_hook.refetch.clone();

        Callback::from(move |_| {
            let image_id = match *delete_target {
                Some(id) => id,
                None => return,
            };

            let delete_target = delete_target.clone();
            let is_deleting = is_deleting.clone();
            let delete_error = delete_error.clone();
            let toast = toast.clone();
            let refetch = refetch.clone();

            wasm_bindgen_futures::spawn_local(async move {
                is_deleting.set(true);
                delete_error.set(None);

                let api_client = get_api_client();
                match api_client.delete_property_image(&image_id).await {
                    Ok(_) => {
                        delete_target.set(None);
                        toast.success("Image deleted.");
                        refetch.emit(());
                    }
                    Err(e) => {
                        delete_error.set(Some(e.to_string()));
                    }
                }

                is_deleting.set(false);
            });
        })
    };

    let on_delete_close = {
        let delete_target = delete_target.clone();
        let is_deleting = is_deleting.clone();
        let delete_error = delete_error.clone();
        Callback::from(move |_| {
            if !*is_deleting {
                delete_target.set(None);
                delete_error.set(None);
            }
        })
    };

    let heading = property_hook
        .data
        .as_ref()
        .map(|property| format!("Images for {}", property.title))
        .unwrap_or_else(|| "Images".to_string());

    html! {
        <div>
            <button
                onclick={on_back_click}
                class="text-sm text-neutral-600 dark:text-neutral-400 hover:underline mb-4"
            >
                {"← Back to properties"}
            </button>

            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-6">
                {heading}
            </h1>

            <form
                onsubmit={on_add_submit}
                class="flex flex-col sm:flex-row gap-3 mb-8"
            >
                <input
                    type="url"
                    placeholder="https://example.com/image.jpg"
                    value={(*image_url).clone()}
                    oninput={on_url_input}
                    class="flex-grow px-3 py-2 text-sm border border-neutral-300 \
                           dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-700 \
                           text-neutral-900 dark:text-neutral-100 focus:outline-none \
                           focus:ring-2 focus:ring-neutral-500"
                />
                <input
                    type="text"
                    placeholder="Description (optional)"
                    value={(*image_description).clone()}
                    oninput={on_description_input}
                    class="sm:w-56 px-3 py-2 text-sm border border-neutral-300 \
                           dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-700 \
                           text-neutral-900 dark:text-neutral-100 focus:outline-none \
                           focus:ring-2 focus:ring-neutral-500"
                />
                <button
                    type="submit"
                    disabled={*is_adding}
                    class="px-4 py-2 text-sm font-medium text-white bg-neutral-900 \
                           hover:bg-neutral-700 dark:bg-neutral-100 dark:text-neutral-900 \
                           dark:hover:bg-neutral-300 rounded-md \
                           disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                >
                    {if *is_adding { "Adding..." } else { "Add Image" }}
                </button>
            </form>

            {images_hook.render("images", |images, _, _| {
                if images.is_empty() {
                    return html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {"No images yet. Add one above to give this listing a cover."}
                            </p>
                        </div>
                    };
                }

                html! {
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                        {for images.iter().map(|image| {
                            let set_primary = {
                                let on_set_primary = on_set_primary.clone();
                                let image_id = image.id;
                                Callback::from(move |_| {
                                    on_set_primary.emit(image_id)
                                })
                            };
                            let delete = {
                                let on_delete_click = on_delete_click.clone();
                                let image_id = image.id;
                                Callback::from(move |_| {
                                    on_delete_click.emit(image_id)
                                })
                            };

                            html! {
                                <div
                                    key={image.id.to_string()}
                                    class="bg-white dark:bg-neutral-800 rounded-lg shadow-sm overflow-hidden"
                                >
                                    <img
                                        src={image.image_url.clone()}
                                        alt={image.description.clone().unwrap_or_default()}
                                        class="w-full h-40 object-cover"
                                    />
                                    <div class="p-3 space-y-2">
                                        {if image.is_primary {
                                            html! {
                                                <span class="inline-flex items-center px-2 py-0.5 rounded-full text-xs font-medium bg-neutral-900 text-white dark:bg-neutral-100 dark:text-neutral-900">
                                                    {"Primary"}
                                                </span>
                                            }
                                        } else {
                                            html! {
                                                <button
                                                    onclick={set_primary}
                                                    class="text-xs text-neutral-600 dark:text-neutral-400 hover:underline"
                                                >
                                                    {"Set as primary"}
                                                </button>
                                            }
                                        }}
                                        {if let Some(description) = &image.description {
                                            html! {
                                                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                                    {description}
                                                </p>
                                            }
                                        } else {
                                            html! {}
                                        }}
                                        <button
                                            onclick={delete}
                                            class="text-xs text-red-600 dark:text-red-400 hover:underline"
                                        >
                                            {"Delete"}
                                        </button>
                                    </div>
                                </div>
                            }
                        })}
                    </div>
                }
            })}

            {if delete_target.is_some() {
                html! {
                    <ConfirmationModal
                        title="Delete Image"
                        message="Are you sure you want to delete this image? This action cannot be undone."
                        confirm_text="Delete"
                        on_confirm={on_delete_confirm}
                        on_close={on_delete_close}
                        is_loading={*is_deleting}
                        error_message={(*delete_error).clone().map(AttrValue::from)}
                    />
                }
            } else {
                html! {}
            }}
        </div>
    }
}
