use payloads::responses;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::{ConfirmationModal, MenuItem, OverflowMenu};
use crate::contexts::toast::use_toast;
use crate::hooks::{use_property_images, use_push_route};
use crate::state::State;
use crate::utils::format::{format_area, format_price, pluralize};
use crate::{Route, get_api_client};

/// Per-card UI state. A single enum keeps the actions menu and the delete
/// dialog mutually exclusive: selecting "Delete Property" closes the menu
/// and opens the dialog in one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardUiState {
    #[default]
    Closed,
    MenuOpen,
    ConfirmingDelete,
}

impl CardUiState {
    /// Kebab toggle: flips the menu. A click that reaches the toggle while
    /// the dialog is up is ignored.
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::MenuOpen,
            Self::MenuOpen => Self::Closed,
            Self::ConfirmingDelete => Self::ConfirmingDelete,
        }
    }

    pub fn menu_open(&self) -> bool {
        matches!(self, Self::MenuOpen)
    }

    pub fn confirming_delete(&self) -> bool {
        matches!(self, Self::ConfirmingDelete)
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub property: responses::Property,
}

/// One row of the management dashboard: cover image, listing summary, and
/// an actions menu (view / edit / manage images / delete with
/// confirmation).
#[function_component]
pub fn PropertyManagementItem(props: &Props) -> Html {
    let property = &props.property;
    let property_id = property.id;

    let push_route = use_push_route();
    let toast = use_toast();
    let (_state, dispatch) = use_store::<State>();

    let ui_state = use_state(CardUiState::default);
    let is_deleting = use_state(|| false);
    let delete_error = use_state(|| None::<String>);

    let images_hook = use_property_images(property_id);
    let cover_image_url = images_hook
        .data
        .as_ref()
        .and_then(|images| images.first())
        .map(|image| image.image_url.clone());

    let on_menu_toggle = {
        let ui_state = ui_state.clone();
        Callback::from(move |_| {
            ui_state.set(ui_state.toggled());
        })
    };

    let view_item = {
        let ui_state = ui_state.clone();
        let push_route = push_route.clone();
        MenuItem {
            label: "View Property".into(),
            danger: false,
            on_select: Callback::from(move |_| {
                ui_state.set(CardUiState::Closed);
                push_route.emit(Route::PropertyDetail { id: property_id });
            }),
        }
    };

    let edit_item = {
        let ui_state = ui_state.clone();
        let push_route = push_route.clone();
        MenuItem {
            label: "Edit Property".into(),
            danger: false,
            on_select: Callback::from(move |_| {
                ui_state.set(CardUiState::Closed);
                push_route.emit(Route::EditProperty { id: property_id });
            }),
        }
    };

    let images_item = {
        let ui_state = ui_state.clone();
        let push_route = push_route.clone();
        MenuItem {
            label: "Manage Images".into(),
            danger: false,
            on_select: Callback::from(move |_| {
                ui_state.set(CardUiState::Closed);
                push_route.emit(Route::PropertyImages { id: property_id });
            }),
        }
    };

    let delete_item = {
        let ui_state = ui_state.clone();
        let delete_error = delete_error.clone();
        MenuItem {
            label: "Delete Property".into(),
            danger: true,
            on_select: Callback::from(move |_| {
                delete_error.set(None);
                ui_state.set(CardUiState::ConfirmingDelete);
            }),
        }
    };

    let on_delete_confirm = {
        let ui_state = ui_state.clone();
        let is_deleting = is_deleting.clone();
        let delete_error = delete_error.clone();
        let dispatch = dispatch.clone();
        let toast = toast.clone();

        Callback::from(move |_| {
            let ui_state = ui_state.clone();
            let is_deleting = is_deleting.clone();
            let delete_error = delete_error.clone();
            let dispatch = dispatch.clone();
            let toast = toast.clone();

            wasm_bindgen_futures::spawn_local(async move {
                is_deleting.set(true);
                delete_error.set(None);

                let api_client = get_api_client();
                match api_client.delete_property(&property_id).await {
                    Ok(()) => {
                        ui_state.set(CardUiState::Closed);
                        toast.success("Property deleted successfully!");
                        // Dropping the record unmounts this card
                        dispatch.reduce_mut(|s| s.remove_property(property_id));
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
        let ui_state = ui_state.clone();
        let is_deleting = is_deleting.clone();
        let delete_error = delete_error.clone();
        Callback::from(move |_| {
            if !*is_deleting {
                ui_state.set(CardUiState::Closed);
                delete_error.set(None);
            }
        })
    };

    html! {
        <>
            <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-sm mb-4 flex flex-col sm:flex-row">
                // Cover image
                <div class="w-full sm:w-48 h-48 sm:h-auto flex-shrink-0">
                    {match &cover_image_url {
                        Some(url) => html! {
                            <img
                                src={url.clone()}
                                alt={property.title.clone()}
                                class="w-full h-full object-cover rounded-t-lg sm:rounded-l-lg sm:rounded-tr-none"
                            />
                        },
                        None => html! {
                            <div class="w-full h-full bg-neutral-100 dark:bg-neutral-700 flex items-center justify-center text-sm text-neutral-500 dark:text-neutral-400">
                                {"No Image Available"}
                            </div>
                        },
                    }}
                </div>

                // Listing details
                <div class="flex-grow p-4 relative">
                    <div class="absolute top-4 right-4">
                        <OverflowMenu
                            open={ui_state.menu_open()}
                            on_toggle={on_menu_toggle}
                            items={vec![view_item, edit_item, images_item, delete_item]}
                            aria_label="Property actions"
                        />
                    </div>

                    <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 pr-10 mb-2">
                        {&property.title}
                    </h3>

                    <div class="flex items-center mb-2 text-sm text-neutral-600 dark:text-neutral-400">
                        {&property.location}
                    </div>

                    <div class="flex flex-wrap gap-2 mb-3">
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

                    <p class="text-lg font-bold text-neutral-900 dark:text-neutral-100 mb-3">
                        {format_price(&property.price, property.listing_type)}
                    </p>

                    <div class="flex justify-between mt-2 text-sm text-neutral-600 dark:text-neutral-400">
                        <div class="flex items-center">
                            {format!(
                                "{} {}",
                                property.bedrooms,
                                pluralize(property.bedrooms, "Bed", "Beds")
                            )}
                        </div>
                        <div class="flex items-center">
                            {format!(
                                "{} {}",
                                property.bathrooms,
                                pluralize(property.bathrooms, "Bath", "Baths")
                            )}
                        </div>
                        <div class="flex items-center">
                            {format_area(property.area)}
                        </div>
                    </div>
                </div>
            </div>

            // Delete confirmation dialog
            {if ui_state.confirming_delete() {
                html! {
                    <ConfirmationModal
                        title="Confirm Deletion"
                        message={format!(
                            "Are you sure you want to delete \"{}\"? This action cannot be undone.",
                            property.title
                        )}
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
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::CardUiState;

    #[test]
    fn odd_toggles_open_the_menu_even_toggles_close_it() {
        let mut state = CardUiState::default();
        for _ in 0..3 {
            state = state.toggled();
        }
        assert!(state.menu_open());

        let mut state = CardUiState::default();
        for _ in 0..4 {
            state = state.toggled();
        }
        assert_eq!(state, CardUiState::Closed);
    }

    #[test]
    fn every_menu_action_leaves_the_menu_closed() {
        // View / Edit / Manage Images all land here
        let after_navigation = CardUiState::Closed;
        assert!(!after_navigation.menu_open());

        // Delete moves to the confirmation dialog instead of firing
        let after_delete_select = CardUiState::ConfirmingDelete;
        assert!(!after_delete_select.menu_open());
        assert!(after_delete_select.confirming_delete());
    }

    #[test]
    fn toggle_does_not_dismiss_the_dialog() {
        assert_eq!(
            CardUiState::ConfirmingDelete.toggled(),
            CardUiState::ConfirmingDelete
        );
    }
}
