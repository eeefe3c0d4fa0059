use payloads::{ListingType, requests, responses};
use rust_decimal::Decimal;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

const PROPERTY_TYPES: [&str; 5] =
    ["Apartment", "House", "Villa", "Studio", "Commercial"];

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Existing record to prefill when editing; None for the create form.
    #[prop_or_default]
    pub initial: Option<responses::Property>,
    /// Fired with a validated payload on submit.
    pub on_submit: Callback<requests::SaveProperty>,
    pub submit_label: AttrValue,
    #[prop_or_default]
    pub is_submitting: bool,
    /// Error from the submit attempt (e.g. backend rejection).
    #[prop_or_default]
    pub error_message: Option<AttrValue>,
}

/// Create/edit form for a listing. Numeric fields are kept as text while
/// editing and parsed on submit; payload-level checks come from
/// `SaveProperty::validation_errors`.
#[function_component]
pub fn PropertyForm(props: &Props) -> Html {
    let initial = props.initial.as_ref();

    let title = use_state(|| {
        initial.map(|p| p.title.clone()).unwrap_or_default()
    });
    let description = use_state(|| {
        initial
            .and_then(|p| p.description.clone())
            .unwrap_or_default()
    });
    let price = use_state(|| {
        initial.map(|p| p.price.to_string()).unwrap_or_default()
    });
    let location = use_state(|| {
        initial.map(|p| p.location.clone()).unwrap_or_default()
    });
    let bedrooms = use_state(|| {
        initial
            .map(|p| p.bedrooms.to_string())
            .unwrap_or_else(|| "0".to_string())
    });
    let bathrooms = use_state(|| {
        initial
            .map(|p| p.bathrooms.to_string())
            .unwrap_or_else(|| "0".to_string())
    });
    let area = use_state(|| {
        initial.map(|p| p.area.to_string()).unwrap_or_default()
    });
    let property_type = use_state(|| {
        initial
            .map(|p| p.property_type.clone())
            .unwrap_or_else(|| PROPERTY_TYPES[0].to_string())
    });
    let listing_type = use_state(|| {
        initial.map(|p| p.listing_type).unwrap_or(ListingType::Sale)
    });

    let validation_errors = use_state(Vec::<String>::new);

    let on_input = |target: &UseStateHandle<String>| {
        let target = target.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            target.set(input.value());
        })
    };

    let on_description_input = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    let on_property_type_change = {
        let property_type = property_type.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            property_type.set(select.value());
        })
    };

    let on_listing_type_change = {
        let listing_type = listing_type.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            listing_type.set(match select.value().as_str() {
                "Rent" => ListingType::Rent,
                _ => ListingType::Sale,
            });
        })
    };

    let onsubmit = {
        let title = title.clone();
        let description = description.clone();
        let price = price.clone();
        let location = location.clone();
        let bedrooms = bedrooms.clone();
        let bathrooms = bathrooms.clone();
        let area = area.clone();
        let property_type = property_type.clone();
        let listing_type = listing_type.clone();
        let validation_errors = validation_errors.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let parsed_price = price.trim().parse::<Decimal>();
            let parsed_bedrooms = bedrooms.trim().parse::<i32>();
            let parsed_bathrooms = bathrooms.trim().parse::<i32>();
            let parsed_area = area.trim().parse::<f64>();

            let mut errors = Vec::new();
            if parsed_price.is_err() {
                errors.push("Price must be a number".to_string());
            }
            if parsed_bedrooms.is_err() {
                errors.push("Bedrooms must be a whole number".to_string());
            }
            if parsed_bathrooms.is_err() {
                errors.push("Bathrooms must be a whole number".to_string());
            }
            if parsed_area.is_err() {
                errors.push("Area must be a number".to_string());
            }
            if !errors.is_empty() {
                validation_errors.set(errors);
                return;
            }

            let trimmed_description = description.trim();
            let details = requests::SaveProperty {
                title: title.trim().to_string(),
                description: if trimmed_description.is_empty() {
                    None
                } else {
                    Some(trimmed_description.to_string())
                },
                price: parsed_price.unwrap_or_default(),
                location: location.trim().to_string(),
                bedrooms: parsed_bedrooms.unwrap_or_default(),
                bathrooms: parsed_bathrooms.unwrap_or_default(),
                area: parsed_area.unwrap_or_default(),
                property_type: (*property_type).clone(),
                listing_type: *listing_type,
            };

            let payload_errors = details.validation_errors();
            if !payload_errors.is_empty() {
                validation_errors.set(
                    payload_errors.iter().map(|e| e.to_string()).collect(),
                );
                return;
            }

            validation_errors.set(Vec::new());
            on_submit.emit(details);
        })
    };

    let text_input_class = "w-full px-3 py-2 text-sm border border-neutral-300 \
                            dark:border-neutral-600 rounded-md bg-white \
                            dark:bg-neutral-700 text-neutral-900 \
                            dark:text-neutral-100 focus:outline-none \
                            focus:ring-2 focus:ring-neutral-500";
    let label_class = "block text-sm font-medium text-neutral-700 \
                       dark:text-neutral-300 mb-1";

    html! {
        <form onsubmit={onsubmit} class="space-y-4">
            {if !validation_errors.is_empty() {
                html! {
                    <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                        <ul class="text-sm text-red-700 dark:text-red-400 list-disc list-inside">
                            {for validation_errors.iter().map(|error| html! {
                                <li>{error}</li>
                            })}
                        </ul>
                    </div>
                }
            } else {
                html! {}
            }}

            if let Some(error) = &props.error_message {
                <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                    <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                </div>
            }

            <div>
                <label class={label_class}>{"Title"}</label>
                <input
                    type="text"
                    value={(*title).clone()}
                    oninput={on_input(&title)}
                    class={text_input_class}
                />
            </div>

            <div>
                <label class={label_class}>{"Description"}</label>
                <textarea
                    value={(*description).clone()}
                    oninput={on_description_input}
                    rows="4"
                    class={text_input_class}
                />
            </div>

            <div>
                <label class={label_class}>{"Location"}</label>
                <input
                    type="text"
                    value={(*location).clone()}
                    oninput={on_input(&location)}
                    class={text_input_class}
                />
            </div>

            <div class="grid grid-cols-2 gap-4">
                <div>
                    <label class={label_class}>{"Listing type"}</label>
                    <select
                        onchange={on_listing_type_change}
                        class={text_input_class}
                    >
                        <option value="Sale" selected={!listing_type.is_rent()}>{"Sale"}</option>
                        <option value="Rent" selected={listing_type.is_rent()}>{"Rent"}</option>
                    </select>
                </div>
                <div>
                    <label class={label_class}>{"Property type"}</label>
                    <select
                        onchange={on_property_type_change}
                        class={text_input_class}
                    >
                        {for PROPERTY_TYPES.iter().map(|kind| html! {
                            <option
                                value={*kind}
                                selected={*kind == property_type.as_str()}
                            >
                                {*kind}
                            </option>
                        })}
                    </select>
                </div>
            </div>

            <div class="grid grid-cols-2 sm:grid-cols-4 gap-4">
                <div>
                    <label class={label_class}>{"Price (USD)"}</label>
                    <input
                        type="text"
                        inputmode="decimal"
                        value={(*price).clone()}
                        oninput={on_input(&price)}
                        class={text_input_class}
                    />
                </div>
                <div>
                    <label class={label_class}>{"Bedrooms"}</label>
                    <input
                        type="text"
                        inputmode="numeric"
                        value={(*bedrooms).clone()}
                        oninput={on_input(&bedrooms)}
                        class={text_input_class}
                    />
                </div>
                <div>
                    <label class={label_class}>{"Bathrooms"}</label>
                    <input
                        type="text"
                        inputmode="numeric"
                        value={(*bathrooms).clone()}
                        oninput={on_input(&bathrooms)}
                        class={text_input_class}
                    />
                </div>
                <div>
                    <label class={label_class}>{"Area (m²)"}</label>
                    <input
                        type="text"
                        inputmode="decimal"
                        value={(*area).clone()}
                        oninput={on_input(&area)}
                        class={text_input_class}
                    />
                </div>
            </div>

            <div class="flex justify-end">
                <button
                    type="submit"
                    disabled={props.is_submitting}
                    class="px-4 py-2 text-sm font-medium text-white bg-neutral-900 \
                           hover:bg-neutral-700 dark:bg-neutral-100 dark:text-neutral-900 \
                           dark:hover:bg-neutral-300 rounded-md \
                           disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                >
                    {if props.is_submitting { "Saving..." } else { &props.submit_label }}
                </button>
            </div>
        </form>
    }
}
