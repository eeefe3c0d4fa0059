use payloads::requests;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::PropertyForm;
use crate::contexts::toast::use_toast;
use crate::hooks::use_push_route;
use crate::state::State;
use crate::{Route, get_api_client};

#[function_component]
pub fn CreatePropertyPage() -> Html {
    let push_route = use_push_route();
    let toast = use_toast();
    let (_state, dispatch) = use_store::<State>();
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    let on_submit = {
        let push_route = push_route.clone();
        let toast = toast.clone();
        let dispatch = dispatch.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();

        Callback::from(move |details: requests::SaveProperty| {
            let push_route = push_route.clone();
            let toast = toast.clone();
            let dispatch = dispatch.clone();
            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();

            wasm_bindgen_futures::spawn_local(async move {
                is_submitting.set(true);
                error_message.set(None);

                let api_client = get_api_client();
                match api_client.create_property(&details).await {
                    Ok(property) => {
                        let id = property.id;
                        dispatch.reduce_mut(|s| s.add_property(property));
                        toast.success("Property created successfully.");
                        push_route.emit(Route::PropertyDetail { id });
                    }
                    Err(e) => {
                        error_message.set(Some(e.to_string()));
                    }
                }

                is_submitting.set(false);
            });
        })
    };

    html! {
        <div class="max-w-2xl">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-6">
                {"Add Property"}
            </h1>
            <PropertyForm
                on_submit={on_submit}
                submit_label="Create Property"
                is_submitting={*is_submitting}
                error_message={(*error_message).clone().map(AttrValue::from)}
            />
        </div>
    }
}
