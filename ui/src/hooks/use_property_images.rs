use payloads::{PropertyId, responses};
use yew::prelude::*;

use crate::{get_api_client, hooks::use_fetch};

use super::FetchHookReturn;

/// Hook to fetch the images attached to a property, keyed on its id.
/// Backend order is preserved; the first element is the cover image.
#[hook]
pub fn use_property_images(
    property_id: PropertyId,
) -> FetchHookReturn<Vec<responses::PropertyImage>> {
    use_fetch(property_id, move || async move {
        let api_client = get_api_client();
        api_client
            .list_property_images(&property_id)
            .await
            .map_err(|e| e.to_string())
    })
}
