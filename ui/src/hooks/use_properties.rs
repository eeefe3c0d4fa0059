use payloads::responses;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::state::State;
use crate::{
    get_api_client,
    hooks::{FetchHookReturn, use_fetch_with_cache},
};

/// Hook to fetch the properties managed through this dashboard.
/// Results are cached in the global store so navigating between pages
/// doesn't refetch.
#[hook]
pub fn use_properties() -> FetchHookReturn<Vec<responses::Property>> {
    let (state, dispatch) = use_store::<State>();

    use_fetch_with_cache(
        (),
        {
            let state = state.clone();
            move || state.get_properties()
        },
        move || !state.has_properties_loaded(),
        move || {
            let dispatch = dispatch.clone();
            async move {
                let api_client = get_api_client();
                let properties = api_client
                    .list_properties()
                    .await
                    .map_err(|e| e.to_string())?;
                dispatch.reduce_mut(|s| s.set_properties(properties.clone()));
                Ok(properties)
            }
        },
    )
}
