use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::FetchState;

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// Handles the common pattern of:
    /// - No data + loading: "Loading {context}..." placeholder
    /// - No data + error: error panel with "Error loading {context}: ..."
    /// - Has data: call the render function with (data, is_loading, error),
    ///   where the latter two describe a refetch in progress while stale
    ///   data is still shown
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// property_hook.render("property", |property, _, _| html! {
    ///     <PropertyDetails property={property.clone()} />
    /// })
    /// ```
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool, Option<&String>) -> Html,
    {
        match self.data.as_ref() {
            None => {
                if self.is_loading {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("Loading {}...", context)}
                            </p>
                        </div>
                    }
                } else if let Some(error) = &self.error {
                    html! {
                        <div class="p-4 rounded-md bg-red-50 \
                                   dark:bg-red-900/20 border \
                                   border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700 \
                                      dark:text-red-400">
                                {format!("Error loading {}: {}", context, error)}
                            </p>
                        </div>
                    }
                } else {
                    // Shouldn't happen: no data, not loading, no error
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("No {} found", context)}
                            </p>
                        </div>
                    }
                }
            }
            Some(data) => render_fn(data, self.is_loading, self.error.as_ref()),
        }
    }
}

/// Generic fetch hook composer.
///
/// Automatically fetches on mount and provides refetch capability.
/// The fetch function captures dependencies from the closure, and the
/// deps parameter is used only for dependency tracking in use_callback
/// and use_effect_with.
///
/// # Example
///
/// ```rust,ignore
/// #[hook]
/// pub fn use_property_images(
///     property_id: PropertyId,
/// ) -> FetchHookReturn<Vec<responses::PropertyImage>> {
///     use_fetch(property_id, move || async move {
///         let api_client = get_api_client();
///         api_client
///             .list_property_images(&property_id)
///             .await
///             .map_err(|e| e.to_string())
///     })
/// }
/// ```
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let data = use_state(|| FetchState::NotFetched);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let refetch = {
        let data = data.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_, _| {
            let data = data.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            let fetch_fn = fetch_fn.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                match fetch_fn().await {
                    Ok(result) => {
                        data.set(FetchState::Fetched(result));
                        error.set(None);
                    }
                    Err(e) => {
                        error.set(Some(e));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    // Auto-fetch on mount and when deps change
    {
        let refetch = refetch.clone();
        let is_loading_clone = is_loading.clone();

        use_effect_with(deps, move |_| {
            if !*is_loading_clone {
                refetch.emit(());
            }
        });
    }

    FetchHookReturn {
        data: (*data).clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}

/// Generic fetch hook with global state caching support.
///
/// Like `use_fetch`, but for hooks that keep their data in the yewdux
/// store rather than in hook-local state. Takes three closures:
///
/// 1. `get_cached`: retrieves cached data from the store
/// 2. `should_fetch`: determines whether a fetch is needed on mount
/// 3. `fetch_and_cache`: performs the API call and updates the store
///
/// Cached data is surfaced through `FetchState` so callers can tell "not
/// fetched" apart from "fetched but empty".
#[hook]
pub fn use_fetch_with_cache<T, D, GetCached, ShouldFetch, FetchAndCache, Fut>(
    deps: D,
    get_cached: GetCached,
    should_fetch: ShouldFetch,
    fetch_and_cache: FetchAndCache,
) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    GetCached: Fn() -> Option<T> + 'static,
    ShouldFetch: Fn() -> bool + 'static,
    FetchAndCache: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let refetch = {
        let error = error.clone();
        let is_loading = is_loading.clone();
        let fetch_and_cache = Rc::new(fetch_and_cache);

        use_callback(deps.clone(), move |_, _| {
            let error = error.clone();
            let is_loading = is_loading.clone();
            let fetch_and_cache = fetch_and_cache.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                match fetch_and_cache().await {
                    Ok(_) => {
                        error.set(None);
                    }
                    Err(e) => {
                        error.set(Some(e));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    // Auto-fetch on mount if should_fetch returns true
    {
        let refetch = refetch.clone();
        let is_loading_clone = is_loading.clone();
        let should_fetch = Rc::new(should_fetch);

        use_effect_with(deps.clone(), move |_| {
            if should_fetch() && !*is_loading_clone {
                refetch.emit(());
            }
        });
    }

    let data = match get_cached() {
        Some(cached) => FetchState::Fetched(cached),
        None => FetchState::NotFetched,
    };

    // Treat the pre-first-fetch render as loading so callers show a
    // placeholder instead of "not found"
    let effective_is_loading =
        *is_loading || (!data.is_fetched() && error.is_none());

    FetchHookReturn {
        data,
        is_loading: effective_is_loading,
        error: (*error).clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
