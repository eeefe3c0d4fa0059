use payloads::{APIClient, PropertyId};
use yew::prelude::*;
use yew_router::prelude::*;

mod logs;

pub mod components;
pub mod contexts;
pub mod hooks;
pub mod pages;
pub mod state;
pub mod utils;

use components::ToastContainer;
use contexts::toast::ToastProvider;
use pages::{
    CreatePropertyPage, EditPropertyPage, ManagePropertiesPage, NotFoundPage,
    PropertyDetailPage, PropertyImagesPage,
};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            // Fallback to same origin (current setup)
            let window = web_sys::window().unwrap();
            let location = window.location();
            location.origin().unwrap()
        });

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <ToastProvider>
                <div class="min-h-screen bg-neutral-50 dark:bg-neutral-900 text-neutral-900 dark:text-neutral-100 transition-colors">
                    <Switch<Route> render={switch} />
                </div>
                <ToastContainer />
            </ToastProvider>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/properties")]
    Properties,
    #[at("/properties/new")]
    CreateProperty,
    #[at("/properties/:id")]
    PropertyDetail { id: PropertyId },
    #[at("/properties/:id/edit")]
    EditProperty { id: PropertyId },
    #[at("/properties/:id/images")]
    PropertyImages { id: PropertyId },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    let page = match routes {
        Route::Home => {
            return html! { <Redirect<Route> to={Route::Properties} /> };
        }
        Route::Properties => html! { <ManagePropertiesPage /> },
        Route::CreateProperty => html! { <CreatePropertyPage /> },
        Route::PropertyDetail { id } => {
            html! { <PropertyDetailPage property_id={id} /> }
        }
        Route::EditProperty { id } => {
            html! { <EditPropertyPage property_id={id} /> }
        }
        Route::PropertyImages { id } => {
            html! { <PropertyImagesPage property_id={id} /> }
        }
        Route::NotFound => html! { <NotFoundPage /> },
    };
    html! {
        <main class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            {page}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_routes_render_expected_paths() {
        let id = PropertyId(42);
        assert_eq!(Route::PropertyDetail { id }.to_path(), "/properties/42");
        assert_eq!(
            Route::EditProperty { id }.to_path(),
            "/properties/42/edit"
        );
        assert_eq!(
            Route::PropertyImages { id }.to_path(),
            "/properties/42/images"
        );
    }

    #[test]
    fn static_routes_keep_their_paths() {
        assert_eq!(Route::Properties.to_path(), "/properties");
        assert_eq!(Route::CreateProperty.to_path(), "/properties/new");
    }
}
