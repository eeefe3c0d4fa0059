use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmationModalProps {
    /// Modal title (e.g., "Confirm Deletion")
    pub title: AttrValue,
    /// Message explaining what is about to happen
    pub message: AttrValue,
    /// Confirm button text (e.g., "Delete")
    pub confirm_text: AttrValue,
    /// Called when user confirms the action
    pub on_confirm: Callback<()>,
    /// Called when user cancels or clicks backdrop
    pub on_close: Callback<()>,
    /// Whether the confirmed operation is in flight
    #[prop_or_default]
    pub is_loading: bool,
    /// Error message to display
    #[prop_or_default]
    pub error_message: Option<AttrValue>,
}

#[function_component]
pub fn ConfirmationModal(props: &ConfirmationModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(backdrop_element) =
                backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>()
                    == Some(&backdrop_element)
            {
                on_close.emit(());
            }
        })
    };

    let on_confirm_click = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| {
            on_confirm.emit(());
        })
    };

    let on_cancel_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    html! {
        <div
            ref={backdrop_ref.clone()}
            onclick={on_backdrop_click}
            class="fixed inset-0 bg-neutral-900 bg-opacity-50 z-50 flex items-center justify-center p-4"
            role="dialog"
            aria-modal="true"
        >
            <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-xl max-w-md w-full p-6">
                <div class="flex items-start gap-4">
                    <div class="flex-shrink-0 flex items-center justify-center h-10 w-10 rounded-full bg-red-100 dark:bg-red-900/40">
                        // Warning triangle
                        <svg
                            xmlns="http://www.w3.org/2000/svg"
                            class="h-6 w-6 text-red-600 dark:text-red-400"
                            viewBox="0 0 20 20"
                            fill="currentColor"
                        >
                            <path
                                fill-rule="evenodd"
                                d="M8.257 3.099c.765-1.36 2.722-1.36 3.486 0l5.58 9.92c.75 1.334-.213 2.98-1.742 2.98H4.42c-1.53 0-2.493-1.646-1.743-2.98l5.58-9.92zM11 13a1 1 0 11-2 0 1 1 0 012 0zm-1-8a1 1 0 00-1 1v3a1 1 0 002 0V6a1 1 0 00-1-1z"
                                clip-rule="evenodd"
                            />
                        </svg>
                    </div>
                    <div>
                        <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 mb-2">
                            {&props.title}
                        </h3>
                        <p class="text-sm text-neutral-600 dark:text-neutral-400">
                            {&props.message}
                        </p>
                    </div>
                </div>

                if let Some(error) = &props.error_message {
                    <div class="mt-4 text-sm text-red-600 dark:text-red-400">
                        {error}
                    </div>
                }

                <div class="flex justify-end gap-3 mt-6">
                    <button
                        onclick={on_cancel_click}
                        disabled={props.is_loading}
                        class="px-4 py-2 text-sm font-medium text-neutral-700 dark:text-neutral-300
                               bg-white dark:bg-neutral-700 border border-neutral-300 dark:border-neutral-600
                               rounded-md hover:bg-neutral-50 dark:hover:bg-neutral-600
                               disabled:opacity-50 disabled:cursor-not-allowed
                               transition-colors"
                    >
                        {"Cancel"}
                    </button>
                    <button
                        onclick={on_confirm_click}
                        disabled={props.is_loading}
                        class="px-4 py-2 text-sm font-medium text-white
                               bg-red-600 hover:bg-red-700 dark:bg-red-700 dark:hover:bg-red-600
                               rounded-md disabled:opacity-50 disabled:cursor-not-allowed
                               transition-colors"
                    >
                        {if props.is_loading { "Processing..." } else { &props.confirm_text }}
                    </button>
                </div>
            </div>
        </div>
    }
}
