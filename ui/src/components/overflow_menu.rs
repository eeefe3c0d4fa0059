use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct MenuItem {
    pub label: AttrValue,
    pub on_select: Callback<()>,
    pub danger: bool,
}

/// Controlled kebab dropdown: the parent owns the open flag, so it can keep
/// the menu mutually exclusive with other per-item UI (e.g. a confirmation
/// dialog).
#[derive(Properties, PartialEq)]
pub struct Props {
    pub open: bool,
    /// Fired when the toggle button or the backdrop is clicked.
    pub on_toggle: Callback<()>,
    pub items: Vec<MenuItem>,
    #[prop_or_else(|| AttrValue::from("More options"))]
    pub aria_label: AttrValue,
}

#[function_component]
pub fn OverflowMenu(props: &Props) -> Html {
    // Don't render if no items
    if props.items.is_empty() {
        return html! {};
    }

    let on_toggle_click = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_toggle.emit(());
        })
    };

    let on_backdrop_click = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| {
            on_toggle.emit(());
        })
    };

    html! {
        <div class="relative">
            <button
                onclick={on_toggle_click}
                class="p-1 rounded-full hover:bg-neutral-100 \
                       dark:hover:bg-neutral-700 text-neutral-600 \
                       dark:text-neutral-400 transition-colors"
                aria-label={props.aria_label.clone()}
            >
                // Vertical ellipsis (kebab menu)
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    class="h-6 w-6"
                    viewBox="0 0 20 20"
                    fill="currentColor"
                >
                    <path d="M10 6a2 2 0 110-4 2 2 0 010 4zM10 12a2 2 0 110-4 2 2 0 010 4zM10 18a2 2 0 110-4 2 2 0 010 4z" />
                </svg>
            </button>

            {if props.open {
                html! {
                    <>
                        // Backdrop to catch clicks outside menu
                        <div
                            onclick={on_backdrop_click}
                            class="fixed inset-0 z-40"
                        />

                        // Menu dropdown
                        <div class="absolute right-0 mt-2 py-1 w-48 bg-white \
                                    dark:bg-neutral-800 rounded-md shadow-lg \
                                    border border-neutral-200 \
                                    dark:border-neutral-700 z-50">
                            {props.items.iter().map(|item| {
                                let on_select = item.on_select.clone();
                                let onclick = Callback::from(move |e: MouseEvent| {
                                    e.stop_propagation();
                                    on_select.emit(());
                                });

                                let text_class = if item.danger {
                                    "text-red-600 dark:text-red-400"
                                } else {
                                    "text-neutral-700 dark:text-neutral-300"
                                };

                                html! {
                                    <button
                                        onclick={onclick}
                                        class={format!(
                                            "flex items-center w-full px-4 py-2 \
                                             text-sm text-left \
                                             hover:bg-neutral-100 \
                                             dark:hover:bg-neutral-700 {}",
                                            text_class
                                        )}
                                    >
                                        {&item.label}
                                    </button>
                                }
                            }).collect::<Html>()}
                        </div>
                    </>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
