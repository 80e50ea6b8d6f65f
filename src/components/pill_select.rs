// NOTE: The `#[component]` macro is deriving `PartialEq`, but not `Eq` (since that's not needed), and clippy is
// complaining about that. This needs to be a module-level `#![expect(...)]` since I can't actually place an
// `#[expect(...)]` inside of the `#[component]` macro
#![expect(clippy::derive_partial_eq_without_eq)]

use dioxus::prelude::*;

use sync_picker::{fl, labels::LabeledOption};

/// Colour scheme for the pill button.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum PillVariant {
    #[default]
    Grey,
    Green,
    Red,
}

impl PillVariant {
    const fn color_class(self) -> &'static str {
        match self {
            Self::Grey => "btn-ghost bg-base-200",
            Self::Green => "btn-success",
            Self::Red => "btn-error",
        }
    }
}

#[component]
pub fn PillSelect<T: Clone + PartialEq + 'static>(
    options: ReadOnlySignal<Vec<LabeledOption<T>>>,
    selected: ReadOnlySignal<Option<T>>,
    onselect: Option<EventHandler<LabeledOption<T>>>,
    #[props(default)] variant: PillVariant,
) -> Element {
    let mut open = use_signal(|| false);

    // A `selected` value that matches none of the options (or one that's only half-decided upstream) just means
    // nothing is highlighted and the pill falls back to its placeholder
    let button_text = use_memo(move || {
        options()
            .into_iter()
            .find(|option| Some(&option.value) == selected().as_ref())
            .map_or_else(|| fl!("pill-select-placeholder"), |option| option.label)
    });

    let color_class = variant.color_class();

    rsx! {
        div { class: "dropdown",
            button {
                class: "btn btn-sm rounded-full {color_class}",
                r#type: "button",
                onclick: move |_| open.set(!open()),

                {button_text}
            }

            if open() {
                ul { class: "dropdown-content menu bg-base-100 rounded-box shadow-md",
                    {options().into_iter().map(|option| {
                        let label = option.label.clone();
                        let active_class = if Some(&option.value) == selected().as_ref() {
                            "menu-active"
                        } else {
                            ""
                        };

                        rsx! {
                            li {
                                button {
                                    class: "{active_class}",
                                    r#type: "button",
                                    onclick: move |_| {
                                        open.set(false);
                                        if let Some(onselect) = onselect {
                                            onselect.call(option.clone());
                                        }
                                    },

                                    {label}
                                }
                            }
                        }
                    })}
                }
            }
        }
    }
}
