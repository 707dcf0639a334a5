//! Error boundaries for render failures.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("render error in {}: {:?}", boundary_name.read(), err);
                rsx! {
                    h1 {
                        style: "color:#B91C1C; font-size: 40px; border: 1px solid #B91C1C; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Something went wrong",
                    }
                    p {
                        style: "color:#7F1D1D; font-size: 20px; margin: 15px;",
                        "Boundary: {boundary_name}"
                    }
                    Link {
                        to: Route::HomePage {},
                        style: "color:#4F46E5; font-size: 20px; border: 1px solid #4F46E5; padding: 10px; border-radius: 5px; margin: 15px; display: inline-block;",
                        "Back to tables"
                    }
                    pre {
                        style: "color:black; border: 1px solid #B91C1C; padding: 10px; border-radius: 5px; margin: 15px; text-wrap: auto;",
                        "{err:#?}"
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        title: "Could not load this part of the page".to_string(),
                        error_txt,
                        button {
                            style: "color:#4F46E5; font-size: 16px; border: 1px solid #4F46E5; background: white; padding: 8px 14px; border-radius: 5px; margin: 10px; cursor: pointer;",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try again"
                        }
                    }
                }
            },
            {children}
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(title: ReadSignal<String>, error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            padding: "10px",

            div {
                style: "color:#B91C1C; font-size: 20px; font-weight: 500; margin: 5px;",
                "{title}",
            }

            pre {
                style: "color:#7F1D1D; border: 1px solid #FCA5A5; padding: 10px; border-radius: 5px; margin: 5px; text-wrap: auto; max-width: 600px; max-height: 300px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
