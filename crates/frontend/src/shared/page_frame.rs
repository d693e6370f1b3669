//! PageFrame — standard root wrapper for a page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  — `"{usecase}--{category}"`, e.g. `"u601_serial_filter--usecase"`
//!   - `data-page-category`  — one of the PAGE_CAT_* constants

use leptos::prelude::*;

/// Use-case / action page (upload, filtering, etc.).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Root wrapper that sets standard metadata on the page.
#[component]
pub fn PageFrame(
    /// Entity part of the id; the category is appended after `--`.
    #[prop(into)]
    entity: String,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "page".to_string()
    } else {
        format!("page {class}")
    };

    view! {
        <div
            id=format!("{entity}--{category}")
            class=full_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
