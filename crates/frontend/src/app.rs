use crate::usecases::u601_serial_filter::SerialFilterPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SerialFilterPage />
    }
}
