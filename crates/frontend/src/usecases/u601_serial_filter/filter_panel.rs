use super::state::SerialFilterState;
use crate::shared::icons::icon;
use contracts::usecases::u601_serial_filter::SearchMode;
use leptos::prelude::*;
use thaw::*;

fn mode_icon(mode: SearchMode) -> AnyView {
    match mode {
        SearchMode::Serial => icon("search"),
        SearchMode::Retailer => icon("user"),
    }
}

#[component]
fn ModeTab(state: SerialFilterState, mode: SearchMode, label: &'static str) -> impl IntoView {
    view! {
        <button
            class=move || if state.search_mode.get() == mode {
                "mode-tab mode-tab--active"
            } else {
                "mode-tab"
            }
            on:click=move |_| state.set_mode(mode)
        >
            {mode_icon(mode)}
            " "
            {label}
        </button>
    }
}

/// Текстовое поле, связанное с сигналом
#[component]
fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    placeholder: &'static str,
    #[prop(optional)] hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {hint.map(|h| view! { <p class="form__hint">{h}</p> })}
        </div>
    }
}

#[component]
fn DateField(label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type="date"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

const SERIAL_HINT: &str = "Enter only the numeric part (without \"SERIAL_\" prefix)";

#[component]
pub fn FilterPanel(state: SerialFilterState) -> impl IntoView {
    view! {
        <section class="serial-filter__section">
            <div class="mode-tabs">
                <ModeTab state=state mode=SearchMode::Serial label="Search by Serial Range" />
                <ModeTab state=state mode=SearchMode::Retailer label="Search by Retailer" />
            </div>

            <div class="serial-filter__section-header">
                {move || mode_icon(state.search_mode.get())}
                <h2 class="section-title">{move || state.search_mode.get().heading()}</h2>
            </div>

            {move || match state.search_mode.get() {
                SearchMode::Serial => view! {
                    <div class="form__grid">
                        <TextField
                            label="Start Serial Number"
                            value=state.start_serial
                            placeholder="8925403506100176553"
                            hint=SERIAL_HINT
                        />
                        <TextField
                            label="End Serial Number"
                            value=state.end_serial
                            placeholder="8925403506100176800"
                            hint=SERIAL_HINT
                        />
                    </div>
                }.into_any(),
                SearchMode::Retailer => view! {
                    <TextField
                        label="Retailer MSISDN"
                        value=state.retailer_msisdn
                        placeholder="Enter retailer MSISDN"
                    />
                }.into_any(),
            }}

            <div class="date-filter">
                <div class="date-filter__header">
                    {icon("calendar")}
                    <h3 class="section-title section-title--small">"Date Filter (Optional)"</h3>
                </div>
                <div class="form__grid">
                    <DateField label="Start Date" value=state.start_date />
                    <DateField label="End Date" value=state.end_date />
                </div>
            </div>

            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| state.submit_filter()
                disabled=Signal::derive(move || state.loading() || !state.is_loaded())
            >
                {move || if state.loading() {
                    view! { <>{icon("loader")}" Filtering..."</> }.into_any()
                } else {
                    let mode = state.search_mode.get();
                    view! { <>{mode_icon(mode)}" "{mode.submit_label()}</> }.into_any()
                }}
            </Button>
        </section>
    }
}
