use super::filter_panel::FilterPanel;
use super::results_panel::ResultsPanel;
use super::state::SerialFilterState;
use super::upload_panel::UploadPanel;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_USECASE};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_serial_filter::SerialFilter;
use leptos::prelude::*;

#[component]
pub fn SerialFilterPage() -> impl IntoView {
    let state = SerialFilterState::new();

    // Проверить при монтировании, загружен ли уже набор данных
    Effect::new(move || {
        state.probe_status();
    });

    view! {
        <PageFrame entity=SerialFilter::full_name() category=PAGE_CAT_USECASE class="serial-filter">
            <div class="page__header">
                <h1 class="page__title">{SerialFilter::display_name()}</h1>
                <p class="page__subtitle">{SerialFilter::description()}</p>
            </div>

            <div class="page__content">
                <UploadPanel state=state />
                <FilterPanel state=state />

                {move || state.error().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">{icon("alert")}</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <ResultsPanel state=state />
            </div>
        </PageFrame>
    }
}
