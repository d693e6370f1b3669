use super::state::SerialFilterState;
use crate::shared::icons::icon;
use contracts::usecases::u601_serial_filter::results::{NO_RESULTS_TEXT, TRUNCATION_HINT};
use contracts::usecases::u601_serial_filter::{
    FilterOutcome, ResultsBody, ResultsTable, ResultsView,
};
use leptos::prelude::*;

fn summary_card(label: &'static str, value: String, modifier: &'static str) -> impl IntoView {
    view! {
        <div class="summary-card">
            <p class="summary-card__label">{label}</p>
            <p class=format!("summary-card__value summary-card__value--{}", modifier)>{value}</p>
        </div>
    }
}

fn results_table(table: ResultsTable) -> impl IntoView {
    if let Some(row) = table.first_mismatch {
        log::warn!(
            "Result record #{} does not match columns {:?}; missing cells shown as \"-\"",
            row,
            table.columns
        );
    }

    let ResultsTable {
        title,
        headers,
        rows,
        truncated,
        ..
    } = table;

    view! {
        <div class="results__table-card">
            <h3 class="section-title section-title--small">{title}</h3>
            <div class="results__table-scroll">
                <table class="table">
                    <thead class="table__head">
                        <tr>
                            {headers
                                .into_iter()
                                .map(|header| view! { <th style="text-transform: capitalize;">{header}</th> })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|cells| view! {
                                <tr>
                                    {cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
            {truncated.then(|| view! { <p class="results__hint">{TRUNCATION_HINT}</p> })}
        </div>
    }
}

fn results_view(outcome: FilterOutcome) -> impl IntoView {
    let model = ResultsView::build(outcome.mode, &outcome.response);

    let body = match model.body {
        ResultsBody::SummaryOnly => ().into_any(),
        ResultsBody::NoResults => view! {
            <div class="results__empty">
                {icon("alert")}
                <p>{NO_RESULTS_TEXT}</p>
            </div>
        }
        .into_any(),
        ResultsBody::Table(table) => results_table(table).into_any(),
    };

    view! {
        <section class="results">
            <div class="serial-filter__section-header">
                {icon("file-text")}
                <h2 class="section-title">"Results"</h2>
            </div>
            <div class="results__summary">
                {summary_card(model.total_label, model.total.to_string(), "total")}
                {summary_card("Activated Serials", model.activated_count.to_string(), "activated")}
                {summary_card("Activation Rate", model.activation_rate, "rate")}
            </div>
            {body}
        </section>
    }
}

#[component]
pub fn ResultsPanel(state: SerialFilterState) -> impl IntoView {
    move || state.results().map(results_view)
}
