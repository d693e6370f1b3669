use super::state::SerialFilterState;
use crate::shared::date_utils::format_unix_seconds;
use crate::shared::icons::icon;
use contracts::usecases::u601_serial_filter::UploadPhase;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
pub fn UploadPanel(state: SerialFilterState) -> impl IntoView {
    let phase = Memo::new(move |_| state.upload_phase());

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                state.accept_file(file);
            }
            // иначе повторный выбор того же файла не вызовет change
            input.set_value("");
        }
    };

    let handle_drag_over = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        state.is_dragging.set(true);
    };

    let handle_drag_leave = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        state.is_dragging.set(false);
    };

    let handle_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        state.is_dragging.set(false);

        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            state.accept_file(file);
        }
    };

    view! {
        <section class="serial-filter__section">
            <div class="serial-filter__section-header">
                {icon("upload")}
                <div>
                    <h2 class="section-title">"Upload Excel File"</h2>
                    <p class="section-subtitle">"Upload your monthly serial numbers Excel file (.xlsx, .xls)"</p>
                </div>
            </div>

            <div
                class=move || if state.is_dragging.get() {
                    "drop-zone drop-zone--active"
                } else {
                    "drop-zone"
                }
                on:dragover=handle_drag_over
                on:dragleave=handle_drag_leave
                on:drop=handle_drop
            >
                {move || match (phase.get(), state.selected_file()) {
                    (UploadPhase::FileSelected | UploadPhase::Uploading, Some(file)) => view! {
                        <div class="drop-zone__file">
                            <div class="drop-zone__file-icon">{icon("file")}</div>
                            <div class="drop-zone__file-info">
                                <p class="drop-zone__file-name">{file.name.clone()}</p>
                                <p class="drop-zone__file-size">{file.display_size()}</p>
                            </div>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| state.remove_file()
                                disabled=Signal::derive(move || state.upload_loading())
                            >
                                {icon("x")}
                            </Button>
                        </div>
                    }.into_any(),
                    _ => view! {
                        <div class="drop-zone__empty">
                            {icon("upload")}
                            <p class="drop-zone__title">"Drag and drop your Excel file here"</p>
                            <p class="drop-zone__or">"or"</p>
                            <label class="button button--primary" for="serial-filter-file-input">
                                {icon("upload")}
                                " Browse Files"
                            </label>
                            <input
                                id="serial-filter-file-input"
                                type="file"
                                accept=".xlsx,.xls"
                                on:change=handle_file_select
                                class="hidden"
                            />
                            <p class="drop-zone__hint">"Supported formats: .xlsx, .xls (Max size: 16MB)"</p>
                        </div>
                    }.into_any(),
                }}
            </div>

            <Show when=move || matches!(phase.get(), UploadPhase::FileSelected | UploadPhase::Uploading)>
                <div class="serial-filter__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| state.upload()
                        disabled=Signal::derive(move || state.upload_loading())
                    >
                        {move || if state.upload_loading() {
                            view! { <>{icon("loader")}" Uploading..."</> }.into_any()
                        } else {
                            view! { <>{icon("upload")}" Upload File"</> }.into_any()
                        }}
                    </Button>
                </div>
            </Show>

            {move || state.upload_status().filter(|s| s.loaded).map(|status| {
                let last_modified = status.last_modified.and_then(format_unix_seconds);
                let columns = (!status.columns.is_empty()).then(|| status.columns.join(", "));
                view! {
                    <div class="success-box">
                        <span class="success-box__icon">{icon("check")}</span>
                        <div class="success-box__text">
                            <p class="success-box__title">"File uploaded successfully!"</p>
                            {status.rows_caption().map(|caption| view! { <p>{caption}</p> })}
                            {last_modified.map(|ts| view! { <p class="text-muted">"Last modified: " {ts}</p> })}
                            {columns.map(|cols| view! { <p class="text-muted">"Columns: " {cols}</p> })}
                        </div>
                    </div>
                }
            })}
        </section>
    }
}
