use contracts::usecases::u601_serial_filter::{
    parse_reply, ApiError, FilterRequest, FilterResponse, StatusResponse, UploadResponse,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::shared::api_utils::api_url;

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Читает тело ответа и проверяет статус и поле `error`
async fn read_reply<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let ok = response.ok();
    log::debug!("Response status: {} {}", response.status(), response.url());

    let body = response.text().await.map_err(transport)?;
    parse_reply(ok, &body)
}

/// Есть ли на backend уже загруженный набор данных
pub async fn get_status() -> Result<StatusResponse, ApiError> {
    let response = Request::get(&api_url("/status"))
        .send()
        .await
        .map_err(transport)?;

    read_reply(response).await
}

/// Загрузить Excel-файл (multipart, поле `file`)
pub async fn upload_file(file: web_sys::File) -> Result<UploadResponse, ApiError> {
    let form_data =
        web_sys::FormData::new().map_err(|e| ApiError::Transport(format!("{e:?}")))?;
    form_data
        .append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|e| ApiError::Transport(format!("{e:?}")))?;

    let url = api_url("/upload");
    log::debug!("Uploading {} ({} bytes) to {}", file.name(), file.size(), url);

    let response = Request::post(&url)
        .body(form_data)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;

    read_reply(response).await
}

/// Отфильтровать серийные номера по диапазону или ретейлеру
pub async fn filter(request: &FilterRequest) -> Result<FilterResponse, ApiError> {
    let url = api_url(request.endpoint());
    let body = request.to_json();
    log::debug!("Sending request to: {}", url);
    log::debug!("Request body: {}", body);

    let response = Request::post(&url)
        .json(&body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;

    read_reply(response).await
}
