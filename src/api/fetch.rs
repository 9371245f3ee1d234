use js_sys::{Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, FormData, Headers, Request, RequestInit, Response};

use crate::api::transport::{ApiRequest, ApiResponse, RequestBody, Transport, UploadFile};
use crate::config::Config;
use crate::error::ApiError;

/// `Transport` backed by the browser's `window.fetch`.
#[derive(Debug, Clone)]
pub struct FetchTransport {
    config: Config,
}

impl FetchTransport {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn build_request(&self, request: &ApiRequest) -> Result<Request, JsValue> {
        let headers = Headers::new()?;
        if let Some(token) = &request.bearer {
            headers.set("Authorization", &format!("Bearer {}", token))?;
        }

        let init = RequestInit::new();
        init.set_method(request.method.as_str());

        match &request.body {
            RequestBody::Empty => {}
            RequestBody::Json(value) => {
                headers.set("Content-Type", "application/json")?;
                init.set_body(&JsValue::from_str(&value.to_string()));
            }
            RequestBody::Multipart {
                file_field,
                file,
                fields,
            } => {
                // Content-Type is left to the browser so it can add the boundary.
                let form = FormData::new()?;
                let parts = Array::of1(&Uint8Array::from(file.bytes.as_slice()));
                let blob = Blob::new_with_u8_array_sequence(&parts)?;
                form.append_with_blob_and_filename(file_field, &blob, &file.name)?;
                for (name, value) in fields {
                    form.append_with_str(name, value)?;
                }
                init.set_body(&form);
            }
        }
        init.set_headers(&headers);

        Request::new_with_str_and_init(&self.config.endpoint(&request.path), &init)
    }
}

impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
        let req = self.build_request(&request).map_err(network_err)?;

        let resp_value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(network_err)?;
        let resp: Response = resp_value.dyn_into().map_err(network_err)?;

        let text = JsFuture::from(resp.text().map_err(network_err)?)
            .await
            .map_err(network_err)?;

        Ok(ApiResponse::new(resp.status(), text.as_string().unwrap_or_default()))
    }
}

fn network_err(e: JsValue) -> ApiError {
    let msg = e
        .as_string()
        .or_else(|| {
            e.dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| "Unknown error".to_string());
    ApiError::Network(msg)
}

/// Read a browser `File` into memory so it can cross the `Transport` seam.
pub async fn read_upload_file(file: web_sys::File) -> Result<UploadFile, ApiError> {
    let name = file.name();
    let buf = JsFuture::from(file.array_buffer())
        .await
        .map_err(network_err)?;
    let bytes = Uint8Array::new(&buf).to_vec();
    Ok(UploadFile { name, bytes })
}
