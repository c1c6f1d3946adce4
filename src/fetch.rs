//! One-shot GET of a slider's values.

use range_core::{
    parse_fixed_values, parse_range_values, FixedRangeValues, PayloadError, RangeValues,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn request_error(url: &str, what: impl std::fmt::Debug) -> PayloadError {
    PayloadError::Request(format!("{}: {:?}", url, what))
}

async fn fetch_text(url: &str) -> Result<String, PayloadError> {
    let window = web::window().ok_or_else(|| request_error(url, "no window"))?;
    let pending: js_sys::Promise = window.fetch_with_str(url);
    let resp = JsFuture::from(pending)
        .await
        .map_err(|e| request_error(url, e))?
        .dyn_into::<web::Response>()
        .map_err(|e| request_error(url, e))?;
    if !resp.ok() {
        return Err(PayloadError::Request(format!(
            "{}: HTTP {}",
            url,
            resp.status()
        )));
    }
    let body: js_sys::Promise = resp.text().map_err(|e| request_error(url, e))?;
    JsFuture::from(body)
        .await
        .map_err(|e| request_error(url, e))?
        .as_string()
        .ok_or_else(|| PayloadError::Malformed(format!("{}: body is not text", url)))
}

pub async fn fetch_range_values(url: &str) -> Result<RangeValues, PayloadError> {
    log::info!("[fetch] range values from {}", url);
    parse_range_values(&fetch_text(url).await?)
}

pub async fn fetch_fixed_values(url: &str) -> Result<FixedRangeValues, PayloadError> {
    log::info!("[fetch] fixed values from {}", url);
    parse_fixed_values(&fetch_text(url).await?)
}
