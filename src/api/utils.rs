use log::{debug, warn};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{Error, Result};

/// Ordered query parameters of a request.
pub type QueryParams = Vec<(&'static str, String)>;

pub fn build_url(base_url: &str, path: &str, params: &[(&str, String)]) -> Result<Url> {
    let raw = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    let mut url = Url::parse(&raw)
        .map_err(|e| Error::Config(format!("Invalid request URL '{}': {}", raw, e)))?;

    if !params.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(key, value)| (*key, value.as_str())));
    }

    Ok(url)
}

pub async fn make_request(client: &Client, url: Url) -> Result<Value> {
    let res = client.get(url).send().await?;

    if !res.status().is_success() {
        return Err(Error::Status(res.status()));
    }

    let text = res.text().await?;
    parse_body(&text)
}

/// Decodes a response body, turning an upstream `"success": false` payload
/// into an error.
pub fn parse_body(text: &str) -> Result<Value> {
    let data = serde_json::from_str::<Value>(text)?;

    if data.get("success").and_then(Value::as_bool) == Some(false) {
        let message = data
            .get("error")
            .map(error_message)
            .unwrap_or_else(|| String::from("unknown error"));
        warn!("Exchange rate API reported a failure: {}", message);
        return Err(Error::Api(message));
    }

    debug!("Decoded response with {} bytes", text.len());
    Ok(data)
}

fn error_message(error: &Value) -> String {
    match error {
        Value::String(message) => message.clone(),
        Value::Object(obj) => obj
            .get("info")
            .or_else(|| obj.get("type"))
            .and_then(Value::as_str)
            .map(String::from)
            .unwrap_or_else(|| error.to_string()),
        other => other.to_string(),
    }
}

/// Moves `field` out of a decoded response object.
pub fn take_field(mut data: Value, field: &'static str) -> Result<Value> {
    data.get_mut(field)
        .map(Value::take)
        .ok_or(Error::MissingField(field))
}

pub fn parse_response_object<T>(data: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_value(data)?)
}
