use crate::error::DaoError;
use crate::transport::{ApiRequest, ApiResponse, HttpMethod, Transport};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// JSON request/response handling on top of a [`Transport`]: attaches the
/// bearer, maps HTTP status codes onto [`DaoError`] and decodes bodies.
pub struct RestDao<T> {
    transport: T,
}

impl<T: Transport> RestDao<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        bearer: Option<&str>,
    ) -> Result<R, DaoError> {
        let mut request = ApiRequest::new(HttpMethod::Get, path).with_bearer(bearer);
        for (key, value) in query {
            request = request.with_query(key, value.clone());
        }
        decode(self.execute(request).await?)
    }

    pub async fn post<B, R>(&self, path: &str, body: &B, bearer: Option<&str>) -> Result<R, DaoError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send_json(HttpMethod::Post, path, body, bearer).await
    }

    pub async fn put<B, R>(&self, path: &str, body: &B, bearer: Option<&str>) -> Result<R, DaoError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send_json(HttpMethod::Put, path, body, bearer).await
    }

    pub async fn patch<B, R>(&self, path: &str, body: &B, bearer: Option<&str>) -> Result<R, DaoError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send_json(HttpMethod::Patch, path, body, bearer).await
    }

    pub async fn delete(&self, path: &str, bearer: Option<&str>) -> Result<(), DaoError> {
        let request = ApiRequest::new(HttpMethod::Delete, path).with_bearer(bearer);
        self.execute(request).await.map(|_| ())
    }

    async fn send_json<B, R>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
        bearer: Option<&str>,
    ) -> Result<R, DaoError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(|e| DaoError::Decode(e.to_string()))?;
        let request = ApiRequest::new(method, path)
            .with_bearer(bearer)
            .with_body(body);
        decode(self.execute(request).await?)
    }

    async fn execute(&self, request: ApiRequest) -> Result<Value, DaoError> {
        let method = request.method;
        let path = request.path.clone();

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::error!(%method, %path, error = %e, "request failed");
            e
        })?;
        tracing::debug!(%method, %path, status = response.status, "api response");

        into_result(response)
    }
}

fn into_result(response: ApiResponse) -> Result<Value, DaoError> {
    if response.is_success() {
        return Ok(response.body);
    }

    let status = response.status;
    let message = error_message(&response.body)
        .unwrap_or_else(|| format!("Request failed with status {}", status));
    Err(match status {
        401 => DaoError::Unauthorized(message),
        403 => DaoError::Forbidden(message),
        404 => DaoError::NotFound(message),
        400..=499 => DaoError::Rejected { status, message },
        _ => DaoError::Server { status, message },
    })
}

fn error_message(body: &Value) -> Option<String> {
    match body {
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Value::Object(fields) => ["message", "error"]
            .iter()
            .find_map(|key| fields.get(*key).and_then(Value::as_str))
            .map(str::to_string),
        _ => None,
    }
}

/// Decodes the body itself, or the `data` member of an enveloped response.
fn decode<R: DeserializeOwned>(body: Value) -> Result<R, DaoError> {
    match serde_json::from_value::<R>(body.clone()) {
        Ok(value) => Ok(value),
        Err(direct) => match body {
            Value::Object(mut fields) if fields.contains_key("data") => {
                let data = fields.remove("data").unwrap_or(Value::Null);
                serde_json::from_value(data).map_err(|e| DaoError::Decode(e.to_string()))
            }
            _ => Err(DaoError::Decode(direct.to_string())),
        },
    }
}
