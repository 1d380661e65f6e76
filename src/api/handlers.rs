//! Operation handlers.
//!
//! One generic function per operation, shared by every [`ResourceEntity`]. Each validates
//! its input, talks to the collection through a [`ResourceClient`] and returns the `data`
//! payload for a success envelope, or the [`ApiError`] to report.

use super::{ApiError, ApiRequest};
use crate::framework::{RecordId, ResourceClient, ResourceEntity};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, error};

/// `GET /{collection}` and `GET /{collection}/{id}`.
///
/// With an identifier, returns that record. Otherwise lists the collection, narrowed by the
/// entity's query filter when one applies: `{<collection>: [...], total, ...filter}`.
pub async fn list_or_get<T: ResourceEntity>(
    client: &ResourceClient<T>,
    request: &ApiRequest,
) -> Result<Value, ApiError> {
    if let Some(raw) = request.record_id() {
        let id = parse_id::<T>(raw)?;
        let record = client
            .get(id)
            .await
            .map_err(ApiError::from_framework::<T>)?
            .ok_or_else(ApiError::not_found::<T>)?;
        return to_data(&record);
    }

    let filter = T::filter_from_query(&request.query_string_parameters);
    let mut payload = match &filter {
        Some(filter) => filter_fields(filter)?,
        None => Map::new(),
    };
    let records = client
        .list(filter)
        .await
        .map_err(ApiError::from_framework::<T>)?;
    payload.insert("total".to_string(), Value::from(records.len()));
    payload.insert(T::COLLECTION.to_string(), to_data(&records)?);
    Ok(Value::Object(payload))
}

/// `POST /{collection}`.
pub async fn create<T: ResourceEntity>(
    client: &ResourceClient<T>,
    request: &ApiRequest,
) -> Result<Value, ApiError> {
    let params: T::Create = decode_body(request)?;
    let record = client
        .create(params)
        .await
        .map_err(ApiError::from_framework::<T>)?;
    confirmation::<T>("created", Some(&record))
}

/// `PUT /{collection}/{id}`; a partial update.
pub async fn update<T: ResourceEntity>(
    client: &ResourceClient<T>,
    request: &ApiRequest,
) -> Result<Value, ApiError> {
    let id = required_id::<T>(request)?;
    let update: T::Update = decode_body(request)?;
    let record = client
        .update(id, update)
        .await
        .map_err(ApiError::from_framework::<T>)?;
    confirmation::<T>("updated", Some(&record))
}

/// `DELETE /{collection}/{id}`.
pub async fn delete<T: ResourceEntity>(
    client: &ResourceClient<T>,
    request: &ApiRequest,
) -> Result<Value, ApiError> {
    let id = required_id::<T>(request)?;
    client
        .delete(id)
        .await
        .map_err(ApiError::from_framework::<T>)?;
    confirmation::<T>("deleted", None)
}

fn parse_id<T: ResourceEntity>(raw: &str) -> Result<RecordId, ApiError> {
    raw.parse().map_err(|_| ApiError::invalid_id::<T>())
}

fn required_id<T: ResourceEntity>(request: &ApiRequest) -> Result<RecordId, ApiError> {
    let raw = request.record_id().ok_or_else(ApiError::missing_id::<T>)?;
    parse_id::<T>(raw)
}

/// Decodes the request body. A literal `null` body yields the payload's default.
fn decode_body<D: DeserializeOwned + Default>(request: &ApiRequest) -> Result<D, ApiError> {
    serde_json::from_str::<Option<D>>(request.body.as_deref().unwrap_or_default())
        .map(Option::unwrap_or_default)
        .map_err(|e| {
            debug!(error = %e, "Rejected request body");
            ApiError::InvalidBody
        })
}

/// `{message: "<Kind> <verb> successfully", <singular>: record}`.
fn confirmation<T: ResourceEntity>(verb: &str, record: Option<&T>) -> Result<Value, ApiError> {
    let mut payload = Map::new();
    payload.insert(
        "message".to_string(),
        Value::String(format!("{} {verb} successfully", T::KIND)),
    );
    if let Some(record) = record {
        payload.insert(T::SINGULAR.to_string(), to_data(record)?);
    }
    Ok(Value::Object(payload))
}

fn filter_fields<F: Serialize>(filter: &F) -> Result<Map<String, Value>, ApiError> {
    match to_data(filter)? {
        Value::Object(fields) => Ok(fields),
        _ => Ok(Map::new()),
    }
}

fn to_data<S: Serialize + ?Sized>(value: &S) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| {
        error!(error = %e, "Failed to serialize payload");
        ApiError::Internal
    })
}
