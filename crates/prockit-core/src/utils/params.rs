//! Required-parameter checks for request data
//!
//! A request is any field-name → JSON value lookup. A field counts as missing
//! when it is absent, `null`, `false` or the empty string. Numbers are always
//! present, zero included.

use crate::error::{MissingParams, RequireMode, Result};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, trace};

/// Read-only view over request fields
pub trait RequestData {
    /// Look up a field by name
    fn field(&self, name: &str) -> Option<&Value>;
}

impl RequestData for Map<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl RequestData for HashMap<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl RequestData for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// Only JSON objects carry fields; every other value looks empty.
impl RequestData for Value {
    fn field(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(name))
    }
}

impl<T: RequestData + ?Sized> RequestData for &T {
    fn field(&self, name: &str) -> Option<&Value> {
        (**self).field(name)
    }
}

/// Whether a field value should be reported as missing
pub fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(_)) => false,
        Some(Value::Array(_)) | Some(Value::Object(_)) => false,
    }
}

/// Validate required params
///
/// Collects the requested fields that are missing from `data`, in request
/// order. With `any == false` the check fails if anything is missing; with
/// `any == true` it fails only when every requested field is missing.
///
/// # Returns
/// `Some(MissingParams)` describing the failure, `None` when the request
/// satisfies the check
pub fn required<D, S>(data: &D, params: &[S], any: bool) -> Option<MissingParams>
where
    D: RequestData + ?Sized,
    S: AsRef<str>,
{
    let mode = RequireMode::from_any(any);

    let missing: Vec<String> = params
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| is_missing(data.field(name)))
        .map(str::to_string)
        .collect();

    trace!(
        requested = params.len(),
        missing = missing.len(),
        mode = %mode,
        "Checked required params"
    );

    if missing.is_empty() {
        return None;
    }

    if mode == RequireMode::Any && missing.len() < params.len() {
        return None;
    }

    let err = MissingParams::new(missing, mode);
    debug!(missing = %err.joined(), mode = %mode, "Required params missing");
    Some(err)
}

/// Same check as [`required`], shaped for `?` propagation
pub fn ensure_required<D, S>(data: &D, params: &[S], any: bool) -> Result<()>
where
    D: RequestData + ?Sized,
    S: AsRef<str>,
{
    match required(data, params, any) {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
