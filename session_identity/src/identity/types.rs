use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use super::errors::ResolveError;

/// A resolved user identifier. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Returns `None` for an empty string.
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() { None } else { Some(Self(id)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// Which cookie produced the identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentitySource {
    UserIdCookie,
    SessionCookie,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedIdentity {
    pub user_id: UserId,
    pub source: IdentitySource,
}

/// Decoded contents of the session cookie.
///
/// The payload is kept untyped: the backend owns its shape, and only
/// `user_info.sub` carries meaning here. Every accessor checks that each
/// step of the path is present before descending. The informational
/// accessors never validate anything, an `expires_at` in the past is
/// returned like any other number.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionPayload(Value);

impl SessionPayload {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn user_info(&self) -> Option<&Map<String, Value>> {
        self.0.get("user_info").and_then(Value::as_object)
    }

    /// The subject identifier at `user_info.sub`.
    ///
    /// Falsy values (`null`, `false`, `0`, `""`) count as missing. A non-zero
    /// number is rendered in decimal; other non-string shapes are rejected.
    pub fn subject(&self) -> Result<UserId, ResolveError> {
        let user_info = self
            .user_info()
            .ok_or(ResolveError::FieldMissing("user_info"))?;

        let sub = user_info
            .get("sub")
            .filter(|v| is_truthy(v))
            .ok_or(ResolveError::FieldMissing("user_info.sub"))?;

        let user_id = match sub {
            Value::String(s) => UserId::new(s.as_str()),
            Value::Number(n) => UserId::new(n.to_string()),
            _ => None,
        };

        user_id.ok_or(ResolveError::FieldMissing("user_info.sub"))
    }

    pub fn token_type(&self) -> Option<&str> {
        self.0.get("token_type").and_then(Value::as_str)
    }

    /// Seconds since the Unix epoch, as written by the backend
    pub fn expires_at(&self) -> Option<f64> {
        self.0.get("expires_at").and_then(Value::as_f64)
    }

    pub fn display_name(&self) -> Option<&str> {
        self.user_info_str("name")
    }

    pub fn preferred_username(&self) -> Option<&str> {
        self.user_info_str("preferred_username")
    }

    fn user_info_str(&self, key: &str) -> Option<&str> {
        self.user_info()?.get(key).and_then(Value::as_str)
    }
}

impl From<Value> for SessionPayload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
