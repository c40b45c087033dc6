use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A payload field that may be missing, explicitly null, or carry a value
///
/// `Option<T>` cannot tell a missing key from `null`. Fields of this type
/// must be declared with `#[serde(default)]` so a missing key lands on
/// `Absent`:
///
/// ```
/// use serde::Deserialize;
/// use videos_common::types::Presence;
///
/// #[derive(Deserialize)]
/// struct Patch {
///     #[serde(default)]
///     age: Presence<u8>,
/// }
///
/// let missing: Patch = serde_json::from_str("{}").unwrap();
/// let cleared: Patch = serde_json::from_str(r#"{"age":null}"#).unwrap();
/// assert!(missing.age.is_absent());
/// assert!(cleared.age.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presence<T> {
    /// The key was not sent
    Absent,
    /// The key was sent as `null`
    Null,
    /// The key was sent with a non-null value
    Value(T),
}

impl<T> Presence<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Presence::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Presence::Null)
    }

    /// The carried value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            Presence::Value(v) => Some(v),
            Presence::Absent | Presence::Null => None,
        }
    }
}

impl<T> Default for Presence<T> {
    fn default() -> Self {
        Presence::Absent
    }
}

impl<T> From<T> for Presence<T> {
    fn from(value: T) -> Self {
        Presence::Value(value)
    }
}

impl<'de, T> Deserialize<'de> for Presence<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Presence::Value(value),
            None => Presence::Null,
        })
    }
}

/// `Absent` should be skipped with `skip_serializing_if = "Presence::is_absent"`;
/// if it is not, it serializes like `Null`.
impl<T> Serialize for Presence<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Presence::Value(value) => serializer.serialize_some(value),
            Presence::Absent | Presence::Null => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[derive(Debug, Deserialize, Serialize)]
    struct Payload {
        #[serde(default, skip_serializing_if = "Presence::is_absent")]
        flag: Presence<Value>,
    }

    #[test]
    fn test_three_states() {
        let absent: Payload = serde_json::from_value(json!({})).unwrap();
        let null: Payload = serde_json::from_value(json!({ "flag": null })).unwrap();
        let falsy: Payload = serde_json::from_value(json!({ "flag": false })).unwrap();

        assert_eq!(absent.flag, Presence::Absent);
        assert_eq!(null.flag, Presence::Null);
        assert_eq!(falsy.flag, Presence::Value(json!(false)));
    }

    #[test]
    fn test_serialize_skips_absent_keeps_null() {
        let absent = Payload { flag: Presence::Absent };
        let null = Payload { flag: Presence::Null };
        assert_eq!(serde_json::to_value(absent).unwrap(), json!({}));
        assert_eq!(serde_json::to_value(null).unwrap(), json!({ "flag": null }));
    }
}
