use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field that can be left out, sent as `null`, or carry a value.
///
/// PATCH endpoints treat an omitted member as "leave unchanged" and an
/// explicit `null` as "clear". Declare such members as
///
/// ```ignore
/// #[serde(default, skip_serializing_if = "Nullable::is_absent")]
/// pub title: Nullable<String>,
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Nullable<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// True for an explicit `null` or a value.
    pub fn is_set(&self) -> bool {
        !self.is_absent()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Nullable<&T> {
        match self {
            Self::Absent => Nullable::Absent,
            Self::Null => Nullable::Null,
            Self::Value(value) => Nullable::Value(value),
        }
    }

    pub fn set(&mut self, value: T) {
        *self = Self::Value(value);
    }

    pub fn set_null(&mut self) {
        *self = Self::Null;
    }

    pub fn unset(&mut self) {
        *self = Self::Absent;
    }

    /// Move the current state out, leaving `Absent`.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Value(value),
            None => Self::Null,
        }
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(value) => serializer.serialize_some(value),
            // Absent members are normally skipped by the container.
            Self::Null | Self::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
    struct Patch {
        #[serde(default, skip_serializing_if = "Nullable::is_absent")]
        title: Nullable<String>,
    }

    #[test]
    fn three_states_serialize_distinctly() {
        let absent = Patch::default();
        assert_eq!(serde_json::to_value(&absent).unwrap(), json!({}));

        let cleared = Patch { title: Nullable::Null };
        assert_eq!(serde_json::to_value(&cleared).unwrap(), json!({ "title": null }));

        let set = Patch { title: Nullable::Value("SRE".into()) };
        assert_eq!(serde_json::to_value(&set).unwrap(), json!({ "title": "SRE" }));
    }

    #[test]
    fn three_states_deserialize_distinctly() {
        let absent: Patch = serde_json::from_value(json!({})).unwrap();
        assert!(absent.title.is_absent());

        let cleared: Patch = serde_json::from_value(json!({ "title": null })).unwrap();
        assert!(cleared.title.is_null());

        let set: Patch = serde_json::from_value(json!({ "title": "SRE" })).unwrap();
        assert_eq!(set.title.value().map(String::as_str), Some("SRE"));
    }

    #[test]
    fn mutators() {
        let mut field: Nullable<i32> = Nullable::Absent;
        field.set(3);
        assert_eq!(field.value(), Some(&3));
        field.set_null();
        assert!(field.is_null() && field.is_set());
        assert_eq!(field.take(), Nullable::Null);
        assert!(field.is_absent());
        assert_eq!(Nullable::from(None::<i32>), Nullable::Null);
    }
}
