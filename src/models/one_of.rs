use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Decode `value` as `T`, discarding the error.
///
/// A candidate that re-serializes to `{}` decoded none of its members and
/// does not count as a match.
pub(crate) fn try_variant<T: DeserializeOwned + Serialize>(value: &Value) -> Option<T> {
    let candidate = T::deserialize(value).ok()?;
    match serde_json::to_value(&candidate) {
        Ok(Value::Object(members)) if members.is_empty() => None,
        Ok(_) => Some(candidate),
        Err(_) => None,
    }
}

/// The single decoded candidate, or `None` when zero or several matched.
pub(crate) fn exactly_one<T, const N: usize>(candidates: [Option<T>; N]) -> Option<T> {
    let mut matched = candidates.into_iter().flatten();
    let first = matched.next()?;
    match matched.next() {
        Some(_) => None,
        None => Some(first),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_match_wins() {
        assert_eq!(exactly_one([None, Some(2), None]), Some(2));
    }

    #[test]
    fn ambiguous_or_empty_is_rejected() {
        assert_eq!(exactly_one([Some(1), Some(2)]), None);
        assert_eq!(exactly_one::<i32, 2>([None, None]), None);
    }

    #[test]
    fn try_variant_reports_mismatch_as_none() {
        let value = serde_json::json!("text");
        assert_eq!(try_variant::<String>(&value).as_deref(), Some("text"));
        assert_eq!(try_variant::<f64>(&value), None);
    }

    #[derive(Debug, PartialEq, Serialize, serde::Deserialize)]
    struct Loose {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    }

    #[test]
    fn try_variant_rejects_empty_objects() {
        assert_eq!(try_variant::<Loose>(&serde_json::json!({})), None);
        assert_eq!(try_variant::<Loose>(&serde_json::json!({"kind": "team"})), None);
        assert_eq!(
            try_variant::<Loose>(&serde_json::json!({"name": "x"})),
            Some(Loose { name: Some("x".into()) })
        );
    }
}
