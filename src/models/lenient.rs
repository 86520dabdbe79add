// Deserializers for loosely typed backend fields.
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts any JSON value; keeps it only when it is a finite number.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(as_finite))
}

/// Accepts any JSON value; keeps it only when it is a non-negative integer.
pub fn count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| {
        v.as_u64()
            .or_else(|| as_finite(v).filter(|n| *n >= 0.0).map(|n| n.round() as u64))
    }))
}

/// Accepts any JSON value; `true` only for a literal boolean `true`.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(matches!(value, Some(Value::Bool(true))))
}

pub fn as_finite(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "number")]
        score: Option<f64>,
        #[serde(default, deserialize_with = "count")]
        total: Option<u64>,
        #[serde(default, deserialize_with = "flag")]
        enabled: bool,
    }

    #[test]
    fn non_numeric_values_become_none() {
        let probe: Probe =
            serde_json::from_str(r#"{"score": "high", "total": null, "enabled": "yes"}"#).unwrap();
        assert_eq!(probe.score, None);
        assert_eq!(probe.total, None);
        assert!(!probe.enabled);
    }

    #[test]
    fn numbers_pass_through() {
        let probe: Probe =
            serde_json::from_str(r#"{"score": 7.5, "total": 12.0, "enabled": true}"#).unwrap();
        assert_eq!(probe.score, Some(7.5));
        assert_eq!(probe.total, Some(12));
        assert!(probe.enabled);
    }

    #[test]
    fn absent_fields_use_defaults() {
        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(probe.score, None);
        assert!(!probe.enabled);
    }
}
