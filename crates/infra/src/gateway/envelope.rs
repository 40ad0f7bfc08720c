//! Response envelope normalization
//!
//! The backend is inconsistent about wrapping: collections arrive as a bare
//! array, under `data`, or under `data.data`; single records arrive bare or
//! under `data`. These helpers reduce every shape to plain records.

use salestrail_domain::{Result, SalesTrailError};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

const MAX_DEPTH: usize = 2;

/// Unwrap a collection response into its array items.
///
/// `null` (or a `data: null` wrapper) is an empty collection. Any other
/// non-array payload is a decode error.
pub fn collection_items(body: Value) -> Result<Vec<Value>> {
    let mut current = body;
    for _ in 0..=MAX_DEPTH {
        current = match current {
            Value::Array(items) => return Ok(items),
            Value::Null => return Ok(Vec::new()),
            Value::Object(mut map) => match map.remove("data") {
                Some(inner) => inner,
                None => break_shape(Value::Object(map))?,
            },
            other => break_shape(other)?,
        };
    }
    Err(SalesTrailError::Decode("collection nested deeper than data.data".into()))
}

/// Unwrap a single-record response. A `data` member holding an object is
/// treated as the wrapper; anything else is the record itself.
pub fn single_record(body: Value) -> Result<Value> {
    let mut current = body;
    for _ in 0..MAX_DEPTH {
        let wrapped = matches!(&current, Value::Object(map) if matches!(map.get("data"), Some(Value::Object(_))));
        if !wrapped {
            break;
        }
        current = current["data"].take();
    }
    match current {
        Value::Object(_) => Ok(current),
        Value::Null => Err(SalesTrailError::NotFound("empty record response".into())),
        other => Err(SalesTrailError::Decode(format!("expected a record, got {}", kind(&other)))),
    }
}

/// Decode a collection, skipping items that fail to decode.
pub fn decode_collection<T: DeserializeOwned>(entity: &'static str, body: Value) -> Result<Vec<T>> {
    let items = collection_items(body)?;
    let total = items.len();
    let mut records = Vec::with_capacity(total);

    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<T>(item) {
            Ok(record) => records.push(record),
            Err(error) => warn!(entity, index, %error, "skipping undecodable record"),
        }
    }

    if records.len() < total {
        warn!(entity, kept = records.len(), total, "collection decoded partially");
    }
    Ok(records)
}

/// Decode a single-record response.
pub fn decode_record<T: DeserializeOwned>(entity: &'static str, body: Value) -> Result<T> {
    let record = single_record(body)?;
    serde_json::from_value(record)
        .map_err(|error| SalesTrailError::Decode(format!("invalid {entity} record: {error}")))
}

fn break_shape<T>(value: Value) -> Result<T> {
    Err(SalesTrailError::Decode(format!("expected a collection, got {}", kind(&value))))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object without data",
    }
}

#[cfg(test)]
mod tests {
    use salestrail_domain::{Quotation, QuotationId, QuotationSummary};
    use serde_json::json;

    use super::*;

    #[test]
    fn collections_unwrap_every_known_shape() {
        let bare = json!([{"id": 1}, {"id": 2}]);
        let data = json!({"success": true, "data": [{"id": 1}, {"id": 2}]});
        let nested = json!({"data": {"data": [{"id": 1}, {"id": 2}], "total": 2}});

        for body in [bare, data, nested] {
            assert_eq!(collection_items(body).unwrap().len(), 2);
        }
    }

    #[test]
    fn null_collections_are_empty() {
        assert!(collection_items(Value::Null).unwrap().is_empty());
        assert!(collection_items(json!({"data": null})).unwrap().is_empty());
    }

    #[test]
    fn non_collection_bodies_are_decode_errors() {
        for body in [json!("oops"), json!({"message": "no data"}), json!({"data": 5})] {
            assert!(matches!(collection_items(body), Err(SalesTrailError::Decode(_))));
        }
    }

    #[test]
    fn single_records_unwrap_data_objects() {
        let bare = json!({"id": 42, "transferredTo": "Meera"});
        let wrapped = json!({"success": true, "data": {"id": 42, "transferredTo": "Meera"}});
        let nested = json!({"data": {"data": {"id": 42, "transferredTo": "Meera"}}});

        for body in [bare, wrapped, nested] {
            let record = single_record(body).unwrap();
            assert_eq!(record["id"], json!(42));
        }
    }

    #[test]
    fn empty_record_is_not_found() {
        assert!(matches!(single_record(Value::Null), Err(SalesTrailError::NotFound(_))));
        assert!(matches!(single_record(json!([1])), Err(SalesTrailError::Decode(_))));
    }

    #[test]
    fn undecodable_items_are_skipped() {
        let body = json!({"data": [
            {"id": 7, "quotationNumber": "QT-7", "totalAmount": "1,000"},
            {"id": "not-a-number"},
            {"id": 8, "quotationNumber": "QT-8", "totalAmount": 50}
        ]});

        let quotations: Vec<Quotation> = decode_collection("quotation", body).unwrap();

        let ids: Vec<QuotationId> = quotations.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![QuotationId(7), QuotationId(8)]);
        assert_eq!(quotations[0].total_amount, 1000.0);
    }

    #[test]
    fn summaries_decode_from_wrapped_objects() {
        let body = json!({"data": {"totalAmount": 1000, "paidAmount": "400", "remainingAmount": 600}});

        let summary: QuotationSummary = decode_record("quotation_summary", body).unwrap();

        assert_eq!(summary.total, 1000.0);
        assert_eq!(summary.paid, 400.0);
        assert_eq!(summary.remaining, 600.0);
    }
}
