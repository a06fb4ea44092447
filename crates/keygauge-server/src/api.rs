//! Request decoding. A payload is one analysis object or an array of them;
//! each object needs a `layout` string and a `weights` object. Decode
//! failures are confined to their own slot so one bad item never spoils a
//! batch.

use crate::pool::{Job, WorkerPool};
use keygauge_core::api::CustomWeights;
use serde_json::{json, Value};

const INVALID_JSON: &str = "Invalid JSON format.";
const MISSING_FIELDS: &str = "Invalid JSON payload: missing layout or weights.";

/// Decodes a body, runs it through the pool, and shapes the response:
/// single object in, single object out; array in, array out (same order).
pub fn process_body(pool: &WorkerPool, body: &str) -> Value {
    let parsed: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return json!({ "error": INVALID_JSON }),
    };

    match parsed {
        Value::Array(items) => {
            let jobs = items.iter().map(decode_item).collect();
            Value::Array(pool.submit(jobs))
        }
        single => {
            let mut results = pool.submit(vec![decode_item(&single)]);
            results.pop().unwrap_or_else(|| json!({ "error": INVALID_JSON }))
        }
    }
}

fn decode_item(item: &Value) -> Job {
    let (Some(layout), Some(weights)) = (item.get("layout"), item.get("weights")) else {
        return Job::Reject {
            message: MISSING_FIELDS,
        };
    };
    let Some(layout) = layout.as_str() else {
        return Job::Reject {
            message: MISSING_FIELDS,
        };
    };

    // absent weight fields default to zero
    let weights: CustomWeights =
        serde_json::from_value(weights.clone()).unwrap_or_default();

    Job::Analyze {
        layout: layout.to_string(),
        weights,
    }
}
