//! Task identifier allocation.
//!
//! New tasks continue numbering after the highest identifier already in the
//! store. Both task ids and the parent prefix of subtask ids (`"3"` in
//! `"3.1"`) count, so a subtask left behind by a deleted task still blocks
//! its number.

use serde_json::Value;

use crate::error::{Error, Result};

/// Compute the next free task id over existing task records.
///
/// Returns `max + 1` over every task id and subtask prefix found, or 1 when
/// there are none. Callers pass the tasks of every tag so ids stay unique
/// across the whole store.
///
/// Task ids must be integers, integral floats (`5.0`), or integer strings.
/// Subtask ids are scanned best-effort: anything whose prefix does not parse
/// is skipped.
///
/// # Errors
///
/// Returns an error if a task entry is not an object, carries a non-integer
/// `id`, or the highest id leaves no room for another.
pub fn next_available_id<'a>(tasks: impl IntoIterator<Item = &'a Value>) -> Result<u64> {
    let mut max: Option<i64> = None;
    let mut observe = |id: i64| max = Some(max.map_or(id, |m| m.max(id)));

    for task in tasks {
        let Some(fields) = task.as_object() else {
            return Err(Error::Schema {
                expected: "every entry of \"tasks\" to be an object".to_string(),
            });
        };

        if let Some(id) = fields.get("id") {
            observe(parse_task_id(id)?);
        }

        let subtasks = fields.get("subtasks").and_then(Value::as_array);
        for subtask in subtasks.into_iter().flatten() {
            match subtask.get("id").and_then(subtask_parent) {
                Some(parent) => observe(parent),
                None => tracing::trace!(?subtask, "Skipping subtask with unparseable id"),
            }
        }
    }

    let next = match max {
        Some(m) => m.checked_add(1).ok_or(Error::IdSpaceExhausted { max: m })?,
        None => 1,
    };
    Ok(u64::try_from(next.max(1)).unwrap_or(1))
}

fn parse_task_id(id: &Value) -> Result<i64> {
    let parsed = match id {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral_f64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| Error::InvalidTaskId {
        value: id.to_string(),
    })
}

/// Whole floats inside the `i64` range (`5.0` -> 5); anything else is rejected.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn integral_f64(f: f64) -> Option<i64> {
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then_some(f as i64)
}

/// Integer before the first `.` of a subtask id (`"3.1"` -> 3, `3` -> 3).
fn subtask_parent(id: &Value) -> Option<i64> {
    let text = match id {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    text.split('.').next()?.trim().parse().ok()
}

/// Owned counter handing out consecutive task ids.
///
/// Each call to [`IdCounter::take`] consumes exactly one id; subtasks are
/// numbered under their parent and never draw from the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdCounter {
    next: u64,
}

impl IdCounter {
    /// Start counting at `first`.
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Return the current id and advance by one.
    pub fn take(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tasks(value: Value) -> Vec<Value> {
        value.as_array().cloned().unwrap()
    }

    #[test]
    fn test_empty_store_starts_at_one() {
        assert_eq!(next_available_id(std::iter::empty()).unwrap(), 1);
    }

    #[test]
    fn test_max_task_id_plus_one() {
        let existing = tasks(json!([
            {"id": 1, "subtasks": []},
            {"id": 3, "subtasks": [{"id": "3.1"}]},
            {"id": 5},
        ]));
        assert_eq!(next_available_id(&existing).unwrap(), 6);
    }

    #[test]
    fn test_subtask_prefix_counts() {
        let existing = tasks(json!([
            {"id": 2, "subtasks": [{"id": "9.1"}, {"id": "9.2"}]},
        ]));
        assert_eq!(next_available_id(&existing).unwrap(), 10);
    }

    #[test]
    fn test_numeric_subtask_ids() {
        let existing = tasks(json!([
            {"id": 1, "subtasks": [{"id": 4}, {"id": 7.2}]},
        ]));
        assert_eq!(next_available_id(&existing).unwrap(), 8);
    }

    #[test]
    fn test_string_task_ids() {
        let existing = tasks(json!([{"id": "12"}, {"id": " 4 "}]));
        assert_eq!(next_available_id(&existing).unwrap(), 13);
    }

    #[test]
    fn test_unparseable_subtasks_are_skipped() {
        let existing = tasks(json!([
            {"id": 2, "subtasks": [
                {"id": "abc.1"},
                {"id": null},
                {"title": "no id"},
                {"id": ""},
                {"id": "99x.1"},
            ]},
        ]));
        assert_eq!(next_available_id(&existing).unwrap(), 3);
    }

    #[test]
    fn test_tasks_without_ids_are_skipped() {
        let existing = tasks(json!([{"title": "orphan"}]));
        assert_eq!(next_available_id(&existing).unwrap(), 1);
    }

    #[test]
    fn test_invalid_task_id_is_fatal() {
        let existing = tasks(json!([{"id": "first"}]));
        let err = next_available_id(&existing).unwrap_err();
        assert!(matches!(err, Error::InvalidTaskId { .. }));
    }

    #[test]
    fn test_non_object_task_is_fatal() {
        let existing = tasks(json!([1, 2]));
        let err = next_available_id(&existing).unwrap_err();
        assert!(matches!(err, Error::Schema { .. }));
    }

    #[test]
    fn test_result_exceeds_every_existing_id() {
        let existing = tasks(json!([
            {"id": 40, "subtasks": [{"id": "41.1"}]},
            {"id": 7, "subtasks": [{"id": "8.3"}]},
        ]));
        let next = next_available_id(&existing).unwrap();
        assert_eq!(next, 42);
    }

    #[test]
    fn test_max_i64_id_is_fatal_not_reused() {
        let existing = tasks(json!([{"id": i64::MAX}]));
        let err = next_available_id(&existing).unwrap_err();
        assert!(matches!(err, Error::IdSpaceExhausted { max: i64::MAX }));
    }

    #[test]
    fn test_integral_float_task_id() {
        let existing = tasks(json!([{"id": 5.0}]));
        assert_eq!(next_available_id(&existing).unwrap(), 6);
    }

    #[test]
    fn test_fractional_float_task_id_is_fatal() {
        let existing = tasks(json!([{"id": 5.5}]));
        let err = next_available_id(&existing).unwrap_err();
        assert!(matches!(err, Error::InvalidTaskId { .. }));
    }

    #[test]
    fn test_huge_integer_task_id_is_fatal() {
        let existing: Vec<Value> =
            serde_json::from_str(r#"[{"id": 12345678901234567890123}]"#).unwrap();
        assert!(next_available_id(&existing).is_err());
    }

    #[test]
    fn test_counter_advances_by_one() {
        let mut counter = IdCounter::starting_at(6);
        assert_eq!(counter.take(), 6);
        assert_eq!(counter.take(), 7);
        assert_eq!(counter.take(), 8);
    }
}
