//! Test helpers shared by the controller and resource tests

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime};
use ewm_client::services::testing::{backend_error, ScriptedTransport};
use ewm_client::{ApiRequest, Method};
use serde_json::{json, Value};

use crate::notify::{Notify, Severity};
use crate::resources::EventDraft;

/// Fixed wall clock for deterministic date checks: 2026-10-19 12:00:00
pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .expect("valid fixed date")
}

/// Keeps every notification in order, not just the visible one
#[derive(Default)]
pub struct RecordingNotifier {
    shown: RefCell<Vec<(String, Severity)>>,
}

impl RecordingNotifier {
    pub fn all(&self) -> Vec<(String, Severity)> {
        self.shown.borrow().clone()
    }

    pub fn last(&self) -> Option<(String, Severity)> {
        self.shown.borrow().last().cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.shown.borrow().is_empty()
    }
}

impl Notify for RecordingNotifier {
    fn notify(&self, message: String, severity: Severity) {
        self.shown.borrow_mut().push((message, severity));
    }
}

/// In-memory category store behind the category endpoints
pub fn category_backend(initial: &[(i64, &str)]) -> (ScriptedTransport, Rc<RefCell<Vec<(i64, String)>>>) {
    let rows = Rc::new(RefCell::new(
        initial
            .iter()
            .map(|(id, name)| (*id, name.to_string()))
            .collect::<Vec<_>>(),
    ));
    let store = Rc::clone(&rows);

    let transport = ScriptedTransport::new(move |request: &ApiRequest| {
        let mut rows = store.borrow_mut();
        let id_from_path = || {
            request
                .path
                .rsplit('/')
                .next()
                .and_then(|id| id.parse::<i64>().ok())
        };
        match (request.method, request.path.as_str()) {
            (Method::Get, "/categories") => Ok(Value::Array(
                rows.iter()
                    .map(|(id, name)| json!({"id": id, "name": name}))
                    .collect(),
            )),
            (Method::Post, "/admin/categories") => {
                let name = body_name(request);
                let id = rows.iter().map(|(id, _)| *id).max().unwrap_or(0) + 1;
                rows.push((id, name.clone()));
                Ok(json!({"id": id, "name": name}))
            }
            (Method::Patch, _) => {
                let id = id_from_path().unwrap_or_default();
                let name = body_name(request);
                match rows.iter_mut().find(|(row_id, _)| *row_id == id) {
                    Some(row) => {
                        row.1 = name.clone();
                        Ok(json!({"id": id, "name": name}))
                    }
                    None => Err(backend_error(404, "Category not found")),
                }
            }
            (Method::Delete, _) => {
                let id = id_from_path().unwrap_or_default();
                let before = rows.len();
                rows.retain(|(row_id, _)| *row_id != id);
                if rows.len() == before {
                    Err(backend_error(404, "Category not found"))
                } else {
                    Ok(Value::Null)
                }
            }
            _ => Err(backend_error(404, "no such route")),
        }
    });

    (transport, rows)
}

fn body_name(request: &ApiRequest) -> String {
    request
        .body
        .as_ref()
        .and_then(|body| body["name"].as_str())
        .unwrap_or_default()
        .to_string()
}

/// Event draft that passes every static check
pub fn complete_event_draft(date: &str, time: &str) -> EventDraft {
    EventDraft {
        title: "Jazz night".into(),
        annotation: "Live jazz at the old port".into(),
        category_id: Some(4),
        date: date.into(),
        time: time.into(),
        ..EventDraft::for_user(1)
    }
}
