//! GET, POST and IP echo handlers.

use serde::Deserialize;
use tracing::info;

use shared::{lookup_ip, Error, IpLookup, Result, Schedule, ScheduleStore};

/// What a handler produced, rendered into a response at the Lambda boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A stored record, sent back as JSON.
    Record(Schedule),
    /// A plain-text acknowledgement.
    Text(String),
}

/// Parse the `sid` path parameter into a school id.
pub fn parse_sid(sid: Option<&str>) -> Result<i64> {
    let sid = sid.ok_or_else(|| Error::Validation("Missing path parameter sid".to_string()))?;

    sid.trim()
        .parse()
        .map_err(|_| Error::Validation(format!("Path parameter sid must be an integer, got {:?}", sid)))
}

/// GET /schedule/{sid}
pub async fn get_schedule(store: &dyn ScheduleStore, sid: Option<&str>) -> Result<Reply> {
    let school_id = parse_sid(sid)?;

    let schedule = store
        .get(school_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Could not find schedule for school {}", school_id)))?;

    info!(
        school_id = schedule.school_id,
        hours = %schedule.hours,
        "Found schedule"
    );

    Ok(Reply::Record(schedule))
}

/// Fields read from a POST body. Any `School_id` the client sends is ignored.
#[derive(Debug, Default, Deserialize)]
struct ScheduleBody {
    #[serde(rename = "Hours", alias = "hours", default)]
    hours: String,
}

/// POST /schedule/{sid}
///
/// The record is always keyed by `sid`. An empty body stores empty hours; a body
/// that is not JSON is rejected. The reply echoes the raw body back rather than
/// the stored record.
pub async fn put_schedule(
    store: &dyn ScheduleStore,
    table_name: &str,
    sid: Option<&str>,
    body: &[u8],
) -> Result<Reply> {
    let school_id = parse_sid(sid)?;

    let parsed: ScheduleBody = if body.trim_ascii().is_empty() {
        ScheduleBody::default()
    } else {
        serde_json::from_slice(body)
            .map_err(|e| Error::Validation(format!("Invalid request body: {}", e)))?
    };
    let schedule = Schedule::new(school_id, parsed.hours);

    store.put(&schedule).await?;

    info!(
        "Successfully added '{}' ({}) to table {}",
        schedule.hours, schedule.school_id, table_name
    );

    Ok(Reply::Text(format!("Post Good, {}", String::from_utf8_lossy(body))))
}

/// POST in the ip-echo variant: greet the caller with our public IP.
pub async fn echo_ip(lookup: &dyn IpLookup) -> Result<Reply> {
    let ip = lookup_ip(lookup).await?;
    Ok(Reply::Text(format!("Hello, {}", ip)))
}
