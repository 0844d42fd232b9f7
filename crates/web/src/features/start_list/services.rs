use storage::dto::start_list::{
    ClassCountResponse, StartListEntryResponse, StartListResponse, StartListStatsResponse,
};
use storage::repository::start_list::StartListRepository;
use storage::services::start_list;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::error::{WebError, WebResult};
use crate::features::events;
use crate::state::AppState;

/// Builds the start list fresh on every request: no cached or persisted
/// projection exists anywhere.
pub async fn build(
    state: &AppState,
    actor: &CurrentUser,
    event_id: Uuid,
) -> WebResult<StartListResponse> {
    // Visibility follows the event itself.
    let event = events::services::get_event(state, actor, event_id).await?;

    let repo = StartListRepository::new(state.db.pool());
    let rows = repo.rows(event_id).await?;

    let mut entries = Vec::with_capacity(rows.len());
    let mut readiness = Vec::with_capacity(rows.len());
    let mut class_names = Vec::with_capacity(rows.len());

    for row in rows {
        let outcome = row.check_in_outcome.as_deref().and_then(|s| s.parse().ok());
        let status = row.inspection_status.as_deref().and_then(|s| s.parse().ok());
        let bucket = start_list::classify(outcome, status);

        readiness.push(bucket);
        class_names.push(row.class_name.clone());
        entries.push(StartListEntryResponse {
            start_number: row.start_number,
            user_id: row.user_id,
            first_name: row.first_name,
            last_name: row.last_name,
            class_name: row.class_name,
            check_in_outcome: row.check_in_outcome,
            inspection_status: row.inspection_status,
            readiness: bucket.as_str().to_string(),
        });
    }

    let counts = start_list::count_readiness(&readiness);
    let class_counts = start_list::count_per_class(&class_names)
        .into_iter()
        .map(|(class_name, participants)| ClassCountResponse {
            class_name,
            participants,
        })
        .collect();

    Ok(StartListResponse {
        event_id,
        title: event.title,
        entries,
        stats: StartListStatsResponse {
            total: readiness.len() as i64,
            ready: counts.ready,
            pending_technical: counts.pending_technical,
            pending_checkin: counts.pending_checkin,
            not_ready: counts.not_ready,
        },
        class_counts,
    })
}

pub fn render_csv(start_list: &StartListResponse) -> WebResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record([
            "start_number",
            "first_name",
            "last_name",
            "class",
            "check_in",
            "inspection",
            "readiness",
        ])
        .map_err(|e| WebError::InternalServerError(format!("CSV write failed: {e}")))?;

    for entry in &start_list.entries {
        writer
            .write_record([
                entry.start_number.to_string(),
                entry.first_name.clone(),
                entry.last_name.clone(),
                entry.class_name.clone(),
                entry.check_in_outcome.clone().unwrap_or_default(),
                entry.inspection_status.clone().unwrap_or_default(),
                entry.readiness.clone(),
            ])
            .map_err(|e| WebError::InternalServerError(format!("CSV write failed: {e}")))?;
    }

    writer
        .into_inner()
        .map_err(|e| WebError::InternalServerError(format!("CSV write failed: {e}")))
}

/// Printable table for the race office; not a rendering engine, just a
/// self-contained page.
pub fn render_html(start_list: &StartListResponse) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str(&format!("<title>Start list - {}</title>\n", escape(&start_list.title)));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape(&start_list.title)));
    html.push_str("<table border=\"1\">\n<tr>");
    html.push_str("<th>No.</th><th>Athlete</th><th>Class</th><th>Check-in</th>");
    html.push_str("<th>Inspection</th><th>Readiness</th></tr>\n");

    for entry in &start_list.entries {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{} {}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            entry.start_number,
            escape(&entry.first_name),
            escape(&entry.last_name),
            escape(&entry.class_name),
            escape(entry.check_in_outcome.as_deref().unwrap_or("")),
            escape(entry.inspection_status.as_deref().unwrap_or("")),
            escape(&entry.readiness),
        ));
    }

    html.push_str("</table>\n</body>\n</html>\n");
    html
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::services::start_list::Readiness;

    fn fixture() -> StartListResponse {
        StartListResponse {
            event_id: Uuid::new_v4(),
            title: String::from("Spring Cup <2026>"),
            entries: vec![
                StartListEntryResponse {
                    start_number: 1,
                    user_id: Uuid::new_v4(),
                    first_name: String::from("Alex"),
                    last_name: String::from("Kart"),
                    class_name: String::from("Open"),
                    check_in_outcome: Some(String::from("OK")),
                    inspection_status: Some(String::from("APPROVED")),
                    readiness: Readiness::Ready.as_str().to_string(),
                },
                StartListEntryResponse {
                    start_number: 7,
                    user_id: Uuid::new_v4(),
                    first_name: String::from("Billie"),
                    last_name: String::from("Racer"),
                    class_name: String::from("Junior 125"),
                    check_in_outcome: None,
                    inspection_status: None,
                    readiness: Readiness::NotReady.as_str().to_string(),
                },
            ],
            stats: StartListStatsResponse {
                total: 2,
                ready: 1,
                pending_technical: 0,
                pending_checkin: 0,
                not_ready: 1,
            },
            class_counts: vec![],
        }
    }

    #[test]
    fn test_render_csv() {
        let bytes = render_csv(&fixture()).expect("csv");
        let text = String::from_utf8(bytes).expect("utf8");

        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "start_number,first_name,last_name,class,check_in,inspection,readiness"
        );
        assert_eq!(lines.next().unwrap(), "1,Alex,Kart,Open,OK,APPROVED,READY");
        assert_eq!(lines.next().unwrap(), "7,Billie,Racer,Junior 125,,,NOT_READY");
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_render_html_escapes_title() {
        let html = render_html(&fixture());
        assert!(html.contains("Spring Cup &lt;2026&gt;"));
        assert!(html.contains("<td>1</td><td>Alex Kart</td>"));
        assert!(html.contains("NOT_READY"));
    }
}
