//! Plain-text views of [`AppState`] for the terminal.

use std::fmt::Write;

use crate::api::{EquipmentRecord, EquipmentStats, EquipmentType, UserProfile};
use crate::ui::format::format_date;
use crate::ui::AppState;

/// Equipment table followed by a pagination line.
pub fn render_equipment(state: &AppState) -> String {
    let mut out = String::new();

    if state.equipment.is_empty() {
        out.push_str("No equipment found\n");
    } else {
        let _ = writeln!(
            out,
            "{:>6}  {:<20}  {:<24}  {:<17}  NOTE",
            "ID", "SERIAL", "TYPE", "CREATED"
        );
        for record in &state.equipment {
            let _ = writeln!(
                out,
                "{:>6}  {:<20}  {:<24}  {:<17}  {}",
                record.id,
                record.serial_number,
                type_label(state, record),
                format_date(record.created_at.as_deref().unwrap_or_default()),
                record.note.as_deref().unwrap_or_default(),
            );
        }
    }

    let pagination = &state.pagination;
    let _ = write!(
        out,
        "Page {} · {} total",
        state.current_page, pagination.count
    );
    if pagination.has_previous() {
        let _ = write!(out, " · previous: {}", state.current_page.saturating_sub(1));
    }
    if pagination.has_next() {
        let _ = write!(out, " · next: {}", state.current_page + 1);
    }
    out.push('\n');
    out
}

/// Record types are named by the server when it can; otherwise by the
/// loaded type list; otherwise by id.
fn type_label(state: &AppState, record: &EquipmentRecord) -> String {
    record
        .equipment_type_name
        .clone()
        .or_else(|| {
            state
                .equipment_type(record.equipment_type)
                .map(|t| t.name.clone())
        })
        .unwrap_or_else(|| format!("#{}", record.equipment_type))
}

pub fn render_types(types: &[EquipmentType]) -> String {
    if types.is_empty() {
        return "No equipment types\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:>6}  {:<24}  {:<16}  COUNT", "ID", "NAME", "MASK");
    for t in types {
        let _ = writeln!(
            out,
            "{:>6}  {:<24}  {:<16}  {}",
            t.id,
            t.name,
            t.serial_mask.as_deref().unwrap_or("-"),
            t.equipment_count
        );
    }
    out
}

pub fn render_stats(stats: &EquipmentStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total equipment: {}", stats.total_equipment);
    let _ = writeln!(out, "Active:          {}", stats.total_active);
    let _ = writeln!(out, "Deleted:         {}", stats.total_deleted);
    let _ = writeln!(out, "Types:           {}", stats.total_types);
    for t in &stats.type_statistics {
        let _ = writeln!(out, "  {:<24} {}", t.name, t.equipment_count);
    }
    out
}

pub fn render_user(user: &UserProfile) -> String {
    let mut out = format!("{} (id {})", user.display_name(), user.id);
    if let Some(email) = user.email.as_deref().filter(|e| !e.is_empty()) {
        let _ = write!(out, " <{}>", email);
    }
    if let Some(last_login) = user.last_login.as_deref() {
        let _ = write!(out, ", last login {}", format_date(last_login));
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Pagination;

    fn record(value: serde_json::Value) -> EquipmentRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn equipment_uses_type_names_and_pages() {
        let mut state = AppState::default();
        state.equipment_types = vec![serde_json::from_str(
            r#"{"id":2,"name":"Switch","serial_mask":"NNNN"}"#,
        )
        .unwrap()];
        state.equipment = vec![
            record(serde_json::json!({
                "id": 1, "equipment_type": 1, "equipment_type_name": "Router",
                "serial_number": "R-1", "note": "spare"
            })),
            record(serde_json::json!({
                "id": 2, "equipment_type": 2, "serial_number": "S-1"
            })),
            record(serde_json::json!({
                "id": 3, "equipment_type": 9, "serial_number": "U-1"
            })),
        ];
        state.current_page = 2;
        state.pagination = Pagination {
            count: 25,
            next: Some("n".into()),
            previous: Some("p".into()),
        };

        let text = render_equipment(&state);
        assert!(text.contains("Router"));
        assert!(text.contains("Switch"));
        assert!(text.contains("#9"));
        assert!(text.contains("spare"));
        assert!(text.ends_with("Page 2 · 25 total · previous: 1 · next: 3\n"));
    }

    #[test]
    fn empty_list_says_so() {
        let text = render_equipment(&AppState::default());
        assert!(text.starts_with("No equipment found"));
        assert!(text.ends_with("Page 1 · 0 total\n"));
    }

    #[test]
    fn types_show_mask_placeholder() {
        let types: Vec<EquipmentType> =
            serde_json::from_str(r#"[{"id":1,"name":"Modem","equipment_count":4}]"#).unwrap();
        let text = render_types(&types);
        assert!(text.contains("Modem"));
        assert!(text.lines().nth(1).is_some_and(|l| l.contains(" - ")));
    }
}
