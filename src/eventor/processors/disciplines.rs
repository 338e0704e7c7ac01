use std::collections::HashSet;

use super::shapes::EVENTS;
use crate::eventor::models::{ApiResponse, Record, Table};

pub const DISCIPLINE_COLUMNS: [&str; 2] = ["DisciplineId", "Name"];

/// Unique `(DisciplineId, Name)` pairs seen on any event of an events response.
///
/// Pairs missing either value are skipped. Rows keep first-seen order.
pub fn disciplines_table(response: &ApiResponse) -> Table {
    let mut table = Table::new(DISCIPLINE_COLUMNS.to_vec());
    let Some(root) = response.root() else {
        return table;
    };

    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    for event in root.find_all(EVENTS.record_path) {
        for discipline in event.find_all(".//Discipline") {
            let id = discipline.find_text("DisciplineId").filter(|id| !id.is_empty());
            let name = discipline.find_text("Name").filter(|name| !name.is_empty());
            let (Some(id), Some(name)) = (id, name) else {
                continue;
            };
            if seen.insert((id, name)) {
                let mut record = Record::new();
                record.push(DISCIPLINE_COLUMNS[0], Some(id.to_string()));
                record.push(DISCIPLINE_COLUMNS[1], Some(name.to_string()));
                table.push(record);
            }
        }
    }

    table
}
