//! Case tracker list.
//!
//! - state.rs: filter signals and their mirror in the URL query
//! - view.rs: stats, filters, case cards

mod state;
mod view;

pub use view::CaseList;

use crate::shared::export::CsvExportable;
use contracts::domain::a002_case::Case;

impl CsvExportable for Case {
    fn headers() -> Vec<&'static str> {
        vec![
            "ID",
            "Title",
            "Type",
            "Status",
            "Priority",
            "Last Activity",
            "Documents",
            "AI Interactions",
            "Assigned To",
            "Due Date",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.as_string(),
            self.title.clone(),
            self.case_type.label().to_string(),
            self.status.label().to_string(),
            self.priority.as_str().to_string(),
            self.last_activity.clone(),
            self.documents.to_string(),
            self.ai_interactions.to_string(),
            self.assigned_to.clone().unwrap_or_default(),
            self.due_date.clone().unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::to_csv;
    use contracts::domain::a002_case::all_cases;

    #[test]
    fn test_case_csv_rows() {
        let cases: Vec<&Case> = all_cases().iter().take(2).collect();
        let csv = to_csv(&cases);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID,Title,Type"));
        assert!(lines[1].starts_with("1,TechCorp Employment Agreement,Employment,Active,high"));
    }
}
