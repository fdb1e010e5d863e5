use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Assignment {
    pub id: i64,
    pub name: String,
    pub course: String,
    pub due_date: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub completed: bool,
}

/// A spreadsheet row ready for insertion.
///
/// Cells that were empty in the sheet stay `None`; the `NOT NULL` columns
/// of the `assignments` table reject them at insert time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewAssignment {
    pub name: Option<String>,
    pub course: Option<String>,
    pub due_date: Option<String>,
    pub kind: Option<String>,
}

impl NewAssignment {
    pub fn new(
        name: impl Into<String>,
        course: impl Into<String>,
        due_date: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            course: Some(course.into()),
            due_date: Some(due_date.into()),
            kind: Some(kind.into()),
        }
    }
}
