use log::warn;
use std::fmt;

/// One to-do entry. Ids are assigned by the store and never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: u32,
    title: String,
    completed: bool,
}

impl Task {
    pub(crate) fn new(id: u32, title: String, completed: bool) -> Self {
        Self {
            id,
            title,
            completed,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(crate) fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    /// Renders the task as one line of the storage file:
    /// `<id>,<title>,<completed>` with `completed` written as `true`/`false`.
    ///
    /// A title containing a comma produces a line [`parse_line`](Self::parse_line)
    /// cannot read back correctly; the format has no escaping.
    pub fn to_line(&self) -> String {
        format!("{},{},{}", self.id, self.title, self.completed)
    }

    /// Parses one storage line back into a task.
    ///
    /// Splits on every comma, so the line must have exactly three fields.
    /// Returns `None` (with a logged warning) for a wrong field count or a
    /// non-numeric id. The completed field is read leniently: anything other
    /// than case-insensitive "true" counts as false.
    pub fn parse_line(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split(',').collect();
        let &[id, title, completed] = parts.as_slice() else {
            warn!("skipping malformed task line: {line}");
            return None;
        };
        let Ok(id) = id.parse::<u32>() else {
            warn!("skipping task line with invalid id: {line}");
            return None;
        };
        let completed = completed.eq_ignore_ascii_case("true");
        Some(Self::new(id, title.to_string(), completed))
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.completed { "Done" } else { "Pending" };
        write!(f, "{:<3} {:<20} {:<10}", self.id, self.title, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_line_writes_lowercase_bool() {
        let task = Task::new(1, "Buy milk".to_string(), false);
        assert_eq!(task.to_line(), "1,Buy milk,false");

        let done = Task::new(2, "Write spec".to_string(), true);
        assert_eq!(done.to_line(), "2,Write spec,true");
    }

    #[test]
    fn parse_line_inverts_to_line() {
        let original = Task::new(7, "Water plants".to_string(), true);

        let parsed = Task::parse_line(&original.to_line()).unwrap();

        assert_eq!(parsed, original);
    }

    #[test]
    fn parse_line_rejects_missing_field() {
        assert_eq!(Task::parse_line("2,Title"), None);
    }

    #[test]
    fn parse_line_rejects_extra_field() {
        // A comma inside the title splits into four fields; the record is lost
        // rather than silently truncated.
        assert_eq!(Task::parse_line("3,Eggs, milk,false"), None);
    }

    #[test]
    fn parse_line_rejects_non_numeric_id() {
        assert_eq!(Task::parse_line("abc,Title,false"), None);
    }

    #[test]
    fn parse_line_reads_completed_leniently() {
        assert!(Task::parse_line("1,a,TRUE").unwrap().is_completed());
        assert!(Task::parse_line("1,a,True").unwrap().is_completed());
        assert!(!Task::parse_line("1,a,yes").unwrap().is_completed());
        assert!(!Task::parse_line("1,a,").unwrap().is_completed());
    }

    #[test]
    fn parse_line_accepts_empty_title() {
        let task = Task::parse_line("4,,false").unwrap();
        assert_eq!(task.title(), "");
    }

    #[test]
    fn display_is_fixed_width() {
        let task = Task::new(1, "Buy milk".to_string(), false);
        assert_eq!(task.to_string(), "1   Buy milk             Pending   ");

        let done = Task::new(12, "Write spec".to_string(), true);
        assert_eq!(done.to_string(), "12  Write spec           Done      ");
    }
}
