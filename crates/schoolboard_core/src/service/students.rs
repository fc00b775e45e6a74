//! Student roster screen model.

use crate::filter::StudentFilter;
use crate::model::student::Student;
use crate::service::list_view::ListView;

/// Roster screen: every student plus the current roster filter.
pub type StudentService = ListView<Student, StudentFilter>;

impl ListView<Student, StudentFilter> {
    /// Student with the given school code, ignoring case and padding.
    pub fn find_by_code(&self, student_code: &str) -> Option<&Student> {
        let code = student_code.trim();
        self.store()
            .find(|student| student.student_code.eq_ignore_ascii_case(code))
    }

    /// Student with the given display name, ignoring case and padding.
    pub fn find_by_name(&self, name: &str) -> Option<&Student> {
        let name = name.trim();
        self.store()
            .find(|student| student.name.trim().eq_ignore_ascii_case(name))
    }

    /// Students of one class label such as `7A`, in store order.
    pub fn roster(&self, class_label: &str) -> Vec<Student> {
        self.store().derive(&StudentFilter::class(class_label))
    }

    /// Students whose recorded parent is `parent_name`.
    pub fn children_of(&self, parent_name: &str) -> Vec<Student> {
        let parent = parent_name.trim();
        self.store()
            .iter()
            .filter(|student| student.parent_name.trim().eq_ignore_ascii_case(parent))
            .cloned()
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.store().iter().filter(|student| student.is_active()).count()
    }

    /// Distinct year levels in first-seen order, for the grade selector.
    pub fn grade_levels(&self) -> Vec<String> {
        let mut levels: Vec<String> = Vec::new();
        for student in self.store() {
            let level = student.grade_level.trim();
            if !levels.iter().any(|known| known == level) {
                levels.push(level.to_string());
            }
        }
        levels
    }
}

#[cfg(test)]
mod tests {
    use super::StudentService;
    use crate::model::student::Student;

    fn service() -> StudentService {
        StudentService::from_records([
            Student::new("STU001", "John Doe", "john.doe@sjcsi.edu").with_parent("Robert Doe", "+63"),
            Student::new("STU002", "Jane Smith", "jane.smith@sjcsi.edu").in_class("8", "B"),
            Student::new("STU003", "Bob Johnson", "bob.johnson@sjcsi.edu").in_class("7", "a"),
        ])
        .unwrap()
    }

    #[test]
    fn lookups_ignore_case() {
        let service = service();
        assert_eq!(service.find_by_code(" stu002 ").unwrap().name, "Jane Smith");
        assert_eq!(service.find_by_name("john doe").unwrap().student_code, "STU001");
        assert!(service.find_by_code("STU404").is_none());
    }

    #[test]
    fn roster_and_levels() {
        let service = service();
        let names: Vec<String> = service.roster("7a").into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["John Doe", "Bob Johnson"]);
        assert_eq!(service.grade_levels(), vec!["7", "8"]);
        assert_eq!(service.children_of("robert doe").len(), 1);
    }
}
