//! Faculty screen model.

use crate::filter::TeacherFilter;
use crate::model::teacher::{Teacher, DEPARTMENTS};
use crate::service::list_view::ListView;

/// Faculty screen: every teacher plus the current department/search filter.
pub type TeacherService = ListView<Teacher, TeacherFilter>;

impl ListView<Teacher, TeacherFilter> {
    /// Department selector options.
    pub fn departments(&self) -> &'static [&'static str] {
        DEPARTMENTS
    }

    pub fn find_by_code(&self, teacher_code: &str) -> Option<&Teacher> {
        let code = teacher_code.trim();
        self.store()
            .find(|teacher| teacher.teacher_code.eq_ignore_ascii_case(code))
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Teacher> {
        let name = name.trim();
        self.store()
            .find(|teacher| teacher.name.trim().eq_ignore_ascii_case(name))
    }

    /// Teachers assigned to `class_label`.
    pub fn teaching_class(&self, class_label: &str) -> Vec<Teacher> {
        self.store()
            .iter()
            .filter(|teacher| teacher.teaches_class(class_label))
            .cloned()
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.store()
            .iter()
            .filter(|teacher| teacher.status.is_active())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::TeacherService;
    use crate::model::student::MemberStatus;
    use crate::model::teacher::{Teacher, TeacherPatch};

    #[test]
    fn department_filter_and_class_lookup() {
        let mut service = TeacherService::from_records([
            Teacher::new("TCH001", "Mary Smith", "mary.smith@sjcsi.edu").teaching(["Algebra"], ["7A", "8B"]),
            Teacher::new("TCH002", "James Wilson", "james.wilson@sjcsi.edu")
                .in_department("Science")
                .teaching(["Biology"], ["8A"]),
        ])
        .unwrap();

        service.filter_mut().department = Some("Science".to_string());
        assert_eq!(service.visible()[0].teacher_code, "TCH002");
        assert_eq!(service.teaching_class("8b")[0].name, "Mary Smith");
        assert_eq!(service.departments().len(), 7);

        let id = service.find_by_code("tch002").unwrap().id;
        service
            .update(
                id,
                &TeacherPatch {
                    status: Some(MemberStatus::Inactive),
                    ..TeacherPatch::default()
                },
            )
            .unwrap();
        assert_eq!(service.active_count(), 1);
    }
}
