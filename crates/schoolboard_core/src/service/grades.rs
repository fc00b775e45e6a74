//! Gradebook screen model.

use crate::config::GradingSettings;
use crate::filter::{GradeFilter, Where};
use crate::model::grade::Grade;
use crate::role::CurrentUser;
use crate::service::list_view::ListView;
use crate::summary::GradeSummary;

/// Gradebook screen: every grade plus the current gradebook filter.
pub type GradeService = ListView<Grade, GradeFilter>;

impl ListView<Grade, GradeFilter> {
    /// Resets the filter to the default scope for `user`.
    ///
    /// Students are pinned to their own grades; other roles see everything.
    pub fn scope_to(&mut self, user: &CurrentUser) {
        self.set_filter(GradeFilter::for_user(user));
    }

    /// Summary of the grades currently visible.
    pub fn summary(&self, policy: &GradingSettings) -> GradeSummary {
        GradeSummary::from_grades(&self.visible(), policy)
    }

    /// Every grade recorded for `student`, ignoring the filter.
    pub fn for_student(&self, student: &str) -> Vec<Grade> {
        self.store().derive(&GradeFilter {
            student: Some(student.to_string()),
            ..GradeFilter::default()
        })
    }

    /// Distinct subjects in first-seen order.
    pub fn subjects(&self) -> Vec<String> {
        let mut subjects: Vec<String> = Vec::new();
        for grade in self.store() {
            if !subjects.iter().any(|known| known == &grade.subject) {
                subjects.push(grade.subject.clone());
            }
        }
        subjects
    }

    /// Grades scoring below `threshold` percent.
    pub fn below(&self, threshold: f64) -> Vec<Grade> {
        self.store()
            .derive(&Where(|grade: &Grade| grade.percentage() < threshold))
    }
}
