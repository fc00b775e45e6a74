//! Dashboard composition root.
//!
//! # Responsibility
//! - Own every screen model together with settings and the current user.
//! - Build the role-specific dashboard summary from live screen data.
//!
//! # Invariants
//! - Settings held by a board are always valid.
//! - The gradebook filter starts scoped to the current user.
//! - `dashboard()` is a pure read; it never mutates screen models.

use crate::config::{Settings, SettingsError};
use crate::export::{export_file_name, ExportFormat, ExportResult};
use crate::model::grade::Grade;
use crate::model::record::RecordKind;
use crate::role::{CurrentUser, NavItem, Role, Screen};
use crate::seed;
use crate::service::{AlertService, AttendanceService, GradeService, StudentService, TeacherService};
use crate::store::record_store::StoreError;
use crate::summary::{AlertSummary, AttendanceTally, GradeSummary, PerformanceBand};
use chrono::NaiveDate;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

const RECENT_GRADES: usize = 5;

/// Board construction failure.
#[derive(Debug)]
pub enum BoardError {
    Settings(SettingsError),
    /// Seed data was rejected by a store.
    Store(StoreError),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Settings(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "seed rejected: {err}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Settings(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<SettingsError> for BoardError {
    fn from(value: SettingsError) -> Self {
        Self::Settings(value)
    }
}

impl From<StoreError> for BoardError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Student home screen.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentDashboard {
    pub average_percent: f64,
    pub band: PerformanceBand,
    pub attendance_rate: u32,
    pub subjects_enrolled: usize,
    /// Newest first.
    pub recent_grades: Vec<Grade>,
}

/// Teacher home screen.
#[derive(Debug, Clone, PartialEq)]
pub struct TeacherDashboard {
    pub classes: Vec<String>,
    /// Students enrolled in any of `classes`.
    pub students_in_classes: usize,
    pub class_average: f64,
    /// Present rate per class for today, in `classes` order.
    pub class_attendance: Vec<(String, u32)>,
    pub alerts: AlertSummary,
}

/// One child on the parent home screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildOverview {
    pub student_code: String,
    pub name: String,
    pub class_label: String,
    pub average_percent: f64,
    pub attendance_rate: u32,
    pub open_alerts: usize,
}

/// Parent home screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ParentDashboard {
    pub children: Vec<ChildOverview>,
}

/// Administrator home screen.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminDashboard {
    pub total_students: usize,
    pub active_teachers: usize,
    pub grades: GradeSummary,
    pub attendance_today: AttendanceTally,
    pub alerts: AlertSummary,
}

/// Role-specific home screen.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardSummary {
    Student(StudentDashboard),
    Teacher(TeacherDashboard),
    Parent(ParentDashboard),
    Admin(AdminDashboard),
}

impl DashboardSummary {
    pub fn role(&self) -> Role {
        match self {
            Self::Student(_) => Role::Student,
            Self::Teacher(_) => Role::Teacher,
            Self::Parent(_) => Role::Parent,
            Self::Admin(_) => Role::Admin,
        }
    }
}

/// Every screen model of one signed-in session.
#[derive(Debug, Clone)]
pub struct SchoolBoard {
    user: CurrentUser,
    settings: Settings,
    today: NaiveDate,
    students: StudentService,
    teachers: TeacherService,
    grades: GradeService,
    attendance: AttendanceService,
    alerts: AlertService,
}

impl SchoolBoard {
    /// Empty board for `user`.
    ///
    /// # Errors
    /// - `BoardError::Settings` when `settings` fail validation.
    pub fn new(user: CurrentUser, settings: Settings, today: NaiveDate) -> Result<Self, BoardError> {
        settings.validate()?;
        let mut grades = GradeService::new();
        grades.scope_to(&user);
        Ok(Self {
            user,
            settings,
            today,
            students: StudentService::new(),
            teachers: TeacherService::new(),
            grades,
            attendance: AttendanceService::default(),
            alerts: AlertService::new(),
        })
    }

    /// Board preloaded with the demo rosters; attendance is dated `today`.
    pub fn seeded(
        user: CurrentUser,
        settings: Settings,
        today: NaiveDate,
    ) -> Result<Self, BoardError> {
        let mut board = Self::new(user, settings, today)?;
        board.students = StudentService::from_records(seed::students())?;
        board.teachers = TeacherService::from_records(seed::teachers())?;
        board.grades = GradeService::from_records(seed::grades())?;
        board.grades.scope_to(&board.user);
        board.attendance =
            AttendanceService::with_records(seed::attendance_roster(), seed::attendance(today))?;
        board.alerts = AlertService::from_records(seed::alerts())?;
        info!(
            "event=board_seed module=board status=ok role={} students={} teachers={} grades={} attendance={} alerts={}",
            board.user.role,
            board.students.total_count(),
            board.teachers.total_count(),
            board.grades.total_count(),
            board.attendance.view().total_count(),
            board.alerts.total_count()
        );
        Ok(board)
    }

    pub fn user(&self) -> &CurrentUser {
        &self.user
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Replaces settings after validating them; invalid settings are not kept.
    pub fn update_settings(&mut self, settings: Settings) -> Result<(), BoardError> {
        settings.validate()?;
        self.settings = settings;
        info!("event=settings_update module=board status=ok");
        Ok(())
    }

    pub fn students(&self) -> &StudentService {
        &self.students
    }

    pub fn students_mut(&mut self) -> &mut StudentService {
        &mut self.students
    }

    pub fn teachers(&self) -> &TeacherService {
        &self.teachers
    }

    pub fn teachers_mut(&mut self) -> &mut TeacherService {
        &mut self.teachers
    }

    pub fn grades(&self) -> &GradeService {
        &self.grades
    }

    pub fn grades_mut(&mut self) -> &mut GradeService {
        &mut self.grades
    }

    pub fn attendance(&self) -> &AttendanceService {
        &self.attendance
    }

    pub fn attendance_mut(&mut self) -> &mut AttendanceService {
        &mut self.attendance
    }

    pub fn alerts(&self) -> &AlertService {
        &self.alerts
    }

    pub fn alerts_mut(&mut self) -> &mut AlertService {
        &mut self.alerts
    }

    pub fn navigation(&self) -> &'static [NavItem] {
        self.user.role.navigation()
    }

    pub fn can_open(&self, screen: Screen) -> bool {
        self.user.role.can_access(screen)
    }

    /// Home screen for the current user's role.
    pub fn dashboard(&self) -> DashboardSummary {
        match self.user.role {
            Role::Student => DashboardSummary::Student(self.student_dashboard()),
            Role::Teacher => DashboardSummary::Teacher(self.teacher_dashboard()),
            Role::Parent => DashboardSummary::Parent(self.parent_dashboard()),
            Role::Admin => DashboardSummary::Admin(self.admin_dashboard()),
        }
    }

    /// Every record of `kind` as delimited text, with its download name.
    pub fn export(&self, kind: RecordKind) -> ExportResult<(String, String)> {
        let body = match kind {
            RecordKind::Student => self.students.export_csv()?,
            RecordKind::Teacher => self.teachers.export_csv()?,
            RecordKind::Grade => self.grades.export_csv()?,
            RecordKind::Attendance => self.attendance.export_csv()?,
            RecordKind::Alert => self.alerts.export_csv()?,
        };
        let file_name = export_file_name(kind.as_str(), self.today, ExportFormat::Csv);
        info!(
            "event=export module=board status=ok kind={kind} bytes={}",
            body.len()
        );
        Ok((file_name, body))
    }

    fn student_code_for(&self, name: &str) -> Option<String> {
        self.students
            .find_by_name(name)
            .map(|student| student.student_code.clone())
            .or_else(|| {
                self.attendance
                    .roster()
                    .iter()
                    .find(|student| student.name.eq_ignore_ascii_case(name.trim()))
                    .map(|student| student.student_code.clone())
            })
    }

    fn student_dashboard(&self) -> StudentDashboard {
        let own = self.grades.for_student(&self.user.name);
        let summary = GradeSummary::from_grades(&own, &self.settings.grading);
        let subjects_enrolled = {
            let mut subjects: Vec<&str> = own.iter().map(|grade| grade.subject.as_str()).collect();
            subjects.sort_unstable();
            subjects.dedup();
            subjects.len()
        };
        let attendance_rate = self
            .student_code_for(&self.user.name)
            .map_or(0, |code| self.attendance.student_rate(&code));

        let mut recent_grades = own;
        recent_grades.sort_by(|a, b| b.date.cmp(&a.date));
        recent_grades.truncate(RECENT_GRADES);

        StudentDashboard {
            average_percent: summary.average_percent,
            band: summary.band(),
            attendance_rate,
            subjects_enrolled,
            recent_grades,
        }
    }

    fn teacher_dashboard(&self) -> TeacherDashboard {
        let classes = self
            .teachers
            .find_by_name(&self.user.name)
            .map(|teacher| teacher.classes.clone())
            .unwrap_or_default();
        let students_in_classes = self
            .students
            .store()
            .iter()
            .filter(|student| {
                let label = student.class_label();
                classes.iter().any(|class| class.eq_ignore_ascii_case(&label))
            })
            .count();
        let class_attendance = classes
            .iter()
            .map(|class| (class.clone(), self.attendance.class_rate(class, self.today)))
            .collect();

        TeacherDashboard {
            class_average: self.overall_grades().average_percent,
            classes,
            students_in_classes,
            class_attendance,
            alerts: self.alerts.summary(),
        }
    }

    fn parent_dashboard(&self) -> ParentDashboard {
        let children = self
            .students
            .children_of(&self.user.name)
            .into_iter()
            .map(|child| {
                let grades = self.grades.for_student(&child.name);
                let summary = GradeSummary::from_grades(&grades, &self.settings.grading);
                let open_alerts = self
                    .alerts
                    .store()
                    .iter()
                    .filter(|alert| {
                        !alert.resolved
                            && alert.student_code.as_deref() == Some(child.student_code.as_str())
                    })
                    .count();
                ChildOverview {
                    attendance_rate: self.attendance.student_rate(&child.student_code),
                    class_label: child.class_label(),
                    average_percent: summary.average_percent,
                    open_alerts,
                    student_code: child.student_code,
                    name: child.name,
                }
            })
            .collect();
        ParentDashboard { children }
    }

    fn admin_dashboard(&self) -> AdminDashboard {
        AdminDashboard {
            total_students: self.students.total_count(),
            active_teachers: self.teachers.active_count(),
            grades: self.overall_grades(),
            attendance_today: self.attendance.tally(self.today),
            alerts: self.alerts.summary(),
        }
    }

    fn overall_grades(&self) -> GradeSummary {
        GradeSummary::from_grades(self.grades.store().as_slice(), &self.settings.grading)
    }
}
