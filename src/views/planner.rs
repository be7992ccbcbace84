//! Study planner page state

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::schedule::{
    load_status, minutes_on, projected_finish, redistribute_overdue, tasks_on, week_days,
    CalendarTask, LoadStatus, PaceHint, PlannerSettings, TaskKind, TaskStatus,
};
use crate::store::Goal;

pub const DAILY_MINUTES_RANGE: (u32, u32) = (15, 180);
pub const SIMULATED_MINUTES_RANGE: (u32, u32) = (15, 120);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlannerViewMode {
    Week,
    Month,
}

/// One column of the week view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayColumn {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_study_day: bool,
    pub tasks: Vec<CalendarTask>,
    pub total_min: u32,
    pub load: LoadStatus,
}

impl DayColumn {
    /// Rest day with nothing planned
    pub fn is_free(&self) -> bool {
        !self.is_study_day && self.tasks.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub minutes_per_day: u32,
    pub days_remaining: Option<u32>,
    pub finish_date: Option<NaiveDate>,
    pub hint: PaceHint,
}

/// Demo calendar anchored on `today`
pub fn demo_tasks(today: NaiveDate) -> Vec<CalendarTask> {
    let task = |id: &str, offset: i64, kind, title: &str, minutes, status, node: Option<&str>| {
        CalendarTask {
            id: id.to_string(),
            date: today + Duration::days(offset),
            title: title.to_string(),
            kind,
            duration_min: minutes,
            status,
            node_id: node.map(str::to_string),
            node_title: None,
        }
    };

    use TaskKind::*;
    use TaskStatus::*;
    vec![
        task("ct1", 0, Lesson, "Vídeo: HTML Básico", 15, Pending, Some("html-basics")),
        task("ct2", 0, Quiz, "Quiz: Etiquetas HTML", 10, Pending, Some("html-basics")),
        task("ct3", 0, Review, "SRS: JavaScript (30 cartas)", 15, Pending, None),
        task("ct4", 1, Lesson, "MDN: Intro a CSS", 20, Pending, Some("css-basics")),
        task("ct5", 1, Project, "Proyecto Git: Init", 45, Pending, Some("git-init")),
        task("ct6", 2, Lesson, "Vídeo: CSS Selectores", 25, Pending, Some("css-basics")),
        task("ct7", 2, Review, "SRS: HTML Semántico", 10, Pending, None),
        task("ct_old1", -2, Lesson, "Intro a la Web", 15, Overdue, Some("intro-web")),
    ]
}

fn clamp(value: u32, (lo, hi): (u32, u32)) -> u32 {
    value.clamp(lo, hi)
}

#[derive(Debug, Clone)]
pub struct PlannerView {
    today: NaiveDate,
    cursor: NaiveDate,
    mode: PlannerViewMode,
    tasks: Vec<CalendarTask>,
    selected: Option<String>,
    settings: PlannerSettings,
    settings_open: bool,
    simulated_minutes: u32,
}

impl PlannerView {
    pub fn new(today: NaiveDate, tasks: Vec<CalendarTask>) -> Self {
        Self {
            today,
            cursor: today,
            mode: PlannerViewMode::Week,
            tasks,
            selected: None,
            settings: PlannerSettings::default(),
            settings_open: false,
            simulated_minutes: 60,
        }
    }

    /// Planner on the demo calendar for `today`
    pub fn demo(today: NaiveDate) -> Self {
        Self::new(today, demo_tasks(today))
    }

    pub fn mode(&self) -> PlannerViewMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: PlannerViewMode) {
        self.mode = mode;
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    pub fn tasks(&self) -> &[CalendarTask] {
        &self.tasks
    }

    pub fn next_week(&mut self) {
        self.cursor += Duration::days(7);
    }

    pub fn previous_week(&mut self) {
        self.cursor -= Duration::days(7);
    }

    pub fn go_to_today(&mut self) {
        self.cursor = self.today;
    }

    pub fn week(&self) -> Vec<DayColumn> {
        week_days(self.cursor)
            .into_iter()
            .map(|date| {
                let total_min = minutes_on(&self.tasks, date);
                DayColumn {
                    date,
                    is_today: date == self.today,
                    is_study_day: self.settings.is_study_day(date),
                    tasks: tasks_on(&self.tasks, date).cloned().collect(),
                    total_min,
                    load: load_status(total_min, self.settings.daily_minutes),
                }
            })
            .collect()
    }

    pub fn select_task(&mut self, task_id: &str) {
        if self.tasks.iter().any(|t| t.id == task_id) {
            self.selected = Some(task_id.to_string());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_task(&self) -> Option<&CalendarTask> {
        let id = self.selected.as_deref()?;
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn complete_task(&mut self, task_id: &str) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == task_id) {
            Some(task) => {
                task.status = TaskStatus::Completed;
                true
            }
            None => false,
        }
    }

    pub fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    pub fn settings_open(&self) -> bool {
        self.settings_open
    }

    pub fn open_settings(&mut self) {
        self.settings_open = true;
    }

    pub fn close_settings(&mut self) {
        self.settings_open = false;
    }

    pub fn set_daily_minutes(&mut self, minutes: u32) {
        self.settings.daily_minutes = clamp(minutes, DAILY_MINUTES_RANGE);
    }

    pub fn toggle_study_day(&mut self, weekday: u32) {
        self.settings.toggle_study_day(weekday);
    }

    pub fn simulated_minutes(&self) -> u32 {
        self.simulated_minutes
    }

    pub fn set_simulated_minutes(&mut self, minutes: u32) {
        self.simulated_minutes = clamp(minutes, SIMULATED_MINUTES_RANGE);
    }

    /// Adopt the simulated pace as the daily target
    pub fn apply_simulation(&mut self) {
        self.settings.daily_minutes = self.simulated_minutes;
    }

    pub fn projection(&self, goal: &Goal) -> Projection {
        let minutes = self.simulated_minutes;
        let remaining = goal.remaining_nodes();
        Projection {
            minutes_per_day: minutes,
            days_remaining: super::schedule::days_to_finish(remaining, minutes),
            finish_date: projected_finish(self.today, remaining, minutes),
            hint: PaceHint::for_minutes(minutes),
        }
    }

    pub fn backlog(&self) -> Vec<&CalendarTask> {
        self.tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Overdue)
            .collect()
    }

    /// "Repartir automáticamente"
    pub fn redistribute_backlog(&mut self) -> Vec<String> {
        redistribute_overdue(&mut self.tasks, self.today, &self.settings)
    }
}
