//! Calendar arithmetic for the planner
//!
//! Pure functions only; the planner page holds the state.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Average minutes to finish one skill node
pub const MINUTES_PER_NODE: u32 = 45;
/// Minutes over the daily limit still shown as a warning, not overload
pub const WARN_MARGIN_MIN: u32 = 15;
/// How far ahead overdue work may be moved
pub const REDISTRIBUTE_HORIZON_DAYS: i64 = 28;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskKind {
    Lesson,
    Quiz,
    Review,
    Project,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Pending,
    Completed,
    Overdue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarTask {
    pub id: String,
    pub date: NaiveDate,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: TaskKind,
    pub duration_min: u32,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerSettings {
    pub daily_minutes: u32,
    /// Weekday numbers, 0 = Sunday
    pub study_days: Vec<u32>,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            daily_minutes: 60,
            study_days: vec![1, 2, 3, 4, 5],
        }
    }
}

impl PlannerSettings {
    pub fn is_study_day(&self, date: NaiveDate) -> bool {
        self.study_days
            .contains(&date.weekday().num_days_from_sunday())
    }

    /// Add or remove a weekday (0 = Sunday)
    pub fn toggle_study_day(&mut self, weekday: u32) {
        if weekday > 6 {
            return;
        }
        if let Some(pos) = self.study_days.iter().position(|d| *d == weekday) {
            self.study_days.remove(pos);
        } else {
            self.study_days.push(weekday);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoadStatus {
    Empty,
    Ok,
    Warn,
    Overload,
}

pub fn load_status(minutes: u32, limit: u32) -> LoadStatus {
    if minutes == 0 {
        LoadStatus::Empty
    } else if minutes <= limit {
        LoadStatus::Ok
    } else if minutes <= limit + WARN_MARGIN_MIN {
        LoadStatus::Warn
    } else {
        LoadStatus::Overload
    }
}

/// Monday-to-Sunday week containing `date`
pub fn week_days(date: NaiveDate) -> Vec<NaiveDate> {
    let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
    (0..7).map(|i| monday + Duration::days(i)).collect()
}

pub fn tasks_on(tasks: &[CalendarTask], date: NaiveDate) -> impl Iterator<Item = &CalendarTask> {
    tasks.iter().filter(move |t| t.date == date)
}

pub fn minutes_on(tasks: &[CalendarTask], date: NaiveDate) -> u32 {
    tasks_on(tasks, date).map(|t| t.duration_min).sum()
}

/// Study days needed to finish `remaining_nodes`. `None` at zero pace or
/// when the count does not fit in a `u32`.
pub fn days_to_finish(remaining_nodes: u32, minutes_per_day: u32) -> Option<u32> {
    if minutes_per_day == 0 {
        return None;
    }
    let minutes = u64::from(remaining_nodes) * u64::from(MINUTES_PER_NODE);
    u32::try_from(minutes.div_ceil(u64::from(minutes_per_day))).ok()
}

pub fn projected_finish(
    today: NaiveDate,
    remaining_nodes: u32,
    minutes_per_day: u32,
) -> Option<NaiveDate> {
    let days = days_to_finish(remaining_nodes, minutes_per_day)?;
    today.checked_add_signed(Duration::days(i64::from(days)))
}

/// Hint under the pace slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaceHint {
    Earlier,
    OnTrack,
    Later,
}

impl PaceHint {
    pub fn for_minutes(minutes_per_day: u32) -> Self {
        if minutes_per_day > 60 {
            PaceHint::Earlier
        } else if minutes_per_day < 45 {
            PaceHint::Later
        } else {
            PaceHint::OnTrack
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaceHint::Earlier => "2 semanas antes",
            PaceHint::OnTrack => "Según lo previsto",
            PaceHint::Later => "3 semanas tarde",
        }
    }
}

/// Move overdue tasks onto the first study day from `today` whose planned
/// minutes still fit. Moved tasks become pending. Tasks with no room within
/// the horizon stay overdue. Returns the ids that moved.
pub fn redistribute_overdue(
    tasks: &mut [CalendarTask],
    today: NaiveDate,
    settings: &PlannerSettings,
) -> Vec<String> {
    let mut moved = Vec::new();

    for i in 0..tasks.len() {
        if tasks[i].status != TaskStatus::Overdue {
            continue;
        }
        let duration = tasks[i].duration_min;
        let planned: &[CalendarTask] = tasks;

        let slot = (0..REDISTRIBUTE_HORIZON_DAYS)
            .map(|offset| today + Duration::days(offset))
            .filter(|day| settings.is_study_day(*day))
            .find(|day| minutes_on(planned, *day) + duration <= settings.daily_minutes);

        if let Some(day) = slot {
            let task = &mut tasks[i];
            task.date = day;
            task.status = TaskStatus::Pending;
            moved.push(task.id.clone());
        }
    }

    moved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(id: &str, on: NaiveDate, minutes: u32, status: TaskStatus) -> CalendarTask {
        CalendarTask {
            id: id.to_string(),
            date: on,
            title: id.to_string(),
            kind: TaskKind::Lesson,
            duration_min: minutes,
            status,
            node_id: None,
            node_title: None,
        }
    }

    #[test]
    fn test_load_thresholds() {
        assert_eq!(load_status(0, 60), LoadStatus::Empty);
        assert_eq!(load_status(60, 60), LoadStatus::Ok);
        assert_eq!(load_status(75, 60), LoadStatus::Warn);
        assert_eq!(load_status(76, 60), LoadStatus::Overload);
    }

    #[test]
    fn test_week_starts_monday() {
        // 2026-10-18 is a Sunday
        let week = week_days(date(2026, 10, 18));
        assert_eq!(week.first(), Some(&date(2026, 10, 12)));
        assert_eq!(week.last(), Some(&date(2026, 10, 18)));

        let week = week_days(date(2026, 10, 12));
        assert_eq!(week[0], date(2026, 10, 12));
    }

    #[test]
    fn test_projection() {
        // 33 nodes * 45 min = 1485 min
        assert_eq!(days_to_finish(33, 60), Some(25));
        assert_eq!(days_to_finish(33, 45), Some(33));
        assert_eq!(days_to_finish(33, 0), None);

        // 100M nodes * 45 min overflows u32 minutes but not the day count
        assert_eq!(days_to_finish(100_000_000, 60), Some(75_000_000));
        assert_eq!(days_to_finish(u32::MAX, 1), None);
        assert_eq!(projected_finish(date(2026, 10, 16), u32::MAX, 15), None);
        assert_eq!(
            projected_finish(date(2026, 10, 16), 33, 60),
            Some(date(2026, 11, 10))
        );
    }

    #[test]
    fn test_pace_hint() {
        assert_eq!(PaceHint::for_minutes(75), PaceHint::Earlier);
        assert_eq!(PaceHint::for_minutes(60), PaceHint::OnTrack);
        assert_eq!(PaceHint::for_minutes(30), PaceHint::Later);
    }

    #[test]
    fn test_study_day_toggle() {
        let mut settings = PlannerSettings::default();
        // Friday
        assert!(settings.is_study_day(date(2026, 10, 16)));
        settings.toggle_study_day(5);
        assert!(!settings.is_study_day(date(2026, 10, 16)));
        settings.toggle_study_day(0);
        assert!(settings.is_study_day(date(2026, 10, 18)));
        settings.toggle_study_day(9);
        assert_eq!(settings.study_days.len(), 5);
    }

    #[test]
    fn test_redistribute_respects_capacity() {
        // Thursday, already full
        let today = date(2026, 10, 15);
        let mut tasks = vec![
            task("busy", today, 55, TaskStatus::Pending),
            task("late", date(2026, 10, 13), 15, TaskStatus::Overdue),
            task("huge", date(2026, 10, 12), 90, TaskStatus::Overdue),
        ];

        let moved = redistribute_overdue(&mut tasks, today, &PlannerSettings::default());

        assert_eq!(moved, vec!["late".to_string()]);
        assert_eq!(tasks[1].date, date(2026, 10, 16));
        assert_eq!(tasks[1].status, TaskStatus::Pending);
        assert_eq!(tasks[2].status, TaskStatus::Overdue);
    }
}
