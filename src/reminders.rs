use chrono::NaiveDate;

use crate::calendar::days_between;

/// Milestones of the daily collection cycle, keyed by days until (or past)
/// the due date:
///   D-3:  first reminder, collection becomes pending
///   D-1:  second reminder
///   D-day: final "due today" reminder
///   D+3:  late notice, collection marked late
///   D+7:  escalation to tenant and owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReminderKind {
    DueInThreeDays,
    DueTomorrow,
    DueToday,
    Late,
    Escalated,
}

impl ReminderKind {
    /// The `reminder_type` tag stamped onto queued message payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DueInThreeDays => "d_minus_3",
            Self::DueTomorrow => "d_minus_1",
            Self::DueToday => "d_day",
            Self::Late => "d_plus_3_late",
            Self::Escalated => "d_plus_7_escalation",
        }
    }
}

impl std::fmt::Display for ReminderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whole days from `today` until the due date; negative once overdue.
pub fn days_until_due(due_on: NaiveDate, today: NaiveDate) -> i64 {
    days_between(today, due_on)
}

/// Which reminder, if any, fires for a payment on `today`. Dispatch and
/// once-per-milestone dedupe are the caller's concern.
pub fn reminder_for(due_on: NaiveDate, today: NaiveDate) -> Option<ReminderKind> {
    match days_until_due(due_on, today) {
        3 => Some(ReminderKind::DueInThreeDays),
        1 => Some(ReminderKind::DueTomorrow),
        0 => Some(ReminderKind::DueToday),
        -3 => Some(ReminderKind::Late),
        -7 => Some(ReminderKind::Escalated),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{days_until_due, reminder_for, ReminderKind};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn counts_days_until_due() {
        let due = date(2024, 3, 10);
        assert_eq!(days_until_due(due, date(2024, 3, 7)), 3);
        assert_eq!(days_until_due(due, date(2024, 3, 10)), 0);
        assert_eq!(days_until_due(due, date(2024, 3, 13)), -3);
    }

    #[test]
    fn milestones_fire_on_the_exact_day() {
        let due = date(2024, 3, 10);
        assert_eq!(
            reminder_for(due, date(2024, 3, 7)),
            Some(ReminderKind::DueInThreeDays)
        );
        assert_eq!(
            reminder_for(due, date(2024, 3, 9)),
            Some(ReminderKind::DueTomorrow)
        );
        assert_eq!(
            reminder_for(due, date(2024, 3, 10)),
            Some(ReminderKind::DueToday)
        );
        assert_eq!(reminder_for(due, date(2024, 3, 13)), Some(ReminderKind::Late));
        assert_eq!(
            reminder_for(due, date(2024, 3, 17)),
            Some(ReminderKind::Escalated)
        );
    }

    #[test]
    fn off_milestone_days_fire_nothing() {
        let due = date(2024, 3, 10);
        assert_eq!(reminder_for(due, date(2024, 3, 8)), None);
        assert_eq!(reminder_for(due, date(2024, 3, 12)), None);
        assert_eq!(reminder_for(due, date(2024, 4, 1)), None);
    }

    #[test]
    fn milestone_tags_match_the_message_payload_contract() {
        assert_eq!(ReminderKind::DueInThreeDays.as_str(), "d_minus_3");
        assert_eq!(ReminderKind::Escalated.as_str(), "d_plus_7_escalation");
    }
}
