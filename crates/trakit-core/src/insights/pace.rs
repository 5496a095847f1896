//! Goal pacing: required daily contribution to hit a target by its deadline

use chrono::NaiveDate;

use crate::models::Goal;

/// Daily amount to save to reach `goal.target_amount` by `goal.deadline`
///
/// Zero once the target is met, and zero when the deadline is `as_of` itself.
/// The day count is the absolute distance between `as_of` and the deadline,
/// so an unmet goal whose deadline has passed still paces against the elapsed
/// distance; callers that care distinguish overdue goals by comparing the
/// dates directly.
pub fn goal_pace(goal: &Goal, as_of: NaiveDate) -> i64 {
    let remaining = goal.target_amount - goal.current_amount;
    let diff_days = (goal.deadline - as_of).num_days().abs();
    if diff_days <= 0 || remaining <= 0 {
        return 0;
    }
    // ceiling division, both operands positive here
    (remaining + diff_days - 1) / diff_days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn goal(target: i64, current: i64, deadline: NaiveDate) -> Goal {
        Goal {
            id: 1,
            name: "iPhone".into(),
            target_amount: target,
            current_amount: current,
            deadline,
            icon: "📱".into(),
            color: "indigo".into(),
        }
    }

    #[test]
    fn test_goal_pace_ten_days_out() {
        let g = goal(80000, 24000, date(2023, 10, 20));
        assert_eq!(goal_pace(&g, date(2023, 10, 10)), 5600); // ceil(56000 / 10)
    }

    #[test]
    fn test_goal_pace_rounds_up() {
        let g = goal(1000, 0, date(2023, 10, 13));
        // ceil(1000 / 3) = 334
        assert_eq!(goal_pace(&g, date(2023, 10, 10)), 334);
    }

    #[test]
    fn test_goal_pace_zero_when_target_met() {
        let g = goal(25000, 25000, date(2024, 3, 15));
        assert_eq!(goal_pace(&g, date(2023, 10, 10)), 0);

        let over = goal(25000, 30000, date(2024, 3, 15));
        assert_eq!(goal_pace(&over, date(2023, 10, 10)), 0);
    }

    #[test]
    fn test_goal_pace_zero_on_deadline_day() {
        let g = goal(80000, 24000, date(2023, 10, 10));
        assert_eq!(goal_pace(&g, date(2023, 10, 10)), 0);
    }

    #[test]
    fn test_goal_pace_past_deadline_uses_absolute_distance() {
        let g = goal(80000, 24000, date(2023, 10, 1));
        // 9 days past the deadline: still paced, ceil(56000 / 9) = 6223
        assert_eq!(goal_pace(&g, date(2023, 10, 10)), 6223);
    }
}
