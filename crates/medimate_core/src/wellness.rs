//! Daily wellness tips.

use chrono::{Datelike, NaiveDate};

pub const TIPS: &[&str] = &[
    "Take a 10-minute walk after each meal to aid digestion and boost energy.",
    "Practice deep breathing for 5 minutes daily to reduce stress levels.",
    "Eat a rainbow of fruits and vegetables to get diverse nutrients.",
    "Stand up and stretch every hour if you work at a desk.",
    "Keep a water bottle nearby to remind yourself to stay hydrated.",
    "Limit screen time 1 hour before bed for better sleep quality.",
    "Wash your hands frequently to prevent the spread of germs.",
    "Take the stairs instead of the elevator when possible.",
    "Practice gratitude daily - it improves mental well-being.",
    "Get some sunlight exposure in the morning to regulate your sleep cycle.",
];

/// The tip for a given calendar date, rotating by day of month.
pub fn daily_tip(date: NaiveDate) -> &'static str {
    TIPS[date.day() as usize % TIPS.len()]
}
