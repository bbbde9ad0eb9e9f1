//! The fixed daily plan and the static widgets around it on the home screen.

use chrono::Datelike;

/// Length of one session countdown. Matches [`WorkoutPlan::total_secs`] of
/// the daily plan.
pub const SESSION_LENGTH_SECS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exercise {
    pub name: &'static str,
    pub duration_secs: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutPlan {
    pub name: &'static str,
    pub exercises: &'static [Exercise],
}

impl WorkoutPlan {
    /// Today's warm-up: five one-minute exercises.
    pub fn daily() -> &'static WorkoutPlan {
        &DAILY_PLAN
    }

    pub fn total_secs(&self) -> u32 {
        self.exercises.iter().map(|e| e.duration_secs).sum()
    }

    /// Whole minutes, derived from the exercises so the two never drift.
    pub fn duration_minutes(&self) -> u32 {
        self.total_secs() / 60
    }

    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }
}

static DAILY_PLAN: WorkoutPlan = WorkoutPlan {
    name: "Утренняя разминка",
    exercises: &[
        Exercise {
            name: "Разминка шеи",
            duration_secs: 60,
        },
        Exercise {
            name: "Вращения плечами",
            duration_secs: 60,
        },
        Exercise {
            name: "Наклоны в стороны",
            duration_secs: 60,
        },
        Exercise {
            name: "Приседания",
            duration_secs: 60,
        },
        Exercise {
            name: "Растяжка",
            duration_secs: 60,
        },
    ],
};

/// A teaser card under the daily plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub name: &'static str,
    pub icon: &'static str,
    pub minutes: u32,
}

pub const SUGGESTIONS: [Suggestion; 2] = [
    Suggestion {
        name: "Растяжка за 7 минут",
        icon: "🌊",
        minutes: 7,
    },
    Suggestion {
        name: "Энергичная зарядка",
        icon: "⚡",
        minutes: 10,
    },
];

const QUOTES: [&str; 4] = [
    "💪 Даже 5 минут — это прогресс!",
    "🔥 Ты сильнее, чем думаешь!",
    "⚡ Каждый день — новая победа!",
    "🎯 Маленькие шаги ведут к большим результатам!",
];

/// Motivational line for the greeting, one per calendar day.
pub fn motivational_quote(day_of_year: u32) -> &'static str {
    QUOTES[day_of_year as usize % QUOTES.len()]
}

pub fn todays_quote() -> &'static str {
    motivational_quote(chrono::Local::now().ordinal0())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayMark {
    Done,
    Today,
    Upcoming,
}

/// Sample week shown in the progress card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyProgress {
    pub completed: u32,
    pub target: u32,
    pub days: [(&'static str, DayMark); 7],
}

impl WeeklyProgress {
    pub fn sample() -> Self {
        use DayMark::{Done, Today, Upcoming};
        Self {
            completed: 3,
            target: 5,
            days: [
                ("Пн", Done),
                ("Вт", Done),
                ("Ср", Done),
                ("Чт", Today),
                ("Пт", Upcoming),
                ("Сб", Upcoming),
                ("Вс", Upcoming),
            ],
        }
    }

    pub fn ratio(&self) -> f64 {
        if self.target == 0 {
            return 0.0;
        }
        (self.completed as f64 / self.target as f64).min(1.0)
    }
}
