//! # Onboarding Wizard
//!
//! A four-step linear wizard that fills a [`ProfileDraft`] and hands back a
//! [`UserProfile`] when the last step is confirmed.
//!
//! ```text
//! Goal ──▶ AboutYou ──▶ Activity ──▶ Disclaimer ──▶ (completed)
//!   ◀──────────◀────────────◀
//! ```
//!
//! Moving forward is gated by [`Wizard::can_proceed`], a pure predicate over
//! the draft for the current step. A step with missing answers does not
//! produce an error, the forward transition is simply inert. Moving back is
//! always allowed except on the first step.

use crate::profile::{ActivityLevel, Gender, Goal, ProfileDraft, UserProfile, WorkoutTime};

pub const STEP_COUNT: usize = 4;

pub const DISCLAIMER_TITLE: &str = "Медицинский дисклеймер";

pub const DISCLAIMER_TEXT: &str =
    "Это приложение предназначено только для информационных целей и не заменяет \
профессиональную медицинскую консультацию. Перед началом любых физических \
упражнений проконсультируйтесь с врачом. Мы не несём ответственности за \
возможные травмы или проблемы со здоровьем.";

pub const CONSENT_TEXT: &str =
    "Я понимаю и принимаю условия. Я подтверждаю, что у меня нет противопоказаний \
к физическим нагрузкам, и я беру на себя ответственность за своё здоровье.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Goal,
    AboutYou,
    Activity,
    Disclaimer,
}

impl Step {
    /// 1-based position shown as "n/4".
    pub fn number(self) -> usize {
        match self {
            Step::Goal => 1,
            Step::AboutYou => 2,
            Step::Activity => 3,
            Step::Disclaimer => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Goal => "🎯 Ваша цель",
            Step::AboutYou => "📊 О вас",
            Step::Activity => "⚡ Активность",
            Step::Disclaimer => "⚠️ Важно",
        }
    }

    /// Editable fields on this step, in focus order.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Step::Goal => &[Field::Goal],
            Step::AboutYou => &[Field::Gender, Field::Age, Field::Height, Field::Weight],
            Step::Activity => &[Field::ActivityLevel, Field::WorkoutTime],
            Step::Disclaimer => &[Field::Disclaimer],
        }
    }

    fn following(self) -> Option<Step> {
        match self {
            Step::Goal => Some(Step::AboutYou),
            Step::AboutYou => Some(Step::Activity),
            Step::Activity => Some(Step::Disclaimer),
            Step::Disclaimer => None,
        }
    }

    fn preceding(self) -> Option<Step> {
        match self {
            Step::Goal => None,
            Step::AboutYou => Some(Step::Goal),
            Step::Activity => Some(Step::AboutYou),
            Step::Disclaimer => Some(Step::Activity),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Goal,
    Gender,
    Age,
    Height,
    Weight,
    ActivityLevel,
    WorkoutTime,
    Disclaimer,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Goal => "Цель",
            Field::Gender => "Пол",
            Field::Age => "Возраст",
            Field::Height => "Рост (см)",
            Field::Weight => "Вес (кг)",
            Field::ActivityLevel => "Текущий уровень активности",
            Field::WorkoutTime => "Сколько времени у вас есть?",
            Field::Disclaimer => "Согласие",
        }
    }

    /// Greyed-out hint shown in an empty numeric input.
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Age => "25",
            Field::Height => "170",
            Field::Weight => "70",
            _ => "",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Field::Age | Field::Height | Field::Weight)
    }
}

/// Result of asking the wizard to move forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    Advanced(Step),
    /// Required answers are missing (or the wizard already finished).
    Blocked,
    Completed(UserProfile),
}

#[derive(Debug, Clone)]
pub struct Wizard {
    step: Step,
    draft: ProfileDraft,
    focus: usize,
    completed: bool,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: Step::Goal,
            draft: ProfileDraft::default(),
            focus: 0,
            completed: false,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ProfileDraft {
        &mut self.draft
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Fraction of the wizard reached, `step / 4`.
    pub fn progress(&self) -> f64 {
        self.step.number() as f64 / STEP_COUNT as f64
    }

    pub fn next_label(&self) -> &'static str {
        if self.step == Step::Disclaimer {
            "Начать тренировки"
        } else {
            "Продолжить"
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.completed && self.step.preceding().is_some()
    }

    /// Whether every answer required by the current step is filled.
    pub fn can_proceed(&self) -> bool {
        let d = &self.draft;
        match self.step {
            Step::Goal => d.goal.is_some(),
            Step::AboutYou => {
                d.gender.is_some()
                    && !d.age.is_empty()
                    && !d.height.is_empty()
                    && !d.weight.is_empty()
            }
            Step::Activity => d.activity_level.is_some() && d.workout_time.is_some(),
            Step::Disclaimer => d.agreed_to_disclaimer,
        }
    }

    pub fn next(&mut self) -> WizardOutcome {
        if self.completed || !self.can_proceed() {
            return WizardOutcome::Blocked;
        }

        match self.step.following() {
            Some(step) => {
                self.step = step;
                self.focus = 0;
                WizardOutcome::Advanced(step)
            }
            None => match self.draft.build() {
                Some(profile) => {
                    self.completed = true;
                    WizardOutcome::Completed(profile)
                }
                None => WizardOutcome::Blocked,
            },
        }
    }

    pub fn back(&mut self) {
        if self.completed {
            return;
        }
        if let Some(step) = self.step.preceding() {
            self.step = step;
            self.focus = 0;
        }
    }

    // -- Field editing --

    pub fn focused_field(&self) -> Field {
        let fields = self.step.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        let count = self.step.fields().len();
        self.focus = (self.focus + 1) % count;
    }

    pub fn focus_prev(&mut self) {
        let count = self.step.fields().len();
        if self.focus > 0 {
            self.focus -= 1;
        } else {
            self.focus = count - 1;
        }
    }

    /// Select the next (or previous) option of the focused choice field.
    /// Does nothing on numeric fields.
    pub fn cycle_option(&mut self, forward: bool) {
        let field = self.focused_field();
        let d = &mut self.draft;
        match field {
            Field::Goal => d.goal = cycle(&Goal::ALL, d.goal, forward),
            Field::Gender => d.gender = cycle(&Gender::ALL, d.gender, forward),
            Field::ActivityLevel => {
                d.activity_level = cycle(&ActivityLevel::ALL, d.activity_level, forward);
            }
            Field::WorkoutTime => {
                d.workout_time = cycle(&WorkoutTime::ALL, d.workout_time, forward);
            }
            Field::Disclaimer => d.agreed_to_disclaimer = !d.agreed_to_disclaimer,
            Field::Age | Field::Height | Field::Weight => {}
        }
    }

    /// Space bar: toggles the consent checkbox, advances choice fields.
    pub fn toggle(&mut self) {
        self.cycle_option(true);
    }

    /// Type a character into the focused numeric field. Only digits and `-`
    /// are taken; returns whether the character was consumed.
    pub fn push_char(&mut self, c: char) -> bool {
        if !(c.is_ascii_digit() || c == '-') {
            return false;
        }
        match self.numeric_input_mut() {
            Some(input) => {
                input.push(c);
                true
            }
            None => false,
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(input) = self.numeric_input_mut() {
            input.pop();
        }
    }

    fn numeric_input_mut(&mut self) -> Option<&mut String> {
        match self.focused_field() {
            Field::Age => Some(&mut self.draft.age),
            Field::Height => Some(&mut self.draft.height),
            Field::Weight => Some(&mut self.draft.weight),
            _ => None,
        }
    }
}

fn cycle<T: Copy + PartialEq>(options: &[T], current: Option<T>, forward: bool) -> Option<T> {
    if options.is_empty() {
        return current;
    }
    let last = options.len() - 1;
    let index = match current.and_then(|c| options.iter().position(|o| *o == c)) {
        None if forward => 0,
        None => last,
        Some(i) if forward => (i + 1) % options.len(),
        Some(0) => last,
        Some(i) => i - 1,
    };
    Some(options[index])
}
