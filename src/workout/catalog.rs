//! Static workout catalog and its time-of-day filter.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Лёгкий",
            Difficulty::Medium => "Средний",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Day,
    Evening,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: &'static str,
    pub duration_minutes: u32,
    pub difficulty: Difficulty,
    pub exercise_count: u32,
    pub category: TimeOfDay,
    pub is_premium: bool,
    pub icon: &'static str,
}

impl CatalogEntry {
    pub fn action_label(&self) -> &'static str {
        if self.is_premium {
            "🔒 Разблокировать"
        } else {
            "▶ Начать"
        }
    }
}

/// Selected catalog tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(TimeOfDay),
}

impl CategoryFilter {
    /// Tabs in display order.
    pub const TABS: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(TimeOfDay::Morning),
        CategoryFilter::Only(TimeOfDay::Day),
        CategoryFilter::Only(TimeOfDay::Evening),
    ];

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "Все",
            CategoryFilter::Only(TimeOfDay::Morning) => "Утро",
            CategoryFilter::Only(TimeOfDay::Day) => "День",
            CategoryFilter::Only(TimeOfDay::Evening) => "Вечер",
        }
    }

    pub fn tab_index(self) -> usize {
        Self::TABS.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::TABS[(self.tab_index() + 1) % Self::TABS.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::TABS.len();
        Self::TABS[(self.tab_index() + len - 1) % len]
    }

    pub fn matches(self, entry: &CatalogEntry) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => entry.category == category,
        }
    }
}

/// Entries matching `filter`, in their original order.
pub fn filter_catalog(entries: &[CatalogEntry], filter: CategoryFilter) -> Vec<&CatalogEntry> {
    entries.iter().filter(|e| filter.matches(e)).collect()
}

pub fn catalog() -> &'static [CatalogEntry] {
    &CATALOG
}

static CATALOG: [CatalogEntry; 6] = [
    CatalogEntry {
        id: 1,
        name: "Утренняя разминка",
        duration_minutes: 5,
        difficulty: Difficulty::Easy,
        exercise_count: 5,
        category: TimeOfDay::Morning,
        is_premium: false,
        icon: "🌅",
    },
    CatalogEntry {
        id: 2,
        name: "Растяжка за 7 минут",
        duration_minutes: 7,
        difficulty: Difficulty::Easy,
        exercise_count: 6,
        category: TimeOfDay::Evening,
        is_premium: false,
        icon: "🌊",
    },
    CatalogEntry {
        id: 3,
        name: "Энергичная зарядка",
        duration_minutes: 10,
        difficulty: Difficulty::Medium,
        exercise_count: 8,
        category: TimeOfDay::Morning,
        is_premium: true,
        icon: "⚡",
    },
    CatalogEntry {
        id: 4,
        name: "Офисная гимнастика",
        duration_minutes: 5,
        difficulty: Difficulty::Easy,
        exercise_count: 4,
        category: TimeOfDay::Day,
        is_premium: false,
        icon: "☕",
    },
    CatalogEntry {
        id: 5,
        name: "Кардио за 15 минут",
        duration_minutes: 15,
        difficulty: Difficulty::Medium,
        exercise_count: 10,
        category: TimeOfDay::Day,
        is_premium: true,
        icon: "❤️",
    },
    CatalogEntry {
        id: 6,
        name: "Расслабление перед сном",
        duration_minutes: 10,
        difficulty: Difficulty::Easy,
        exercise_count: 7,
        category: TimeOfDay::Evening,
        is_premium: true,
        icon: "🌙",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(entries: &[&CatalogEntry]) -> Vec<u32> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_all_returns_everything_in_order() {
        let all = filter_catalog(catalog(), CategoryFilter::All);
        assert_eq!(ids(&all), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_morning_filter() {
        let morning = filter_catalog(catalog(), CategoryFilter::Only(TimeOfDay::Morning));
        assert_eq!(ids(&morning), vec![1, 3]);
    }

    #[test]
    fn test_day_and_evening_filters() {
        let day = filter_catalog(catalog(), CategoryFilter::Only(TimeOfDay::Day));
        assert_eq!(ids(&day), vec![4, 5]);
        let evening = filter_catalog(catalog(), CategoryFilter::Only(TimeOfDay::Evening));
        assert_eq!(ids(&evening), vec![2, 6]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        for tab in CategoryFilter::TABS {
            let once: Vec<CatalogEntry> = filter_catalog(catalog(), tab)
                .into_iter()
                .cloned()
                .collect();
            let twice = filter_catalog(&once, tab);
            assert_eq!(ids(&twice), once.iter().map(|e| e.id).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_tab_cycling_wraps() {
        assert_eq!(CategoryFilter::All.next(), CategoryFilter::Only(TimeOfDay::Morning));
        assert_eq!(CategoryFilter::All.prev(), CategoryFilter::Only(TimeOfDay::Evening));
        assert_eq!(
            CategoryFilter::Only(TimeOfDay::Evening).next(),
            CategoryFilter::All
        );
    }

    #[test]
    fn test_action_label_by_premium() {
        let entries = catalog();
        assert!(entries[0].action_label().contains("Начать"));
        assert!(entries[2].action_label().contains("Разблокировать"));
    }
}
