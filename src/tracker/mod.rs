//! Habit and goal checklists.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerItem {
    pub id: u32,
    pub text: String,
    pub completed: bool,
}

impl TrackerItem {
    fn new(id: u32, text: &str, completed: bool) -> Self {
        Self {
            id,
            text: text.to_string(),
            completed,
        }
    }
}

/// An in-memory checklist with completion progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tracker {
    items: Vec<TrackerItem>,
}

impl Tracker {
    pub fn new(items: Vec<TrackerItem>) -> Self {
        Self { items }
    }

    /// Daily green habits, all open.
    pub fn habits() -> Self {
        Self::new(vec![
            TrackerItem::new(1, "Use a reusable water bottle", false),
            TrackerItem::new(2, "Sort recycling correctly", false),
            TrackerItem::new(3, "Turn off lights when leaving a room", false),
            TrackerItem::new(4, "Walk or bike for a short trip", false),
            TrackerItem::new(5, "Eat a plant-based meal", false),
        ])
    }

    /// Key performance goals; the first two are already done.
    pub fn goals() -> Self {
        Self::new(vec![
            TrackerItem::new(1, "Reduce office paper consumption by 10%", true),
            TrackerItem::new(2, "Complete energy audit of main campus building", true),
            TrackerItem::new(3, "Launch employee sustainability training program", false),
            TrackerItem::new(4, "Switch to 100% renewable energy supplier", false),
            TrackerItem::new(5, "Establish a baseline for supply chain emissions", false),
        ])
    }

    pub fn items(&self) -> &[TrackerItem] {
        &self.items
    }

    /// Flips the item with `id`. Unknown ids change nothing and return `false`.
    pub fn toggle(&mut self, id: u32) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|i| i.completed).count()
    }

    /// Completed fraction in `[0, 1]`; an empty list has no progress.
    pub fn progress(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.items.len() as f64
    }

    pub fn progress_percentage(&self) -> f64 {
        self.progress() * 100.0
    }
}
