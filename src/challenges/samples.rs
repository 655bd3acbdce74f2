use super::model::{Challenge, Difficulty};

fn challenge(title: &str, description: &str, difficulty: Difficulty) -> Challenge {
    Challenge {
        title: title.to_string(),
        description: description.to_string(),
        difficulty,
    }
}

pub(crate) fn sample_challenges() -> Vec<Challenge> {
    vec![
        challenge(
            "Zero Single-Use Week",
            "Go seven days without single-use cups, bottles or bags. Carry a reusable kit and note every time you would have reached for a disposable.",
            Difficulty::Easy,
        ),
        challenge(
            "Meatless Weekdays",
            "Eat only plant-based meals Monday to Friday. Food is one of the largest parts of a personal footprint, and a week builds lasting habits.",
            Difficulty::Medium,
        ),
        challenge(
            "Car-Free Commute",
            "Walk, cycle or take public transport for every trip this week. Track the distance covered to see the emissions you avoided.",
            Difficulty::Hard,
        ),
    ]
}
