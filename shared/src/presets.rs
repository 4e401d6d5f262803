#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub key: &'static str,
    pub name: &'static str,
    pub options: &'static [&'static str],
}

pub static PRESETS: [Preset; 5] = [
    Preset {
        key: "food",
        name: "Food",
        options: &["Pizza", "Tacos", "Sushi", "Burgers", "Ramen", "Salad"],
    },
    Preset {
        key: "movie",
        name: "Movie genre",
        options: &["Comedy", "Action", "Horror", "Romcom", "Documentary", "Anime"],
    },
    Preset {
        key: "workout",
        name: "Workout",
        options: &["Push", "Pull", "Legs", "Cardio", "Yoga", "Mobility"],
    },
    Preset {
        key: "study",
        name: "Study topic",
        options: &["Math", "Coding", "Reading", "Flashcards", "Practice test", "Notes cleanup"],
    },
    Preset {
        key: "chores",
        name: "Chores",
        options: &["Dishes", "Laundry", "Vacuum", "Wipe surfaces", "Trash", "Organize desk"],
    },
];

pub fn find_preset(key: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.key == key)
}
