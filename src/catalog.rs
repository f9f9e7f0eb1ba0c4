//! Static theme catalog. Read-only; order is the order the theme screen shows.

use crate::model::{Picture, Theme};

static ANIMALS: [Picture; 4] = [
    Picture { id: "dog", glyph: "🐕", name: "いぬ" },
    Picture { id: "cat", glyph: "🐈", name: "ねこ" },
    Picture { id: "rabbit", glyph: "🐰", name: "うさぎ" },
    Picture { id: "elephant", glyph: "🐘", name: "ぞう" },
];

static VEHICLES: [Picture; 4] = [
    Picture { id: "car", glyph: "🚗", name: "くるま" },
    Picture { id: "bus", glyph: "🚌", name: "バス" },
    Picture { id: "train", glyph: "🚂", name: "でんしゃ" },
    Picture { id: "airplane", glyph: "✈️", name: "ひこうき" },
];

static FRUITS: [Picture; 4] = [
    Picture { id: "apple", glyph: "🍎", name: "りんご" },
    Picture { id: "banana", glyph: "🍌", name: "バナナ" },
    Picture { id: "grape", glyph: "🍇", name: "ぶどう" },
    Picture { id: "orange", glyph: "🍊", name: "みかん" },
];

static SEA: [Picture; 4] = [
    Picture { id: "fish", glyph: "🐟", name: "さかな" },
    Picture { id: "octopus", glyph: "🐙", name: "たこ" },
    Picture { id: "whale", glyph: "🐋", name: "くじら" },
    Picture { id: "dolphin", glyph: "🐬", name: "いるか" },
];

static THEMES: [Theme; 4] = [
    Theme { id: "animals", name: "どうぶつ", icon: "🐾", pictures: &ANIMALS },
    Theme { id: "vehicles", name: "のりもの", icon: "🚙", pictures: &VEHICLES },
    Theme { id: "fruits", name: "くだもの", icon: "🍓", pictures: &FRUITS },
    Theme { id: "sea", name: "うみのいきもの", icon: "🌊", pictures: &SEA },
];

pub fn list_themes() -> &'static [Theme] {
    &THEMES
}

pub fn theme(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.id == id)
}
