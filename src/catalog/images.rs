//! Cover picture for a workout or exercise, picked from keywords in its name.

use unicode_normalization::UnicodeNormalization;

macro_rules! photo {
    ($id:literal) => {
        concat!("https://images.unsplash.com/", $id, "?w=600&h=400&fit=crop&q=80")
    };
}

const CHEST: &str = photo!("photo-1571019614242-c5c5dee9f50b");
const BENCH: &str = photo!("photo-1571019613454-1cb2f99b2d8b");
const PUSH_UP: &str = photo!("photo-1599058917212-d750089bc07e");
const BACK: &str = photo!("photo-1532029837206-abbe2b7620e3");
const ROW: &str = photo!("photo-1605296867304-46d5465a13f1");
const GYM: &str = photo!("photo-1534438327276-14e5300c3a48");
const PULL_UP: &str = photo!("photo-1571902943202-507ec2618e8f");
const LEGS: &str = photo!("photo-1434608519344-49d77a699e1d");
const SQUAT: &str = photo!("photo-1574680096145-d05b474e2155");
const SHOULDERS: &str = photo!("photo-1583454110551-21f2fa2afe61");
const PRESS: &str = photo!("photo-1583454155184-870a77f49f75");
const ARMS: &str = photo!("photo-1581009146145-b5ef050c2e1e");
const CARDIO: &str = photo!("photo-1552674605-db6ffd4facb5");
const BIKE: &str = photo!("photo-1541625602330-2277a4c46182");
const STRETCH: &str = photo!("photo-1544367567-0f2fcb009e0b");
const FUNCTIONAL: &str = photo!("photo-1517838277536-f5f99be501cd");

/// Fallback when no keyword matches.
pub const DEFAULT_IMAGE: &str = GYM;

/// Keywords are matched in this order; earlier entries win.
pub const EXERCISE_IMAGES: &[(&str, &str)] = &[
    // chest
    ("peito", CHEST),
    ("supino", BENCH),
    ("flexao", PUSH_UP),
    // back
    ("costas", BACK),
    ("remada", ROW),
    ("pullover", GYM),
    ("barra", PULL_UP),
    // legs
    ("pernas", LEGS),
    ("perna", LEGS),
    ("agachamento", SQUAT),
    ("leg", LEGS),
    ("coxa", LEGS),
    ("panturrilha", BENCH),
    // shoulders
    ("ombros", SHOULDERS),
    ("ombro", SHOULDERS),
    ("desenvolvimento", PRESS),
    ("elevacao", PRESS),
    // arms
    ("bracos", ARMS),
    ("braco", ARMS),
    ("biceps", ARMS),
    ("triceps", ARMS),
    ("rosca", ARMS),
    // abs
    ("abdomen", BENCH),
    ("abdominal", BENCH),
    ("prancha", BENCH),
    // cardio
    ("cardio", CARDIO),
    ("corrida", CARDIO),
    ("esteira", CARDIO),
    ("bicicleta", BIKE),
    ("eliptico", BIKE),
    // mobility
    ("alongamento", STRETCH),
    ("yoga", STRETCH),
    ("mobilidade", STRETCH),
    // functional
    ("funcional", FUNCTIONAL),
    ("crossfit", FUNCTIONAL),
];

/// Lowercase with combining marks removed, so "Elevação" matches "elevacao"
/// whether it arrives precomposed or decomposed.
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .collect()
}

const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Exact keyword first, then a keyword inside the name, then the name
/// inside a keyword longer than three characters.
pub fn image_for(name: &str) -> &'static str {
    if name.is_empty() {
        return DEFAULT_IMAGE;
    }
    let normalized = normalize(name);

    EXERCISE_IMAGES
        .iter()
        .find(|(key, _)| normalized == *key)
        .or_else(|| EXERCISE_IMAGES.iter().find(|(key, _)| normalized.contains(key)))
        .or_else(|| {
            EXERCISE_IMAGES
                .iter()
                .find(|(key, _)| key.chars().count() > 3 && key.contains(normalized.as_str()))
        })
        .map(|(_, url)| *url)
        .unwrap_or(DEFAULT_IMAGE)
}

/// Every distinct URL the catalog can return, default included.
pub fn all_images() -> Vec<&'static str> {
    let mut urls: Vec<&'static str> = EXERCISE_IMAGES.iter().map(|(_, url)| *url).collect();
    urls.push(DEFAULT_IMAGE);
    urls.sort_unstable();
    urls.dedup();
    urls
}
