//! Localization of provider condition text.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Raw provider condition → Russian display text.
pub const TRANSLATIONS: &[(&str, &str)] = &[
    ("Clear", "Ясно"),
    ("Sunny", "Солнечно"),
    ("Partly cloudy", "Переменная облачность"),
    ("Cloudy", "Облачно"),
    ("Overcast", "Пасмурно"),
    ("Rain", "Дождь"),
    ("Rain, Partially cloudy", "Дождь, Переменная облачность"),
    ("Rain, Overcast", "Дождь, Пасмурно"),
    ("Snow", "Снег"),
    ("Thunderstorm", "Гроза"),
    ("Fog", "Туман"),
    ("Mist", "Дымка"),
    ("Partly Cloudy", "Переменная облачность"),
    ("Mostly Cloudy", "В основном облачно"),
    ("Light rain", "Небольшой дождь"),
    ("Heavy rain", "Сильный дождь"),
    ("Light snow", "Небольшой снег"),
    ("Heavy snow", "Сильный снег"),
    ("Drizzle", "Морось"),
    ("Hail", "Град"),
    ("Sleet", "Мокрый снег"),
    ("Windy", "Ветрено"),
    ("Breezy", "Порывистый ветер"),
    ("Clear throughout the day.", "Ясно в течение дня"),
    ("Possible light rain until evening.", "Возможен небольшой дождь до вечера"),
    ("Light rain throughout the day.", "Небольшой дождь в течение дня"),
    ("Overcast throughout the day.", "Пасмурно в течение дня"),
    ("Foggy in the morning.", "Туманно утром"),
    ("Partly cloudy throughout the day.", "Переменная облачность в течение дня"),
    ("Mostly cloudy throughout the day.", "В основном облачно в течение дня"),
    ("Rain throughout the day.", "Дождь в течение дня"),
    ("Snow throughout the day.", "Снег в течение дня"),
];

static TRANSLATION_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| TRANSLATIONS.iter().copied().collect());

/// Translate a provider condition, or return it unchanged when no entry exists.
pub fn translate(condition: &str) -> &str {
    TRANSLATION_MAP.get(condition).copied().unwrap_or(condition)
}
