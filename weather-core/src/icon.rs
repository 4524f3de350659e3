//! Pictographic icons for condition text in either language.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Returned for empty, unknown, or unrecognized conditions.
pub const DEFAULT_ICON: &str = "⛅";

const SUN: &str = "☀️";
const PARTLY_CLOUDY: &str = "⛅";
const CLOUD: &str = "☁️";
const FOG: &str = "🌫️";
const RAIN: &str = "🌧️";
const LIGHT_RAIN: &str = "🌦️";
const STORM: &str = "⛈️";
const SNOW: &str = "❄️";
const LIGHT_SNOW: &str = "🌨️";
const HEAVY_SNOW: &str = "❄️❄️";
const ICE: &str = "🧊";
const SLEET: &str = "🌨️💧";
const WIND: &str = "💨";

/// Localized (Russian) condition text → icon. Checked first.
pub const LOCALIZED_ICONS: &[(&str, &str)] = &[
    ("Ясно", SUN),
    ("Солнечно", SUN),
    ("Ясно в течение дня", SUN),
    ("Переменная облачность", PARTLY_CLOUDY),
    ("Облачно", CLOUD),
    ("Пасмурно", CLOUD),
    ("В основном облачно", CLOUD),
    ("Переменная облачность в течение дня", PARTLY_CLOUDY),
    ("В основном облачно в течение дня", CLOUD),
    ("Пасмурно в течение дня", CLOUD),
    ("Частично облачно", PARTLY_CLOUDY),
    ("Туман", FOG),
    ("Дымка", FOG),
    ("Туманно утром", FOG),
    ("Дождь", RAIN),
    ("Небольшой дождь", LIGHT_RAIN),
    ("Сильный дождь", STORM),
    ("Дождь, Переменная облачность", LIGHT_RAIN),
    ("Дождь, Пасмурно", RAIN),
    ("Морось", LIGHT_RAIN),
    ("Возможен небольшой дождь до вечера", LIGHT_RAIN),
    ("Небольшой дождь в течение дня", LIGHT_RAIN),
    ("Дождь в течение дня", RAIN),
    ("Снег", SNOW),
    ("Небольшой снег", LIGHT_SNOW),
    ("Сильный снег", HEAVY_SNOW),
    ("Снег в течение дня", SNOW),
    ("Гроза", STORM),
    ("Град", ICE),
    ("Мокрый снег", SLEET),
    ("Ветрено", WIND),
    ("Порывистый ветер", WIND),
];

/// Raw (English) provider condition text → icon.
pub const RAW_ICONS: &[(&str, &str)] = &[
    ("Clear", SUN),
    ("Sunny", SUN),
    ("Partly cloudy", PARTLY_CLOUDY),
    ("Cloudy", CLOUD),
    ("Overcast", CLOUD),
    ("Mostly Cloudy", CLOUD),
    ("Partly Cloudy", PARTLY_CLOUDY),
    ("Mist", FOG),
    ("Fog", FOG),
    ("Light fog", FOG),
    ("Rain", RAIN),
    ("Light rain", LIGHT_RAIN),
    ("Heavy rain", STORM),
    ("Moderate rain", RAIN),
    ("Drizzle", LIGHT_RAIN),
    ("Snow", SNOW),
    ("Light snow", LIGHT_SNOW),
    ("Heavy snow", HEAVY_SNOW),
    ("Thunderstorm", STORM),
    ("Storm", STORM),
    ("Hail", ICE),
    ("Sleet", SLEET),
    ("Windy", WIND),
    ("Breezy", WIND),
    ("Clear throughout the day.", SUN),
    ("Possible light rain until evening.", LIGHT_RAIN),
    ("Light rain throughout the day.", LIGHT_RAIN),
    ("Overcast throughout the day.", CLOUD),
    ("Foggy in the morning.", FOG),
    ("Partly cloudy throughout the day.", PARTLY_CLOUDY),
    ("Mostly cloudy throughout the day.", CLOUD),
    ("Rain throughout the day.", RAIN),
    ("Snow throughout the day.", SNOW),
];

static LOCALIZED_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| LOCALIZED_ICONS.iter().copied().collect());

static RAW_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| RAW_ICONS.iter().copied().collect());

/// Keywords for one group of the cascade.
///
/// Russian `stems` match anywhere in the lower-cased text, so inflected forms
/// are found. English `words` must equal a whole word, so "light" does not
/// match "lightning".
struct Keywords {
    stems: &'static [&'static str],
    words: &'static [&'static str],
}

const CLEAR: Keywords = Keywords {
    stems: &["ясн", "солн"],
    words: &["clear", "sun", "sunny"],
};
const PARTLY: Keywords = Keywords {
    stems: &["переменн", "частичн"],
    words: &["partly", "partially", "variable"],
};
const CLOUDY: Keywords = Keywords {
    stems: &["облачн", "пасмурн"],
    words: &["cloud", "clouds", "cloudy", "overcast"],
};
const FOGGY: Keywords = Keywords {
    stems: &["туман", "дымк"],
    words: &["fog", "foggy", "mist", "misty", "haze", "hazy"],
};
const RAINY: Keywords = Keywords {
    stems: &["дожд", "морос"],
    words: &["rain", "rainy", "drizzle", "shower", "showers"],
};
const SNOWY: Keywords = Keywords {
    stems: &["снег"],
    words: &["snow", "snowy", "snowfall"],
};
const LIGHT: Keywords = Keywords {
    stems: &["небольш", "легк"],
    words: &["light"],
};
const HEAVY: Keywords = Keywords {
    stems: &["сильн", "ливень"],
    words: &["heavy"],
};
const THUNDER: Keywords = Keywords {
    stems: &["гроз", "гром"],
    words: &["thunder", "thunderstorm", "thunderstorms", "storm", "storms", "lightning"],
};
const ICY: Keywords = Keywords {
    stems: &["град", "лед"],
    words: &["hail", "ice", "icy"],
};
// "ветер" is listed separately: the nominative form does not contain "ветр".
const WINDY: Keywords = Keywords {
    stems: &["ветр", "ветер"],
    words: &["wind", "windy", "breeze", "breezy"],
};

/// Pick an icon for a condition string, localized or raw.
///
/// Exact table matches win over the keyword cascade. Within the cascade the
/// first matching group is used, so "Snow, Partially cloudy" resolves to the
/// partly-cloudy icon.
pub fn resolve_icon(condition: &str) -> &'static str {
    if condition.is_empty() || condition == "Unknown" {
        return DEFAULT_ICON;
    }

    if let Some(&icon) = LOCALIZED_MAP.get(condition) {
        log::debug!("icon for {condition:?} found in localized table: {icon}");
        return icon;
    }

    if let Some(&icon) = RAW_MAP.get(condition) {
        log::debug!("icon for {condition:?} found in raw table: {icon}");
        return icon;
    }

    let icon = match_keywords(&condition.to_lowercase());
    match icon {
        Some(icon) => {
            log::debug!("icon for {condition:?} matched by keywords: {icon}");
            icon
        }
        None => {
            log::debug!("no icon matched {condition:?}, using default");
            DEFAULT_ICON
        }
    }
}

fn match_keywords(text: &str) -> Option<&'static str> {
    let words: Vec<&str> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    let has = |group: &Keywords| {
        group.stems.iter().any(|stem| text.contains(stem))
            || words.iter().any(|word| group.words.contains(word))
    };

    if has(&CLEAR) {
        Some(SUN)
    } else if has(&PARTLY) {
        Some(PARTLY_CLOUDY)
    } else if has(&CLOUDY) {
        Some(CLOUD)
    } else if has(&FOGGY) {
        Some(FOG)
    } else if has(&RAINY) {
        if has(&LIGHT) {
            Some(LIGHT_RAIN)
        } else if has(&HEAVY) {
            Some(STORM)
        } else {
            Some(RAIN)
        }
    } else if has(&SNOWY) {
        if has(&LIGHT) {
            Some(LIGHT_SNOW)
        } else {
            Some(SNOW)
        }
    } else if has(&THUNDER) {
        Some(STORM)
    } else if has(&ICY) {
        Some(ICE)
    } else if has(&WINDY) {
        Some(WIND)
    } else {
        None
    }
}
