//! Decorative per-city CSS backgrounds.

/// Used when no key can be derived from the city.
pub const FALLBACK_BACKGROUND: &str = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)";

const TEMPLATE_COUNT: u64 = 5;

/// Build a CSS background for a city.
///
/// The same `(name, country)` pair always yields the same string, across
/// processes as well, because the hash is FNV-1a rather than the randomized
/// std hasher.
pub fn city_background(name: &str, country: &str) -> String {
    let Some(key) = background_key(name, country) else {
        log::warn!("cannot derive background for empty city, using fallback");
        return FALLBACK_BACKGROUND.to_string();
    };

    let hash = fnv1a(&key);
    let h1 = hash % 360;
    let h2 = (h1 + 120) % 360;
    let h3 = (h1 + 240) % 360;

    match hash % TEMPLATE_COUNT {
        0 => format!(
            "linear-gradient(135deg, hsl({h1}, 70%, 50%) 0%, hsl({h2}, 70%, 60%) 100%)"
        ),
        1 => format!(
            "linear-gradient(135deg, hsl({h2}, 70%, 40%) 0%, hsl({h3}, 70%, 50%) 100%)"
        ),
        2 => format!(
            "linear-gradient(135deg, hsl({h3}, 70%, 30%) 0%, hsl({h1}, 70%, 40%) 100%)"
        ),
        3 => format!("radial-gradient(circle at 30% 20%, hsl({h1}, 80%, 60%), hsl({h2}, 80%, 40%))"),
        _ => format!(
            "conic-gradient(from 90deg, hsl({h1}, 70%, 50%), hsl({h2}, 70%, 50%), hsl({h3}, 70%, 50%))"
        ),
    }
}

fn background_key(name: &str, country: &str) -> Option<String> {
    if name.trim().is_empty() && country.trim().is_empty() {
        return None;
    }
    Some(format!("{name}_{country}").to_lowercase().replace(' ', "_"))
}

fn fnv1a(key: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0100_0000_01b3;

    key.bytes()
        .fold(OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME))
}
