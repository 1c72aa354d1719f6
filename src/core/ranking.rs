use std::cmp::Ordering;

use crate::core::distance::haversine_distance;
use crate::models::{Location, Office, RankedOffice};

/// Map a character to its base letter for primary-strength comparison
#[inline]
fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        other => other,
    }
}

/// Lowercased, accent-folded form of a name
pub fn collation_key(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(fold_diacritic)
        .collect()
}

/// Locale-aware name comparison
///
/// Letters compare first ignoring case and accents ("Potosí" sorts with "Potosi"),
/// then accents, then case, then raw code points.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Ids compare numerically when both are numbers, so "2" < "10"
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        _ => a.cmp(b),
    }
}

/// Ascending distance; missing or NaN distances go last
#[inline]
fn compare_distances(a: Option<f64>, b: Option<f64>) -> Ordering {
    let a = a.filter(|d| !d.is_nan());
    let b = b.filter(|d| !d.is_nan());
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_by_name(a: &RankedOffice, b: &RankedOffice) -> Ordering {
    compare_names(&a.office.name, &b.office.name).then_with(|| compare_ids(&a.office.id, &b.office.id))
}

/// Attach distances and order the offices
///
/// With a location the order is by ascending distance, equal distances keeping
/// their input order. Without one every distance is `None` and the order is by
/// name, then id. Ids that both parse as integers compare numerically ("2" before
/// "10"); any other pair compares as plain strings.
pub fn rank_offices(offices: Vec<Office>, location: Option<&Location>) -> Vec<RankedOffice> {
    let mut ranked: Vec<RankedOffice> = offices
        .into_iter()
        .map(|office| {
            let distance_km = location.map(|loc| {
                haversine_distance(loc.latitude, loc.longitude, office.latitude, office.longitude)
            });
            RankedOffice::new(office, distance_km)
        })
        .collect();

    // sort_by is stable
    if location.is_some() {
        ranked.sort_by(|a, b| compare_distances(a.distance_km, b.distance_km));
    } else {
        ranked.sort_by(compare_by_name);
    }

    ranked
}
