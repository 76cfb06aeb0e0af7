//! Deterministic fare generator.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

use crate::domain::{FareRecord, FareTime, Mode, Place};
use crate::fares::FareTables;

use super::config::SeedConfig;

/// Cities served by the sample dataset.
pub const CITIES: [&str; 20] = [
    "Chennai",
    "Coimbatore",
    "Madurai",
    "Tiruchirappalli",
    "Salem",
    "Tirunelveli",
    "Thoothukudi",
    "Erode",
    "Vellore",
    "Dindigul",
    "Thanjavur",
    "Ranipet",
    "Sivakasi",
    "Karur",
    "Udhagamandalam",
    "Hosur",
    "Nagercoil",
    "Kanchipuram",
    "Kumbakonam",
    "Tirupur",
];

const BUS_CATEGORIES: [&str; 11] = [
    "Luxury AC Sleeper",
    "Semi Sleeper AC",
    "Non AC Seater",
    "Ultra Deluxe",
    "AC Seater",
    "Deluxe",
    "Super Deluxe",
    "Volvo AC",
    "Premium AC",
    "Economy",
    "Express Non-AC",
];

const TRAIN_CATEGORIES: [&str; 11] = [
    "First Class AC",
    "Second Class AC",
    "Sleeper Class",
    "AC Chair Car",
    "Executive Class",
    "First Class",
    "General",
    "Vistadome AC",
    "Third AC",
    "Premium AC",
    "Economy AC",
];

/// Departure times offered per bus category and route.
const TIMINGS_PER_CATEGORY: usize = 3;

/// Train departures fall on the quarter hour.
const TRAIN_MINUTES: [u32; 4] = [0, 15, 30, 45];

/// Give up after this many sweeps over every city pair.
const MAX_SWEEPS: usize = 1000;

/// Generate bus and train fares.
///
/// City pairs are visited in a fixed cycle and every category is priced for
/// each pair, with a few departure times per category. Exact duplicates are
/// skipped. Output depends only on the config.
pub fn generate(config: &SeedConfig) -> FareTables {
    let pairs = city_pairs();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let bus_timings = half_hourly(6, 23);

    let bus = generate_mode(
        Mode::Bus,
        &pairs,
        &BUS_CATEGORIES,
        config.rows_per_mode,
        &mut rng,
        bus_cost,
        |rng| {
            bus_timings
                .choose_multiple(rng, TIMINGS_PER_CATEGORY)
                .copied()
                .collect()
        },
    );
    let train = generate_mode(
        Mode::Train,
        &pairs,
        &TRAIN_CATEGORIES,
        config.rows_per_mode,
        &mut rng,
        train_cost,
        |rng| {
            (0..TIMINGS_PER_CATEGORY)
                .filter_map(|_| {
                    let hour = rng.gen_range(5..=23);
                    let minute = *TRAIN_MINUTES.choose(rng)?;
                    FareTime::from_hm(hour, minute).ok()
                })
                .collect()
        },
    );

    let tables = FareTables::from_records(bus.into_iter().chain(train));
    let counts = tables.counts();
    debug!(
        seed = config.seed,
        bus = counts.bus,
        train = counts.train,
        "generated fares"
    );
    tables
}

fn generate_mode(
    mode: Mode,
    pairs: &[(Place, Place)],
    categories: &[&'static str],
    count: usize,
    rng: &mut StdRng,
    price: fn(&mut StdRng, &str, Decimal) -> Decimal,
    mut timings: impl FnMut(&mut StdRng) -> Vec<FareTime>,
) -> Vec<FareRecord> {
    let mut records = Vec::with_capacity(count);
    if pairs.is_empty() {
        return records;
    }

    let mut seen = HashSet::new();
    for (visit, (origin, destination)) in pairs.iter().cycle().enumerate() {
        if records.len() >= count {
            break;
        }
        if visit >= pairs.len() * MAX_SWEEPS {
            warn!(%mode, generated = records.len(), requested = count, "fare generator exhausted");
            break;
        }

        let factor = distance_factor(origin, destination);
        'categories: for &category in categories {
            let cost = price(rng, category, factor);
            for timing in timings(rng) {
                if !seen.insert((visit % pairs.len(), category, cost, timing)) {
                    continue;
                }
                match FareRecord::new(
                    mode,
                    origin.clone(),
                    destination.clone(),
                    category,
                    cost,
                    timing,
                ) {
                    Ok(record) => records.push(record),
                    Err(e) => warn!(error = %e, %mode, category, "skipping generated fare"),
                }
                if records.len() >= count {
                    break 'categories;
                }
            }
        }
    }
    records
}

fn bus_cost(rng: &mut StdRng, category: &str, factor: Decimal) -> Decimal {
    if category.contains("Luxury") || category.contains("AC") {
        priced(250, factor, rng.gen_range(10..=100), 180, 350)
    } else {
        priced(150, factor, rng.gen_range(10..=50), 80, 250)
    }
}

fn train_cost(rng: &mut StdRng, category: &str, factor: Decimal) -> Decimal {
    if category.contains("First Class") || category.contains("Executive") {
        priced(350, factor, rng.gen_range(20..=150), 300, 500)
    } else if category.contains("AC") {
        priced(250, factor, rng.gen_range(20..=100), 200, 400)
    } else {
        priced(180, factor, rng.gen_range(20..=80), 120, 300)
    }
}

/// `clamp(round(base * factor + jitter), floor, ceiling)`, halves to even.
fn priced(base: i64, factor: Decimal, jitter: i64, floor: i64, ceiling: i64) -> Decimal {
    let raw = Decimal::from(base) * factor + Decimal::from(jitter);
    raw.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .clamp(Decimal::from(floor), Decimal::from(ceiling))
}

/// A per-route multiplier in [0.80, 1.19], stable across runs.
fn distance_factor(origin: &Place, destination: &Place) -> Decimal {
    let key = format!("{origin}{destination}");
    let h = fnv1a(key.as_bytes());
    // h % 40 < 40, so the cast is lossless
    Decimal::new(80 + (h % 40) as i64, 2)
}

/// 64-bit FNV-1a.
fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0xcbf2_9ce4_8422_2325, |hash, b| {
        (hash ^ u64::from(*b)).wrapping_mul(0x0100_0000_01b3)
    })
}

/// Every ordered pair of distinct cities.
fn city_pairs() -> Vec<(Place, Place)> {
    let places: Vec<Place> = CITIES
        .iter()
        .filter_map(|c| Place::parse(c).ok())
        .collect();

    let mut pairs = Vec::with_capacity(places.len() * places.len().saturating_sub(1));
    for origin in &places {
        for destination in &places {
            if origin != destination {
                pairs.push((origin.clone(), destination.clone()));
            }
        }
    }
    pairs
}

/// Times on the hour and half hour from `first_hour`:00 to `last_hour`:30.
fn half_hourly(first_hour: u32, last_hour: u32) -> Vec<FareTime> {
    (first_hour..=last_hour)
        .flat_map(|h| [(h, 0), (h, 30)])
        .filter_map(|(h, m)| FareTime::from_hm(h, m).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(seed: u64) -> SeedConfig {
        SeedConfig::new(seed).with_rows_per_mode(300)
    }

    #[test]
    fn same_seed_same_fares() {
        let a = generate(&small(7));
        let b = generate(&small(7));
        for mode in Mode::ALL {
            assert_eq!(a.table(mode).rows(), b.table(mode).rows());
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate(&small(1));
        let b = generate(&small(2));
        assert_ne!(a.table(Mode::Bus).rows(), b.table(Mode::Bus).rows());
    }

    #[test]
    fn produces_requested_counts() {
        let tables = generate(&small(42));
        assert_eq!(tables.counts().bus, 300);
        assert_eq!(tables.counts().train, 300);

        let none = generate(&SeedConfig::new(42).with_rows_per_mode(0));
        assert!(!none.counts().is_populated());
    }

    #[test]
    fn no_duplicate_rows() {
        let tables = generate(&small(42));
        for mode in Mode::ALL {
            let rows = tables.table(mode).rows();
            let unique: HashSet<_> = rows
                .iter()
                .map(|r| {
                    (
                        r.origin().clone(),
                        r.destination().clone(),
                        r.category().to_string(),
                        r.cost(),
                        r.timing(),
                    )
                })
                .collect();
            assert_eq!(unique.len(), rows.len(), "{mode} has duplicates");
        }
    }

    #[test]
    fn bus_costs_and_times_in_range() {
        let tables = generate(&small(42));
        for fare in tables.table(Mode::Bus).rows() {
            assert_eq!(fare.mode(), Mode::Bus);
            assert_ne!(fare.origin(), fare.destination());
            assert_eq!(fare.cost().fract(), Decimal::ZERO);
            assert!(fare.cost() >= Decimal::from(80) && fare.cost() <= Decimal::from(350));
            if fare.category().contains("AC") || fare.category().contains("Luxury") {
                assert!(fare.cost() >= Decimal::from(180));
            } else {
                assert!(fare.cost() <= Decimal::from(250));
            }
            let t = fare.timing();
            assert!((6..=23).contains(&t.hour()));
            assert!(t.minute() == 0 || t.minute() == 30);
        }
    }

    #[test]
    fn train_costs_and_times_in_range() {
        let tables = generate(&small(42));
        for fare in tables.table(Mode::Train).rows() {
            let cost = fare.cost();
            if fare.category().contains("First Class") || fare.category().contains("Executive") {
                assert!(cost >= Decimal::from(300) && cost <= Decimal::from(500));
            } else if fare.category().contains("AC") {
                assert!(cost >= Decimal::from(200) && cost <= Decimal::from(400));
            } else {
                assert!(cost >= Decimal::from(120) && cost <= Decimal::from(300));
            }
            let t = fare.timing();
            assert!((5..=23).contains(&t.hour()));
            assert!(TRAIN_MINUTES.contains(&t.minute()));
        }
    }

    #[test]
    fn first_route_gets_every_category() {
        let tables = generate(&small(42));
        let first = &tables.table(Mode::Bus).rows()[0];
        let categories: HashSet<_> = tables
            .table(Mode::Bus)
            .route(first.origin(), first.destination())
            .iter()
            .map(|r| r.category().to_string())
            .collect();
        assert_eq!(categories.len(), BUS_CATEGORIES.len());
    }

    #[test]
    fn distance_factor_is_stable_and_bounded() {
        let chennai = Place::parse("Chennai").unwrap();
        let madurai = Place::parse("Madurai").unwrap();
        let f = distance_factor(&chennai, &madurai);
        assert_eq!(f, distance_factor(&chennai, &madurai));
        assert!(f >= Decimal::new(80, 2) && f <= Decimal::new(119, 2));
    }

    #[test]
    fn pairs_and_slots() {
        assert_eq!(city_pairs().len(), 20 * 19);
        let slots = half_hourly(6, 23);
        assert_eq!(slots.len(), 36);
        assert_eq!(slots[0].to_string(), "06:00");
        assert_eq!(slots[35].to_string(), "23:30");
    }

    #[test]
    fn pricing_rounds_and_clamps() {
        // 250 * 0.81 + 10 = 212.5, halves go to even
        assert_eq!(priced(250, Decimal::new(81, 2), 10, 180, 350), Decimal::from(212));
        assert_eq!(priced(250, Decimal::new(119, 2), 100, 180, 350), Decimal::from(350));
        assert_eq!(priced(150, Decimal::new(80, 2), 10, 130, 250), Decimal::from(130));
    }
}
