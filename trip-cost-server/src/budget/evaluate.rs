//! Per-person ceilings and party totals.

use rust_decimal::Decimal;

/// The per-person cost ceiling implied by a budget.
///
/// `None` when there is no positive budget or no travelers; otherwise
/// `budget / party_size`.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use trip_cost_server::budget::effective_max_per_person;
///
/// assert_eq!(
///     effective_max_per_person(Some(Decimal::from(400)), 2),
///     Some(Decimal::from(200))
/// );
/// assert_eq!(effective_max_per_person(Some(Decimal::from(400)), 0), None);
/// assert_eq!(effective_max_per_person(None, 2), None);
/// ```
pub fn effective_max_per_person(budget: Option<Decimal>, party_size: u32) -> Option<Decimal> {
    let budget = budget.filter(|b| *b > Decimal::ZERO)?;
    if party_size == 0 {
        return None;
    }
    budget.checked_div(Decimal::from(party_size))
}

/// Cost of a per-person fare for the whole party.
///
/// `None` only if the product overflows.
pub fn party_total(per_person: Decimal, party_size: u32) -> Option<Decimal> {
    per_person.checked_mul(Decimal::from(party_size))
}

/// Quick trip total from the cheapest per-person fare.
///
/// `None` if there is no fare or no travelers.
pub fn trip_total(cheapest_per_person: Option<Decimal>, party_size: u32) -> Option<Decimal> {
    if party_size == 0 {
        return None;
    }
    party_total(cheapest_per_person?, party_size)
}

/// The lower of two optional minimums.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use trip_cost_server::budget::overall_minimum;
///
/// let five = Some(Decimal::from(5));
/// let three = Some(Decimal::from(3));
/// assert_eq!(overall_minimum(five, None), five);
/// assert_eq!(overall_minimum(five, three), three);
/// assert_eq!(overall_minimum(None, None), None);
/// ```
pub fn overall_minimum(bus_min: Option<Decimal>, train_min: Option<Decimal>) -> Option<Decimal> {
    match (bus_min, train_min) {
        (Some(bus), Some(train)) => Some(bus.min(train)),
        (Some(only), None) | (None, Some(only)) => Some(only),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(n: i64) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn ceiling_divides_budget() {
        assert_eq!(effective_max_per_person(Some(d(400)), 2), Some(d(200)));
        assert_eq!(effective_max_per_person(Some(d(400)), 1), Some(d(400)));
        assert_eq!(
            effective_max_per_person(Some(d(100)), 3),
            Some(d(100) / d(3))
        );
    }

    #[test]
    fn ceiling_absent_without_budget_or_party() {
        assert_eq!(effective_max_per_person(None, 2), None);
        assert_eq!(effective_max_per_person(Some(Decimal::ZERO), 2), None);
        assert_eq!(effective_max_per_person(Some(d(-50)), 2), None);
        assert_eq!(effective_max_per_person(Some(d(400)), 0), None);
    }

    #[test]
    fn trip_total_scales_by_party() {
        assert_eq!(trip_total(Some(d(180)), 3), Some(d(540)));
        assert_eq!(trip_total(Some(Decimal::ZERO), 3), Some(Decimal::ZERO));
    }

    #[test]
    fn trip_total_absent_cases() {
        assert_eq!(trip_total(None, 3), None);
        assert_eq!(trip_total(Some(d(180)), 0), None);
    }

    #[test]
    fn party_total_overflow_is_none() {
        assert_eq!(party_total(Decimal::MAX, 2), None);
        assert_eq!(party_total(d(10), 0), Some(Decimal::ZERO));
    }

    #[test]
    fn overall_minimum_cases() {
        assert_eq!(overall_minimum(Some(d(5)), None), Some(d(5)));
        assert_eq!(overall_minimum(None, Some(d(7))), Some(d(7)));
        assert_eq!(overall_minimum(None, None), None);
        assert_eq!(overall_minimum(Some(d(5)), Some(d(3))), Some(d(3)));
        assert_eq!(overall_minimum(Some(d(3)), Some(d(3))), Some(d(3)));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn amount() -> impl Strategy<Value = Decimal> {
        (-1_000_000i64..1_000_000).prop_map(|cents| Decimal::new(cents, 2))
    }

    proptest! {
        /// The ceiling exists exactly when budget > 0 and party > 0
        #[test]
        fn ceiling_presence(budget in amount(), party in 0u32..50) {
            let ceiling = effective_max_per_person(Some(budget), party);
            prop_assert_eq!(ceiling.is_some(), budget > Decimal::ZERO && party > 0);
            if let Some(c) = ceiling {
                prop_assert_eq!(c, budget / Decimal::from(party));
            }
        }

        /// The overall minimum is never above either input
        #[test]
        fn overall_minimum_is_lower_bound(a in prop::option::of(amount()), b in prop::option::of(amount())) {
            let min = overall_minimum(a, b);
            prop_assert_eq!(min.is_some(), a.is_some() || b.is_some());
            if let Some(m) = min {
                prop_assert!(a.is_none_or(|x| m <= x));
                prop_assert!(b.is_none_or(|x| m <= x));
                prop_assert!(Some(m) == a || Some(m) == b);
            }
        }
    }
}
