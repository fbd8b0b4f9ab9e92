#![cfg(test)]
//! Property tests for the containment rules.
//!
//! Carriers and cargo are generated with arbitrary (valid) sizes and weights;
//! every property must hold under both fit policies.

use haulr_common::measure::{Dimensions, FitPolicy, Space};
use haulr_common::vehicle::{Capacity, Carrier, Kind, Parcel};
use haulr_core::{can_carry, fits};
use proptest::prelude::*;

const POLICIES: [FitPolicy; 2] = [FitPolicy::Inclusive, FitPolicy::Strict];

// -- Strategies --

fn weight() -> impl Strategy<Value = f64> {
    0.01f64..10_000.0
}

fn dimensions() -> impl Strategy<Value = Dimensions> {
    (0.01f64..100.0, 0.01f64..100.0, 0.01f64..100.0)
        .prop_map(|(l, w, h)| Dimensions::new(l, w, h).expect("positive axes"))
}

fn space() -> impl Strategy<Value = Space> {
    prop_oneof![
        dimensions().prop_map(Space::Box),
        (0.01f64..100_000.0).prop_map(|v| Space::volume(v).expect("positive volume")),
    ]
}

/// Every capacity variant that has a weight limit.
fn bounded_capacity() -> impl Strategy<Value = Capacity> {
    prop_oneof![
        (weight(), space()).prop_map(|(w, s)| Capacity::stowage(w, s).expect("valid stowage")),
        (weight(), space()).prop_map(|(w, s)| Capacity::hold(w, s).expect("valid hold")),
        weight().prop_map(|w| Capacity::roof(w).expect("valid roof")),
        (weight(), space()).prop_map(|(w, s)| Capacity::beam(w, s).expect("valid beam")),
        (weight(), space(), 1u32..30)
            .prop_map(|(w, s, n)| Capacity::compartments(w, s, n).expect("valid compartments")),
        (weight(), dimensions())
            .prop_map(|(w, d)| Capacity::deck_or_hold(w, d).expect("valid deck")),
    ]
}

fn carrier(capacity: Capacity, own: Dimensions) -> Carrier {
    Carrier::new("Generated", Kind::Wagon, 1.0, own, capacity).expect("valid carrier")
}

fn parcel(weight: f64, dimensions: Dimensions) -> Parcel {
    Parcel::new("Cargo", weight, dimensions).expect("valid parcel")
}

/// `limit` grown by `factor` on the `axis`-th axis.
fn grow_axis(limit: &Dimensions, axis: usize, factor: f64) -> Dimensions {
    let mut axes = [limit.length(), limit.width(), limit.height()];
    axes[axis] *= factor;
    Dimensions::new(axes[0], axes[1], axes[2]).expect("positive axes")
}

// -- Properties --

proptest! {
    #[test]
    fn overweight_cargo_is_never_carried(
        capacity in bounded_capacity(),
        own in dimensions(),
        size in dimensions(),
        excess in 0.001f64..100.0,
    ) {
        let carrier = carrier(capacity, own);
        let limit = capacity.max_weight().expect("bounded capacity");
        let cargo = parcel(limit + excess, size);

        for policy in POLICIES {
            prop_assert!(!can_carry(&carrier, &cargo, policy));
        }
    }

    #[test]
    fn oversized_cargo_is_never_carried(
        max_weight in weight(),
        limit in dimensions(),
        own in dimensions(),
        axis in 0usize..3,
        growth in 0.001f64..1.0,
        beam in any::<bool>(),
    ) {
        let capacity = if beam {
            Capacity::beam(max_weight, limit).expect("valid beam")
        } else {
            Capacity::hold(max_weight, limit).expect("valid hold")
        };
        let carrier = carrier(capacity, own);
        let cargo = parcel(max_weight / 2.0, grow_axis(&limit, axis, 1.0 + growth));

        for policy in POLICIES {
            prop_assert!(!can_carry(&carrier, &cargo, policy));
        }
    }

    #[test]
    fn strict_policy_refuses_touching_axes(
        limit in dimensions(),
        axis in 0usize..3,
        shrink in 0.1f64..1.0,
    ) {
        // Every other axis is smaller, one axis touches the limit exactly
        let mut axes = [limit.length() * shrink, limit.width() * shrink, limit.height() * shrink];
        axes[axis] = [limit.length(), limit.width(), limit.height()][axis];
        let candidate = Dimensions::new(axes[0], axes[1], axes[2]).expect("positive axes");

        prop_assert!(fits(&Space::Box(limit), &candidate, FitPolicy::Inclusive));
        prop_assert!(!fits(&Space::Box(limit), &candidate, FitPolicy::Strict));
    }

    #[test]
    fn no_capacity_never_carries(
        own in dimensions(),
        w in weight(),
        size in dimensions(),
        stowage_weight in weight(),
        stowage in space(),
    ) {
        let stowage = Capacity::stowage(stowage_weight, stowage).expect("valid stowage");
        for capacity in [Capacity::None, stowage] {
            let carrier = carrier(capacity, own);
            for policy in POLICIES {
                prop_assert!(!can_carry(&carrier, &parcel(w, size), policy));
            }
        }
    }

    #[test]
    fn unbounded_always_carries(own in dimensions(), w in 0.01f64..1e12, size in dimensions()) {
        let carrier = carrier(Capacity::Unbounded, own);
        for policy in POLICIES {
            prop_assert!(can_carry(&carrier, &parcel(w, size), policy));
        }
    }

    #[test]
    fn compartments_behave_like_one_share(
        max_weight in weight(),
        total in space(),
        count in 1u32..30,
        own in dimensions(),
        w in weight(),
        size in dimensions(),
    ) {
        let train = carrier(Capacity::compartments(max_weight, total, count).expect("valid"), own);
        let share_weight = max_weight / f64::from(count);
        let share_space = total.divide(count);
        let share = carrier(Capacity::hold(share_weight, share_space).expect("valid"), own);

        let relative = (share_space.capacity() * f64::from(count) - total.capacity()).abs()
            / total.capacity();
        prop_assert!(relative < 1e-9);

        let cargo = parcel(w, size);
        for policy in POLICIES {
            prop_assert_eq!(can_carry(&train, &cargo, policy), can_carry(&share, &cargo, policy));
        }
    }

    #[test]
    fn strict_acceptance_implies_inclusive(
        capacity in bounded_capacity(),
        own in dimensions(),
        w in weight(),
        size in dimensions(),
    ) {
        let carrier = carrier(capacity, own);
        let cargo = parcel(w, size);
        if can_carry(&carrier, &cargo, FitPolicy::Strict) {
            prop_assert!(can_carry(&carrier, &cargo, FitPolicy::Inclusive));
        }
    }
}
