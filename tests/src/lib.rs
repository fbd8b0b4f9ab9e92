//! Cross-crate tests: spec strings resolved through the fleet and checked by
//! the capacity model, plus property tests over generated carriers.

mod capacity;
