// 🚗 Car - A record with a derived age
// Age is never stored: it is recomputed from the model year on every call,
// against whatever clock the caller hands in

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLOCK
// ============================================================================

/// Source of "the current year".
pub trait Clock: Send + Sync {
    fn current_year(&self) -> i32;
}

/// Reads the local wall clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// Always reports the same year. Used by tests and reproducible runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

// ============================================================================
// CAR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub make: String,
    pub model: String,
    pub year: i32,
}

impl Car {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Car {
            make: make.into(),
            model: model.into(),
            year,
        }
    }

    /// "Honda Civic (2018)"
    pub fn label(&self) -> String {
        format!("{} {} ({})", self.make, self.model, self.year)
    }

    /// Age relative to `current_year`. Negative for a model year in the future.
    /// Saturates at the `i32` bounds instead of overflowing.
    pub fn age_in(&self, current_year: i32) -> i32 {
        current_year.saturating_sub(self.year)
    }

    /// Age according to `clock`.
    pub fn age<C: Clock + ?Sized>(&self, clock: &C) -> i32 {
        self.age_in(clock.current_year())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_with_fixed_clock() {
        let clock = FixedClock(2024);

        assert_eq!(Car::new("Honda", "Civic", 2018).age(&clock), 6);
        assert_eq!(Car::new("Toyota", "CVR", 2022).age(&clock), 2);
    }

    #[test]
    fn test_age_is_recomputed_per_call() {
        let car = Car::new("Honda", "Civic", 2018);

        assert_eq!(car.age(&FixedClock(2020)), 2);
        assert_eq!(car.age(&FixedClock(2030)), 12);
    }

    #[test]
    fn test_age_future_model_year() {
        assert_eq!(Car::new("Tesla", "Roadster", 2030).age_in(2026), -4);
    }

    #[test]
    fn test_age_extreme_model_year_saturates() {
        assert_eq!(Car::new("X", "Y", i32::MIN).age(&FixedClock(2026)), i32::MAX);
        assert_eq!(Car::new("X", "Y", i32::MAX).age(&FixedClock(-10)), i32::MIN);
    }

    #[test]
    fn test_age_through_trait_object() {
        let clock: Box<dyn Clock> = Box::new(FixedClock(2025));
        assert_eq!(Car::new("Honda", "Civic", 2018).age(clock.as_ref()), 7);
    }

    #[test]
    fn test_system_clock_matches_chrono() {
        let car = Car::new("Honda", "Civic", 2018);
        let expected = Local::now().year() - 2018;

        // Guard against a year boundary between the two reads
        let age = car.age(&SystemClock);
        assert!(age == expected || age == expected + 1);
    }

    #[test]
    fn test_label() {
        assert_eq!(Car::new("Honda", "Civic", 2018).label(), "Honda Civic (2018)");
    }
}
