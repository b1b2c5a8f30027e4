//! Birth-date field validation and derived-date computation.
//!
//! The six digits at offsets 4..10 encode `YYMMDD`. The century of `YY` is
//! inferred against the reference date: values strictly below the
//! reference year's last two digits resolve to the 2000s, everything else
//! to the 1900s. The pivot therefore floats with the reference date; the
//! same two-digit year can resolve differently as time passes, which is the
//! accepted tradeoff for identifiers that may be issued close to "today".

use chrono::{Datelike, NaiveDate};

/// Resolve a two-digit year to a full year using the floating pivot.
pub fn infer_full_year(yy: u32, reference: NaiveDate) -> i32 {
    let pivot = reference.year().rem_euclid(100) as u32;
    if yy < pivot {
        2000 + yy as i32
    } else {
        1900 + yy as i32
    }
}

/// Standard Gregorian leap rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Validate the six birth-date digits against the calendar.
///
/// Returns the failure reason when invalid. The day cap is only enforced
/// for 30-day months and February; other months accept any day up to 31.
pub fn check_birth_date(digits: &str, reference: NaiveDate) -> Result<(), String> {
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err("Formato de fecha incorrecto".to_string());
    }
    let parse = |range: &str| {
        range
            .parse::<u32>()
            .map_err(|_| "Formato de fecha incorrecto".to_string())
    };
    let yy = parse(&digits[..2])?;
    let month = parse(&digits[2..4])?;
    let day = parse(&digits[4..6])?;

    if !(1..=12).contains(&month) {
        return Err(format!("Mes inválido: {month}"));
    }
    if !(1..=31).contains(&day) {
        return Err(format!("Día inválido: {day}"));
    }
    if matches!(month, 4 | 6 | 9 | 11) && day > 30 {
        return Err(format!("Día inválido para mes {month}: {day}"));
    }
    if month == 2 {
        let year = infer_full_year(yy, reference);
        if is_leap_year(year) {
            if day > 29 {
                return Err(format!("Día inválido para febrero bisiesto: {day}"));
            }
        } else if day > 28 {
            return Err(format!("Día inválido para febrero: {day}"));
        }
    }
    Ok(())
}

/// Construct the calendar date the digits denote, when possible.
///
/// This is intentionally independent of [`check_birth_date`]: diagnostic
/// reports want a concrete date even for records that failed validation,
/// and an unconstructable combination simply yields `None`.
pub fn best_effort_birth_date(digits: &str, reference: NaiveDate) -> Option<NaiveDate> {
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let yy: u32 = digits[..2].parse().ok()?;
    let month: u32 = digits[2..4].parse().ok()?;
    let day: u32 = digits[4..6].parse().ok()?;
    NaiveDate::from_ymd_opt(infer_full_year(yy, reference), month, day)
}

/// Whole years between `birth` and `reference`.
pub fn age_at(birth: NaiveDate, reference: NaiveDate) -> i32 {
    let mut age = reference.year() - birth.year();
    if (reference.month(), reference.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 10).unwrap()
    }

    #[test]
    fn century_pivot_floats_with_reference() {
        // Reference 2025: 24 is recent, 25 wraps to the 1900s.
        assert_eq!(infer_full_year(24, reference()), 2024);
        assert_eq!(infer_full_year(25, reference()), 1925);
        assert_eq!(infer_full_year(0, reference()), 2000);
        assert_eq!(infer_full_year(99, reference()), 1999);
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn rejects_non_digit_input() {
        assert!(check_birth_date("85O101", reference()).is_err());
        assert!(check_birth_date("8501", reference()).is_err());
        assert!(check_birth_date("", reference()).is_err());
    }

    #[test]
    fn rejects_bad_month_and_day() {
        assert!(check_birth_date("851301", reference()).is_err());
        assert!(check_birth_date("850001", reference()).is_err());
        assert!(check_birth_date("850132", reference()).is_err());
        assert!(check_birth_date("850100", reference()).is_err());
    }

    #[test]
    fn caps_thirty_day_months() {
        assert!(check_birth_date("850431", reference()).is_err());
        assert!(check_birth_date("850430", reference()).is_ok());
        assert!(check_birth_date("851131", reference()).is_err());
    }

    #[test]
    fn february_respects_inferred_leap_year() {
        // 24 -> 2024, leap: day 29 fine.
        assert!(check_birth_date("240229", reference()).is_ok());
        // 23 -> 2023, not leap.
        assert!(check_birth_date("230229", reference()).is_err());
        assert!(check_birth_date("230228", reference()).is_ok());
        // 00 -> 2000, leap by the 400 rule.
        assert!(check_birth_date("000229", reference()).is_ok());
        // With reference year 2000 the pivot is 0, so 00 -> 1900: not leap.
        let ref_1900s = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert!(check_birth_date("000229", ref_1900s).is_err());
    }

    #[test]
    fn best_effort_date_ignores_validity() {
        // Day 31 in April fails the check but also fails construction.
        assert_eq!(best_effort_birth_date("850431", reference()), None);
        // A clean date constructs.
        assert_eq!(
            best_effort_birth_date("850101", reference()),
            NaiveDate::from_ymd_opt(1985, 1, 1)
        );
        assert_eq!(best_effort_birth_date("85010", reference()), None);
        assert_eq!(best_effort_birth_date("85O101", reference()), None);
    }

    #[test]
    fn age_adjusts_for_month_and_day() {
        let birth = NaiveDate::from_ymd_opt(1985, 1, 1).unwrap();
        assert_eq!(age_at(birth, reference()), 40);
        let later_birthday = NaiveDate::from_ymd_opt(1985, 12, 1).unwrap();
        assert_eq!(age_at(later_birthday, reference()), 39);
        let on_the_day = NaiveDate::from_ymd_opt(1985, 7, 10).unwrap();
        assert_eq!(age_at(on_the_day, reference()), 40);
    }
}
