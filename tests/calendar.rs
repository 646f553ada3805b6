#[cfg(test)]
mod tests {
    use agenda::libs::calendar::{day_name, day_of_week, days_in_month, first_day_of_month, is_leap_year, month_name, Date, DateTime};
    use std::cmp::Ordering;

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2025, 12), 31);
    }

    #[test]
    fn test_day_of_week_known_dates() {
        // 2025-01-01 was a Wednesday
        assert_eq!(day_of_week(2025, 1, 1), 3);
        // 2000-01-01 was a Saturday
        assert_eq!(day_of_week(2000, 1, 1), 6);
        // 2024-02-29 was a Thursday
        assert_eq!(day_of_week(2024, 2, 29), 4);
        // 2025-08-03 was a Sunday
        assert_eq!(day_of_week(2025, 8, 3), 0);
    }

    #[test]
    fn test_first_day_of_month() {
        // August 2025 starts on a Friday
        assert_eq!(first_day_of_month(2025, 8), 5);
        // September 2024 starts on a Sunday
        assert_eq!(first_day_of_month(2024, 9), 0);
    }

    #[test]
    fn test_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "Invalid");
        assert_eq!(day_name(0), "Sunday");
        assert_eq!(day_name(6), "Saturday");
        assert_eq!(day_name(7), "Invalid");
    }

    #[test]
    fn test_add_days_forward_across_boundaries() {
        let date = Date::new(2024, 12, 30).add_days(3);
        assert_eq!(date, Date::new(2025, 1, 2));

        // Leap day is counted
        let date = Date::new(2024, 2, 28).add_days(2);
        assert_eq!(date, Date::new(2024, 3, 1));

        let date = Date::new(2025, 1, 15).add_days(45);
        assert_eq!(date, Date::new(2025, 3, 1));
    }

    #[test]
    fn test_add_days_backward_across_boundaries() {
        let date = Date::new(2025, 3, 1).add_days(-1);
        assert_eq!(date, Date::new(2025, 2, 28));

        let date = Date::new(2024, 3, 1).add_days(-1);
        assert_eq!(date, Date::new(2024, 2, 29));

        let date = Date::new(2025, 1, 1).add_days(-1);
        assert_eq!(date, Date::new(2024, 12, 31));
    }

    #[test]
    fn test_add_months_clamps_day() {
        // Jan 31 + 1 month lands on the last day of February
        let date = Date::new(2025, 1, 31).add_months(1);
        assert_eq!(date, Date::new(2025, 2, 28));

        let date = Date::new(2024, 1, 31).add_months(1);
        assert_eq!(date, Date::new(2024, 2, 29));

        let date = Date::new(2025, 3, 31).add_months(-1);
        assert_eq!(date, Date::new(2025, 2, 28));
    }

    #[test]
    fn test_add_months_across_years() {
        let date = Date::new(2025, 11, 15).add_months(3);
        assert_eq!(date, Date::new(2026, 2, 15));

        let date = Date::new(2025, 2, 15).add_months(-14);
        assert_eq!(date, Date::new(2023, 12, 15));
    }

    #[test]
    fn test_date_ordering_is_lexicographic() {
        assert_eq!(Date::new(2025, 1, 2).cmp(&Date::new(2025, 1, 3)), Ordering::Less);
        assert_eq!(Date::new(2025, 2, 1).cmp(&Date::new(2025, 1, 31)), Ordering::Greater);
        assert_eq!(Date::new(2025, 1, 1).cmp(&Date::new(2025, 1, 1)), Ordering::Equal);
        assert!(Date::new(2024, 12, 31) < Date::new(2025, 1, 1));
    }

    #[test]
    fn test_datetime_ordering_includes_time() {
        let earlier = DateTime::new(2025, 3, 1, 9, 0);
        let later = DateTime::new(2025, 3, 1, 9, 30);
        assert!(earlier < later);
        assert!(DateTime::new(2025, 3, 1, 23, 59) < DateTime::new(2025, 3, 2, 0, 0));
    }

    #[test]
    fn test_add_minutes_carries_forward() {
        // Carries into the next day
        let dt = DateTime::new(2025, 3, 1, 23, 30).add_minutes(45);
        assert_eq!(dt, DateTime::new(2025, 3, 2, 0, 15));

        // Carries across a year boundary
        let dt = DateTime::new(2024, 12, 31, 23, 0).add_minutes(120);
        assert_eq!(dt, DateTime::new(2025, 1, 1, 1, 0));

        // Carries across a leap day
        let dt = DateTime::new(2024, 2, 28, 12, 0).add_minutes(2 * 24 * 60);
        assert_eq!(dt, DateTime::new(2024, 3, 1, 12, 0));

        // Zero minutes is the identity
        let dt = DateTime::new(2025, 6, 15, 10, 30).add_minutes(0);
        assert_eq!(dt, DateTime::new(2025, 6, 15, 10, 30));
    }

    #[test]
    fn test_date_parse() {
        assert_eq!("2025-03-01".parse::<Date>().unwrap(), Date::new(2025, 3, 1));
        assert_eq!(" 2024-02-29 ".parse::<Date>().unwrap(), Date::new(2024, 2, 29));
        assert!("2025-02-29".parse::<Date>().is_err());
        assert!("2025-13-01".parse::<Date>().is_err());
        assert!("not-a-date".parse::<Date>().is_err());
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(Date::new(2025, 3, 1).to_string(), "2025-03-01");
        assert_eq!(DateTime::new(2025, 3, 1, 9, 5).to_string(), "2025-03-01 09:05");
    }
}
