//! Birthday recurrence and bucketing.
//!
//! Computes when a birth date next comes around relative to a reference date,
//! how many whole days away that is, and which display bucket it belongs to.
//! Everything here is a pure function of its arguments: the reference date is
//! always supplied by the caller and nothing in this module reads a clock, so
//! results are reproducible and safe to compute from any task.
//!
//! ## Bucket rules (first match wins)
//!
//! 1. **ThisWeek**: 0 to 6 days away (today included)
//! 2. **NextWeek**: 7 to 13 days away
//! 3. **ThisMonth**: later in the reference month
//! 4. **NextMonth**: in the month after the reference month
//! 5. **Later**: everything else, including birthdays earlier in the reference
//!    month that already passed and so roll over to next year

use chrono::{Datelike, NaiveDate};
use shared::BirthdayBucket;

/// Anything that carries a birth date can be ranked and grouped
pub trait HasBirthDate {
    fn birth_date(&self) -> NaiveDate;
}

impl HasBirthDate for NaiveDate {
    fn birth_date(&self) -> NaiveDate {
        *self
    }
}

/// A record with the values derived for one reference date
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<T> {
    pub record: T,
    pub next_occurrence: NaiveDate,
    pub days_until: u32,
    pub bucket: BirthdayBucket,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BucketGroup<T> {
    pub bucket: BirthdayBucket,
    pub entries: Vec<Ranked<T>>,
}

/// The date a birthday falls on in `year`.
///
/// Feb 29 birthdays are observed on Mar 1 in common years.
pub fn occurrence_in_year(birth_date: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth_date.month(), birth_date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        // Only reachable at the edge of chrono's representable range
        .unwrap_or(NaiveDate::MAX)
}

/// Nearest occurrence on or after `today`
pub fn next_occurrence(birth_date: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = occurrence_in_year(birth_date, today.year());
    if this_year < today {
        occurrence_in_year(birth_date, today.year() + 1)
    } else {
        this_year
    }
}

/// Whole calendar days from `today` to the next occurrence, always in `0..=366`
pub fn days_until(birth_date: NaiveDate, today: NaiveDate) -> u32 {
    days_between(today, next_occurrence(birth_date, today))
}

pub fn classify(birth_date: NaiveDate, today: NaiveDate) -> BirthdayBucket {
    let next = next_occurrence(birth_date, today);
    bucket_for(next, days_between(today, next), today)
}

/// Derive occurrence, distance and bucket for a single record
pub fn rank<T: HasBirthDate>(record: T, today: NaiveDate) -> Ranked<T> {
    let next_occurrence = next_occurrence(record.birth_date(), today);
    let days_until = days_between(today, next_occurrence);
    Ranked {
        bucket: bucket_for(next_occurrence, days_until, today),
        record,
        next_occurrence,
        days_until,
    }
}

/// Rank every record and sort by days until the next occurrence.
/// The sort is stable: records the same distance away keep their input order.
pub fn rank_all<T, I>(records: I, today: NaiveDate) -> Vec<Ranked<T>>
where
    T: HasBirthDate,
    I: IntoIterator<Item = T>,
{
    let mut ranked: Vec<Ranked<T>> = records.into_iter().map(|r| rank(r, today)).collect();
    ranked.sort_by_key(|r| r.days_until);
    ranked
}

/// Sort records by days until their next birthday and split them into buckets.
///
/// Groups come back in bucket priority order with empty buckets left out;
/// entries inside a group keep the sorted order.
pub fn rank_and_group<T, I>(records: I, today: NaiveDate) -> Vec<BucketGroup<T>>
where
    T: HasBirthDate,
    I: IntoIterator<Item = T>,
{
    let mut slots: Vec<Vec<Ranked<T>>> = BirthdayBucket::ALL.iter().map(|_| Vec::new()).collect();

    for entry in rank_all(records, today) {
        slots[entry.bucket as usize].push(entry);
    }

    BirthdayBucket::ALL
        .into_iter()
        .zip(slots)
        .filter(|(_, entries)| !entries.is_empty())
        .map(|(bucket, entries)| BucketGroup { bucket, entries })
        .collect()
}

fn days_between(from: NaiveDate, to: NaiveDate) -> u32 {
    (to - from).num_days().max(0) as u32
}

fn bucket_for(next: NaiveDate, days_until: u32, today: NaiveDate) -> BirthdayBucket {
    match days_until {
        0..=6 => BirthdayBucket::ThisWeek,
        7..=13 => BirthdayBucket::NextWeek,
        // days_until > 0 here, so `next` is strictly after today
        _ if next.year() == today.year() && next.month() == today.month() => {
            BirthdayBucket::ThisMonth
        }
        _ if next.month() == following_month(today.month()) => BirthdayBucket::NextMonth,
        _ => BirthdayBucket::Later,
    }
}

fn following_month(month: u32) -> u32 {
    if month == 12 {
        1
    } else {
        month + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Monday
    fn reference_day() -> NaiveDate {
        date(2024, 6, 10)
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        label: &'static str,
        birth_date: NaiveDate,
    }

    impl HasBirthDate for Entry {
        fn birth_date(&self) -> NaiveDate {
            self.birth_date
        }
    }

    fn entry(label: &'static str, birth_date: NaiveDate) -> Entry {
        Entry { label, birth_date }
    }

    #[test]
    fn test_birthday_in_two_days_is_this_week() {
        let birth = date(1990, 6, 12);
        assert_eq!(days_until(birth, reference_day()), 2);
        assert_eq!(classify(birth, reference_day()), BirthdayBucket::ThisWeek);
    }

    #[test]
    fn test_birthday_in_ten_days_is_next_week() {
        let birth = date(1985, 6, 20);
        assert_eq!(days_until(birth, reference_day()), 10);
        assert_eq!(classify(birth, reference_day()), BirthdayBucket::NextWeek);
    }

    #[test]
    fn test_later_in_current_month_is_this_month() {
        let birth = date(2001, 6, 25);
        assert_eq!(days_until(birth, reference_day()), 15);
        assert_eq!(classify(birth, reference_day()), BirthdayBucket::ThisMonth);
    }

    #[test]
    fn test_following_month_is_next_month() {
        let birth = date(1970, 7, 15);
        assert_eq!(days_until(birth, reference_day()), 35);
        assert_eq!(classify(birth, reference_day()), BirthdayBucket::NextMonth);
    }

    #[test]
    fn test_passed_birthday_rolls_to_next_year_and_is_later() {
        let birth = date(1999, 6, 5);
        assert_eq!(next_occurrence(birth, reference_day()), date(2025, 6, 5));
        assert_eq!(days_until(birth, reference_day()), 360);
        assert_eq!(classify(birth, reference_day()), BirthdayBucket::Later);
    }

    #[test]
    fn test_birthday_today_is_zero_days_away() {
        let birth = date(1995, 6, 10);
        assert_eq!(next_occurrence(birth, reference_day()), reference_day());
        assert_eq!(days_until(birth, reference_day()), 0);
        assert_eq!(classify(birth, reference_day()), BirthdayBucket::ThisWeek);
    }

    #[test]
    fn test_week_boundaries() {
        let today = reference_day();
        assert_eq!(classify(date(2000, 6, 16), today), BirthdayBucket::ThisWeek); // 6 days
        assert_eq!(classify(date(2000, 6, 17), today), BirthdayBucket::NextWeek); // 7 days
        assert_eq!(classify(date(2000, 6, 23), today), BirthdayBucket::NextWeek); // 13 days
        assert_eq!(classify(date(2000, 6, 24), today), BirthdayBucket::ThisMonth); // 14 days
    }

    #[test]
    fn test_week_rules_win_over_month_rules() {
        // 5 days away but already in July
        let today = date(2024, 6, 28);
        assert_eq!(classify(date(2000, 7, 3), today), BirthdayBucket::ThisWeek);
        assert_eq!(classify(date(2000, 7, 8), today), BirthdayBucket::NextWeek);
        assert_eq!(classify(date(2000, 7, 20), today), BirthdayBucket::NextMonth);
    }

    #[test]
    fn test_december_wraps_to_january() {
        let today = date(2024, 12, 10);
        let birth = date(1980, 1, 20);
        assert_eq!(next_occurrence(birth, today), date(2025, 1, 20));
        assert_eq!(classify(birth, today), BirthdayBucket::NextMonth);
    }

    #[test]
    fn test_november_treats_december_as_next_month() {
        let today = date(2024, 11, 2);
        assert_eq!(classify(date(1980, 12, 20), today), BirthdayBucket::NextMonth);
        assert_eq!(classify(date(1980, 1, 20), today), BirthdayBucket::Later);
    }

    #[test]
    fn test_two_months_out_is_later() {
        assert_eq!(classify(date(1990, 8, 30), reference_day()), BirthdayBucket::Later);
    }

    #[test]
    fn test_leap_day_birthday() {
        let birth = date(2000, 2, 29);

        // Leap year: observed on the day itself
        assert_eq!(next_occurrence(birth, date(2024, 2, 1)), date(2024, 2, 29));
        // Common year: observed on Mar 1
        assert_eq!(next_occurrence(birth, date(2023, 2, 1)), date(2023, 3, 1));
        assert_eq!(days_until(birth, date(2023, 3, 1)), 0);
        // Passed in a leap year, next one is Mar 1 of a common year
        assert_eq!(next_occurrence(birth, date(2024, 3, 1)), date(2025, 3, 1));
        assert_eq!(days_until(birth, date(2024, 3, 1)), 365);
        // Passed in a common year, next one is the real leap day
        assert_eq!(next_occurrence(birth, date(2023, 3, 2)), date(2024, 2, 29));
    }

    #[test]
    fn test_year_of_birth_is_ignored() {
        let today = reference_day();
        assert_eq!(
            days_until(date(1950, 9, 1), today),
            days_until(date(2020, 9, 1), today)
        );
    }

    #[test]
    fn test_next_occurrence_properties_hold_across_calendar() {
        let birth_dates: Vec<NaiveDate> = date(2000, 1, 1)
            .iter_days()
            .take_while(|d| d.year() == 2000)
            .collect();

        let mut today = date(2023, 1, 1);
        while today <= date(2025, 12, 31) {
            for &birth in &birth_dates {
                let next = next_occurrence(birth, today);
                let days = days_until(birth, today);

                assert!(next >= today, "{} before {} for {}", next, today, birth);
                assert!(days <= 366, "{} days for {} on {}", days, birth, today);
                assert_eq!((next - today).num_days(), days as i64);

                if birth.month() == 2 && birth.day() == 29 && next.month() == 3 {
                    assert_eq!(next.day(), 1);
                } else {
                    assert_eq!((next.month(), next.day()), (birth.month(), birth.day()));
                }
            }
            today = today + chrono::Duration::days(5);
        }
    }

    #[test]
    fn test_rank_and_group_scenarios() {
        let records = vec![
            entry("later", date(1999, 6, 5)),
            entry("next_month", date(1970, 7, 15)),
            entry("this_month", date(2001, 6, 25)),
            entry("next_week", date(1985, 6, 20)),
            entry("this_week", date(1990, 6, 12)),
            entry("today", date(1995, 6, 10)),
        ];

        let groups = rank_and_group(records, reference_day());

        let summary: Vec<(BirthdayBucket, Vec<&str>)> = groups
            .iter()
            .map(|g| (g.bucket, g.entries.iter().map(|e| e.record.label).collect()))
            .collect();

        assert_eq!(
            summary,
            vec![
                (BirthdayBucket::ThisWeek, vec!["today", "this_week"]),
                (BirthdayBucket::NextWeek, vec!["next_week"]),
                (BirthdayBucket::ThisMonth, vec!["this_month"]),
                (BirthdayBucket::NextMonth, vec!["next_month"]),
                (BirthdayBucket::Later, vec!["later"]),
            ]
        );
    }

    #[test]
    fn test_rank_and_group_omits_empty_buckets() {
        let groups = rank_and_group(vec![entry("a", date(1990, 6, 11))], reference_day());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].bucket, BirthdayBucket::ThisWeek);

        let empty: Vec<Entry> = Vec::new();
        assert!(rank_and_group(empty, reference_day()).is_empty());
    }

    #[test]
    fn test_bare_dates_can_be_ranked() {
        let ranked = rank_all(
            vec![date(1990, 12, 25), date(2000, 2, 29), date(1985, 6, 10)],
            date(2023, 2, 20),
        );

        let summary: Vec<(NaiveDate, u32, BirthdayBucket)> = ranked
            .iter()
            .map(|r| (r.next_occurrence, r.days_until, r.bucket))
            .collect();
        assert_eq!(
            summary,
            vec![
                (date(2023, 3, 1), 9, BirthdayBucket::NextWeek),
                (date(2023, 6, 10), 110, BirthdayBucket::Later),
                (date(2023, 12, 25), 308, BirthdayBucket::Later),
            ]
        );
        assert_eq!(ranked[0].record, date(2000, 2, 29));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let records = vec![
            entry("first", date(1980, 6, 20)),
            entry("second", date(1990, 6, 20)),
            entry("third", date(2000, 6, 20)),
        ];

        let groups = rank_and_group(records, reference_day());
        let labels: Vec<&str> = groups[0].entries.iter().map(|e| e.record.label).collect();
        assert_eq!(labels, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_grouping_is_exclusive_sorted_and_idempotent() {
        let records: Vec<Entry> = date(1992, 1, 1)
            .iter_days()
            .step_by(3)
            .take_while(|d| d.year() == 1992)
            .map(|d| entry("x", d))
            .collect();

        for today in [date(2024, 1, 31), date(2024, 6, 10), date(2024, 11, 30), date(2025, 12, 31)] {
            let groups = rank_and_group(records.clone(), today);

            let flattened: Vec<&Ranked<Entry>> = groups.iter().flat_map(|g| g.entries.iter()).collect();
            assert_eq!(flattened.len(), records.len());

            let seen: HashSet<NaiveDate> = flattened.iter().map(|e| e.record.birth_date).collect();
            assert_eq!(seen.len(), records.len());

            for pair in flattened.windows(2) {
                assert!(pair[0].days_until <= pair[1].days_until);
            }

            for group in &groups {
                for e in &group.entries {
                    assert_eq!(e.bucket, group.bucket);
                    assert_eq!(classify(e.record.birth_date, today), group.bucket);
                }
            }

            assert_eq!(groups, rank_and_group(records.clone(), today));
        }
    }
}
