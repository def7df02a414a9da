//! Round-robin assignment of duty dates to apartments.

use crate::models::{ApartmentId, RecurrenceDate, ScheduleAssignment};

/// Assign `dates` to `apartments` in strict rotation.
///
/// Date `i` goes to `apartments[i % apartments.len()]`, so apartments earlier
/// in the list receive the remainder when the dates do not divide evenly.
/// An empty apartment list yields an empty assignment.
pub fn assign_round_robin(
    apartments: &[ApartmentId],
    dates: Vec<RecurrenceDate>,
) -> ScheduleAssignment {
    let mut assignment = ScheduleAssignment::with_apartments(apartments);
    if apartments.is_empty() {
        return assignment;
    }

    for (i, date) in dates.into_iter().enumerate() {
        assignment.push(&apartments[i % apartments.len()], date);
    }

    assignment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::recurrence::sundays_in_range;
    use chrono::NaiveDate;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn ids(numbers: &[u32]) -> Vec<ApartmentId> {
        numbers.iter().map(|&n| ApartmentId::from(n)).collect()
    }

    fn labels(assignment: &ScheduleAssignment, apartment: u32) -> Vec<String> {
        assignment
            .get(&ApartmentId::from(apartment))
            .unwrap()
            .iter()
            .map(|d| d.label.clone())
            .collect()
    }

    #[test]
    fn test_june_rotation_over_four_apartments() {
        let apartments = ids(&[301, 302, 201, 202]);
        let dates = sundays_in_range(ymd(2025, 6, 1), ymd(2025, 6, 29));
        let assignment = assign_round_robin(&apartments, dates);

        assert_eq!(
            labels(&assignment, 301),
            vec!["1 de junio de 2025", "29 de junio de 2025"]
        );
        assert_eq!(labels(&assignment, 302), vec!["8 de junio de 2025"]);
        assert_eq!(labels(&assignment, 201), vec!["15 de junio de 2025"]);
        assert_eq!(labels(&assignment, 202), vec!["22 de junio de 2025"]);

        let order: Vec<&str> = assignment.apartments().map(|a| a.as_str()).collect();
        assert_eq!(order, vec!["301", "302", "201", "202"]);
    }

    #[test]
    fn test_no_dates_keeps_apartment_keys() {
        let dates = sundays_in_range(ymd(2025, 6, 3), ymd(2025, 6, 6));
        let assignment = assign_round_robin(&ids(&[301]), dates);

        assert_eq!(assignment.len(), 1);
        assert_eq!(assignment.get(&ApartmentId::from(301)), Some(&[][..]));
    }

    #[test]
    fn test_empty_apartment_list() {
        let dates = sundays_in_range(ymd(2025, 6, 1), ymd(2025, 6, 29));
        let assignment = assign_round_robin(&[], dates);
        assert!(assignment.is_empty());
        assert_eq!(assignment.total_dates(), 0);
    }

    #[test]
    fn test_more_apartments_than_dates() {
        let apartments = ids(&[101, 102, 103, 104, 105]);
        let dates = sundays_in_range(ymd(2025, 6, 1), ymd(2025, 6, 8));
        let assignment = assign_round_robin(&apartments, dates);

        let counts: Vec<usize> = assignment.iter().map(|(_, d)| d.len()).collect();
        assert_eq!(counts, vec![1, 1, 0, 0, 0]);
        assert_eq!(labels(&assignment, 101), vec!["1 de junio de 2025"]);
        assert_eq!(labels(&assignment, 102), vec!["8 de junio de 2025"]);
    }

    #[test]
    fn test_fairness_bound_and_conservation() {
        let dates = sundays_in_range(ymd(2025, 1, 1), ymd(2025, 12, 31));
        let m = dates.len();
        for n in 1..=9u32 {
            let apartments = ids(&(1..=n).collect::<Vec<_>>());
            let assignment = assign_round_robin(&apartments, dates.clone());
            let n = n as usize;

            assert_eq!(assignment.total_dates(), m);
            for (i, (_, assigned)) in assignment.iter().enumerate() {
                let expected = m / n + usize::from(i < m % n);
                assert_eq!(assigned.len(), expected, "n={} index={}", n, i);
            }
        }
    }

    #[test]
    fn test_partition_has_no_overlap() {
        let apartments = ids(&[301, 202, 201, 302]);
        let dates = sundays_in_range(ymd(2025, 3, 1), ymd(2025, 9, 30));
        let assignment = assign_round_robin(&apartments, dates.clone());

        let mut assigned: Vec<NaiveDate> = assignment
            .iter()
            .flat_map(|(_, d)| d.iter().map(|r| r.date))
            .collect();
        assigned.sort();
        let expected: Vec<NaiveDate> = dates.iter().map(|d| d.date).collect();
        assert_eq!(assigned, expected);
    }

    #[test]
    fn test_deterministic() {
        let apartments = ids(&[301, 202, 201, 302]);
        let run = || {
            assign_round_robin(
                &apartments,
                sundays_in_range(ymd(2025, 6, 1), ymd(2025, 11, 30)),
            )
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_duplicate_apartment_receives_each_slot() {
        let apartments = ids(&[301, 302, 301]);
        let dates = sundays_in_range(ymd(2025, 6, 1), ymd(2025, 6, 29));
        let assignment = assign_round_robin(&apartments, dates);

        assert_eq!(assignment.len(), 2);
        assert_eq!(
            labels(&assignment, 301),
            vec![
                "1 de junio de 2025",
                "15 de junio de 2025",
                "22 de junio de 2025"
            ]
        );
        assert_eq!(
            labels(&assignment, 302),
            vec!["8 de junio de 2025", "29 de junio de 2025"]
        );
    }
}
