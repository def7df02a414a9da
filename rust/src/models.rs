//! Core data types for the rotation schedule.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use std::fmt;

/// Opaque apartment identifier (usually a door number such as `301`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApartmentId(String);

impl ApartmentId {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u32> for ApartmentId {
    fn from(number: u32) -> Self {
        Self(number.to_string())
    }
}

impl From<&str> for ApartmentId {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for ApartmentId {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// A duty date on the target weekday, with its display label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecurrenceDate {
    pub date: NaiveDate,
    /// Long Spanish form, e.g. "1 de junio de 2025"
    pub label: String,
}

impl fmt::Display for RecurrenceDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Validated date range: `start` is strictly before `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Construct without validation. Callers go through `validate_date_range`.
    pub(crate) fn new_unchecked(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

/// Insertion-ordered mapping from apartment to its assigned dates.
///
/// Every apartment given at construction is a key, even if it never
/// receives a date. A repeated apartment id maps to a single key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScheduleAssignment {
    entries: Vec<(ApartmentId, Vec<RecurrenceDate>)>,
    index: FxHashMap<ApartmentId, usize>,
}

impl ScheduleAssignment {
    /// Create an assignment with an empty date list for each apartment.
    pub fn with_apartments(apartments: &[ApartmentId]) -> Self {
        let mut assignment = Self {
            entries: Vec::with_capacity(apartments.len()),
            index: FxHashMap::with_capacity_and_hasher(apartments.len(), Default::default()),
        };
        for apartment in apartments {
            assignment.slot(apartment);
        }
        assignment
    }

    fn slot(&mut self, apartment: &ApartmentId) -> usize {
        if let Some(&idx) = self.index.get(apartment) {
            return idx;
        }
        let idx = self.entries.len();
        self.entries.push((apartment.clone(), Vec::new()));
        self.index.insert(apartment.clone(), idx);
        idx
    }

    /// Append a date to an apartment's list, adding the apartment if unknown.
    pub(crate) fn push(&mut self, apartment: &ApartmentId, date: RecurrenceDate) {
        let idx = self.slot(apartment);
        self.entries[idx].1.push(date);
    }

    /// Dates assigned to an apartment, in chronological order.
    pub fn get(&self, apartment: &ApartmentId) -> Option<&[RecurrenceDate]> {
        self.index
            .get(apartment)
            .map(|&idx| self.entries[idx].1.as_slice())
    }

    /// Iterate apartments and their dates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ApartmentId, &[RecurrenceDate])> {
        self.entries
            .iter()
            .map(|(apartment, dates)| (apartment, dates.as_slice()))
    }

    pub fn apartments(&self) -> impl Iterator<Item = &ApartmentId> {
        self.entries.iter().map(|(apartment, _)| apartment)
    }

    /// Number of apartments (keys).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of assigned dates across all apartments.
    pub fn total_dates(&self) -> usize {
        self.entries.iter().map(|(_, dates)| dates.len()).sum()
    }

    /// Largest number of dates held by a single apartment (0 when empty).
    pub fn max_dates(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, dates)| dates.len())
            .max()
            .unwrap_or(0)
    }
}

/// Result of a schedule generation request.
#[derive(Clone, Debug)]
pub struct Schedule {
    apartments: Vec<ApartmentId>,
    range: DateRange,
    assignment: ScheduleAssignment,
    /// Number of recurrence dates found in the range
    total_occurrences: usize,
}

impl Schedule {
    pub(crate) fn new(
        apartments: Vec<ApartmentId>,
        range: DateRange,
        assignment: ScheduleAssignment,
        total_occurrences: usize,
    ) -> Self {
        Self {
            apartments,
            range,
            assignment,
            total_occurrences,
        }
    }

    /// Apartments in the order they were given.
    pub fn apartments(&self) -> &[ApartmentId] {
        &self.apartments
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    pub fn assignment(&self) -> &ScheduleAssignment {
        &self.assignment
    }

    pub fn total_occurrences(&self) -> usize {
        self.total_occurrences
    }

    pub fn stats(&self) -> ScheduleStats {
        ScheduleStats {
            apartment_count: self.apartments.len(),
            total_dates: self.assignment.total_dates(),
            total_sundays: self.total_occurrences,
        }
    }
}

/// Summary figures shown next to the schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleStats {
    pub apartment_count: usize,
    pub total_dates: usize,
    pub total_sundays: usize,
}

impl ScheduleStats {
    /// Spanish count line, e.g. "4 apartamentos • 5 fechas totales".
    pub fn describe(&self) -> String {
        let apartments = if self.apartment_count == 1 {
            "apartamento"
        } else {
            "apartamentos"
        };
        let dates = if self.total_dates == 1 {
            "fecha total"
        } else {
            "fechas totales"
        };
        format!(
            "{} {} • {} {}",
            self.apartment_count, apartments, self.total_dates, dates
        )
    }
}
