//! Python bindings (enabled with the `python` feature).

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use std::path::PathBuf;

use chrono::NaiveDate;
use pyo3::exceptions::{PyRuntimeError, PyUserWarning, PyValueError};
use pyo3::prelude::*;

use crate::config::{ExportConfig, ScheduleConfig};
use crate::models::{ApartmentId, Schedule, ScheduleStats};
use crate::pdf::export_pdf;
use crate::scheduler::{generate_schedule, validate_date_range, RangeWarning};

/// Summary figures of a generated schedule.
#[pyclass(name = "ScheduleStats")]
#[derive(Clone, Debug)]
pub struct PyScheduleStats {
    #[pyo3(get)]
    pub apartment_count: usize,
    #[pyo3(get)]
    pub total_dates: usize,
    #[pyo3(get)]
    pub total_sundays: usize,
}

impl From<ScheduleStats> for PyScheduleStats {
    fn from(stats: ScheduleStats) -> Self {
        Self {
            apartment_count: stats.apartment_count,
            total_dates: stats.total_dates,
            total_sundays: stats.total_sundays,
        }
    }
}

#[pymethods]
impl PyScheduleStats {
    /// Spanish count line shown next to the schedule.
    fn describe(&self) -> String {
        ScheduleStats {
            apartment_count: self.apartment_count,
            total_dates: self.total_dates,
            total_sundays: self.total_sundays,
        }
        .describe()
    }

    fn __repr__(&self) -> String {
        format!(
            "ScheduleStats(apartment_count={}, total_dates={}, total_sundays={})",
            self.apartment_count, self.total_dates, self.total_sundays
        )
    }
}

/// A generated rotation schedule (PyO3 wrapper).
#[pyclass(name = "Schedule")]
#[derive(Clone, Debug)]
pub struct PySchedule {
    inner: Schedule,
}

#[pymethods]
impl PySchedule {
    #[getter]
    fn apartments(&self) -> Vec<String> {
        self.inner
            .apartments()
            .iter()
            .map(|a| a.as_str().to_string())
            .collect()
    }

    #[getter]
    fn start_date(&self) -> NaiveDate {
        self.inner.range().start()
    }

    #[getter]
    fn end_date(&self) -> NaiveDate {
        self.inner.range().end()
    }

    /// List of (apartment, [date labels]) in rotation order.
    #[getter]
    fn assignments(&self) -> Vec<(String, Vec<String>)> {
        self.inner
            .assignment()
            .iter()
            .map(|(apartment, dates)| {
                (
                    apartment.as_str().to_string(),
                    dates.iter().map(|d| d.label.clone()).collect(),
                )
            })
            .collect()
    }

    fn stats(&self) -> PyScheduleStats {
        self.inner.stats().into()
    }

    fn __repr__(&self) -> String {
        format!(
            "Schedule(apartments={}, start={}, end={}, dates={})",
            self.inner.apartments().len(),
            self.inner.range().start(),
            self.inner.range().end(),
            self.inner.assignment().total_dates()
        )
    }
}

/// Generate the Sunday rotation for the given apartments.
///
/// # Raises
/// * ValueError if a date is missing, the range is not increasing, or no apartment is given
#[pyfunction]
#[pyo3(name = "generate_schedule", signature = (apartments, start_date, end_date, verbosity=0))]
fn py_generate_schedule(
    py: Python<'_>,
    apartments: Vec<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    verbosity: u8,
) -> PyResult<PySchedule> {
    let today = chrono::Local::now().date_naive();
    let validation = match validate_date_range(start_date, end_date, today) {
        Ok(validation) => validation,
        Err(e) => return Err(PyValueError::new_err(e.to_string())),
    };
    if validation.warnings.contains(&RangeWarning::StartsInPast) {
        PyErr::warn_bound(
            py,
            py.get_type_bound::<PyUserWarning>().as_any(),
            "Start date is before today",
            1,
        )?;
    }

    let apartments: Vec<ApartmentId> = apartments.into_iter().map(ApartmentId::from).collect();
    let config = ScheduleConfig {
        verbosity,
        ..ScheduleConfig::default()
    };

    match generate_schedule(&apartments, validation.range, &config) {
        Ok(inner) => Ok(PySchedule { inner }),
        Err(e) => Err(PyValueError::new_err(e.to_string())),
    }
}

/// Write the schedule as a PDF into `directory` and return the file path.
///
/// # Raises
/// * RuntimeError if the document cannot be generated or written
#[pyfunction]
#[pyo3(name = "export_pdf", signature = (schedule, directory, verbosity=0))]
fn py_export_pdf(schedule: &PySchedule, directory: PathBuf, verbosity: u8) -> PyResult<PathBuf> {
    let config = ExportConfig {
        verbosity,
        ..ExportConfig::default()
    };
    match export_pdf(&schedule.inner, &directory, &config) {
        Ok(path) => Ok(path),
        Err(e) => Err(PyRuntimeError::new_err(e.to_string())),
    }
}

/// File name the export uses for a date range.
#[pyfunction]
#[pyo3(name = "export_filename")]
fn py_export_filename(start_date: NaiveDate, end_date: NaiveDate) -> PyResult<String> {
    let today = NaiveDate::MIN;
    match validate_date_range(Some(start_date), Some(end_date), today) {
        Ok(validation) => Ok(crate::pdf::export_filename(&validation.range)),
        Err(e) => Err(PyValueError::new_err(e.to_string())),
    }
}

/// The escalas_rust Python module.
#[pymodule]
fn escalas_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySchedule>()?;
    m.add_class::<PyScheduleStats>()?;

    m.add_function(wrap_pyfunction!(py_generate_schedule, m)?)?;
    m.add_function(wrap_pyfunction!(py_export_pdf, m)?)?;
    m.add_function(wrap_pyfunction!(py_export_filename, m)?)?;

    Ok(())
}
