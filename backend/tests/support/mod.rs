#![allow(dead_code)]

use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{Datelike, NaiveDate};
use tempfile::TempDir;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the variables on unwind and serializes access to process-global
/// env vars, since tests run in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

pub const DAILY_HEADER: &str = "dteday,season_new,weekday_new,mnth,Year,casual,registered,cnt";
pub const HOURLY_HEADER: &str = "dteday,hr,season_new,weekday_new,mnth,Year,casual,registered,cnt";

/// Hours written per day by [`RentalFixture::two_weeks`].
pub const FIXTURE_HOURS: [u32; 4] = [0, 8, 17, 23];

/// Daily and hourly CSV files in a temporary directory.
pub struct RentalFixture {
    pub dir: TempDir,
    pub daily: PathBuf,
    pub hourly: PathBuf,
    pub logo: PathBuf,
}

impl RentalFixture {
    /// Write the given CSV bodies (without headers) to disk.
    pub fn new(daily_rows: &str, hourly_rows: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let daily = dir.path().join("day_clean.csv");
        let hourly = dir.path().join("hour_clean.csv");
        let logo = dir.path().join("logo.jpg");

        fs::write(&daily, format!("{}\n{}", DAILY_HEADER, daily_rows)).unwrap();
        fs::write(&hourly, format!("{}\n{}", HOURLY_HEADER, hourly_rows)).unwrap();
        fs::write(&logo, b"\xFF\xD8\xFFlogo").unwrap();

        Self {
            dir,
            daily,
            hourly,
            logo,
        }
    }

    /// 2011-01-01 through 2011-01-14, four hourly rows per day.
    ///
    /// Day `d` has `casual = d` and `registered = 10 * d`; each hourly row of
    /// day `d` at hour `h` has `casual = d` and `registered = h`.
    pub fn two_weeks() -> Self {
        let mut daily = String::new();
        let mut hourly = String::new();
        for d in 1..=14u32 {
            let date = date(2011, 1, d);
            let weekday = weekday_label(date);
            let (casual, registered) = (d as i64, 10 * d as i64);
            writeln!(
                daily,
                "{},Winter,{},1,2011,{},{},{}",
                date,
                weekday,
                casual,
                registered,
                casual + registered
            )
            .unwrap();
            for h in FIXTURE_HOURS {
                writeln!(
                    hourly,
                    "{},{},Winter,{},1,2011,{},{},{}",
                    date,
                    h,
                    weekday,
                    d,
                    h,
                    d + h
                )
                .unwrap();
            }
        }
        Self::new(&daily, &hourly)
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn weekday_label(date: NaiveDate) -> String {
    date.weekday().to_string()
}
