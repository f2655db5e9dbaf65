use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::model::calendar::YearMonth;
use crate::model::daily_point::DailyPoint;
use crate::repository::traits::DailySeriesRepository;

/// One pretty-printed JSON array per month: `series_YYYY_MM.json`.
#[derive(Clone)]
pub struct FileSeriesRepository {
    base_dir: PathBuf,
}

impl FileSeriesRepository {
    pub fn new(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn path_for(&self, month: YearMonth) -> PathBuf {
        self.base_dir
            .join(format!("series_{:04}_{:02}.json", month.year(), month.month()))
    }

    fn read_points(&self, month: YearMonth) -> Result<Vec<DailyPoint>> {
        let path = self.path_for(month);
        if !path.exists() {
            log::debug!("no series stored for {}", month);
            return Ok(Vec::new());
        }
        let reader = BufReader::new(File::open(&path)?);
        let points: Vec<DailyPoint> = serde_json::from_reader(reader)
            .map_err(|e| anyhow!("Corrupt series file {}: {}", path.display(), e))?;
        log::debug!("read {} points from {}", points.len(), path.display());
        Ok(points)
    }

    fn write_points(&self, month: YearMonth, points: &[DailyPoint]) -> Result<()> {
        let path = self.path_for(month);
        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(&mut writer, points)?;
        writer.flush()?;
        log::debug!("wrote {} points to {}", points.len(), path.display());
        Ok(())
    }
}

impl DailySeriesRepository for FileSeriesRepository {
    fn month(&self, month: YearMonth) -> Result<Vec<DailyPoint>> {
        let mut points = self.read_points(month)?;
        let before = points.len();
        points.retain(|p| month.contains(p.date));
        if points.len() != before {
            log::warn!("dropped {} points outside {}", before - points.len(), month);
        }
        points.sort_by_key(|p| p.date);
        Ok(points)
    }

    fn upsert(&self, point: DailyPoint) -> Result<()> {
        let month = YearMonth::of(point.date)?;
        let mut points = self.read_points(month)?;
        if let Some(pos) = points.iter().position(|p| p.date == point.date) {
            points[pos] = point;
        } else {
            points.push(point);
        }
        points.sort_by_key(|p| p.date);
        self.write_points(month, &points)
    }

    fn replace_month(&self, month: YearMonth, mut points: Vec<DailyPoint>) -> Result<()> {
        if let Some(stray) = points.iter().find(|p| !month.contains(p.date)) {
            return Err(anyhow!("Point {} does not belong to {}", stray.date, month));
        }
        points.sort_by_key(|p| p.date);
        self.write_points(month, &points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_empty_month() {
        let dir = tempdir().unwrap();
        let repo = FileSeriesRepository::new(dir.path().join("series")).unwrap();
        let points = repo.month(YearMonth::new(2025, 9).unwrap()).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_upsert_replaces_by_date_and_sorts() {
        let dir = tempdir().unwrap();
        let repo = FileSeriesRepository::new(dir.path().to_path_buf()).unwrap();

        repo.upsert(DailyPoint::new(date("2025-09-03"), 30.0)).unwrap();
        repo.upsert(DailyPoint::new(date("2025-09-01"), 10.0)).unwrap();
        repo.upsert(DailyPoint::new(date("2025-09-03"), 33.0).with_actual(31.0)).unwrap();
        repo.upsert(DailyPoint::new(date("2025-10-01"), 1.0)).unwrap();

        let points = repo.month(YearMonth::new(2025, 9).unwrap()).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, date("2025-09-01"));
        assert_eq!(points[1].predicted, 33.0);
        assert_eq!(points[1].actual, Some(31.0));

        assert!(dir.path().join("series_2025_10.json").exists());
    }

    #[test]
    fn test_replace_month_rejects_foreign_dates() {
        let dir = tempdir().unwrap();
        let repo = FileSeriesRepository::new(dir.path().to_path_buf()).unwrap();
        let month = YearMonth::new(2025, 9).unwrap();

        let err = repo.replace_month(month, vec![DailyPoint::new(date("2025-08-31"), 1.0)]);
        assert!(err.is_err());

        repo.replace_month(
            month,
            vec![
                DailyPoint::new(date("2025-09-02"), 2.0),
                DailyPoint::new(date("2025-09-01"), 1.0),
            ],
        )
        .unwrap();
        let points = repo.month(month).unwrap();
        assert_eq!(points[0].date, date("2025-09-01"));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let repo = FileSeriesRepository::new(dir.path().to_path_buf()).unwrap();
        fs::write(dir.path().join("series_2025_09.json"), "{").unwrap();
        assert!(repo.month(YearMonth::new(2025, 9).unwrap()).is_err());
    }
}
