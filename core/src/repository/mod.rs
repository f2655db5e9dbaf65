pub mod file;
pub mod traits;

pub use file::FileSeriesRepository;
pub use traits::DailySeriesRepository;
