pub(crate) mod session;
pub use session::{SessionError, SleepSession};

pub(crate) mod history;
pub use history::{ROLLING_WINDOW, SleepHistory, date_floor};

pub(crate) mod season;
pub use season::Season;

pub(crate) mod summary;
pub use summary::{
    ArchitectureAverages, CorrelationMatrix, SeasonStat, SeasonalStats, SleepSummary,
    WEEKDAY_LABELS, WeekdayAverages,
};

pub mod helpers;
