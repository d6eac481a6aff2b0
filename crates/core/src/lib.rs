pub mod period;
pub mod report;
pub mod summarize;
pub mod table;

pub use period::Period;
pub use report::{BrowserShare, DailyTraffic, PageTraffic};
pub use summarize::{OTHERS_LABEL, summarize_top_browsers};
pub use table::{ColumnHeader, ResultTable};
