mod report;

pub use report::{Report, ReportCategory, ReportDraft};
