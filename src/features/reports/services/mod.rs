mod report_workflow;

pub use report_workflow::ReportWorkflow;
