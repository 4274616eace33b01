mod reporter;

pub use reporter::{NewReporter, Reporter};
