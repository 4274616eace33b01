//! Citizen report feature.
//!
//! All report writes go through [`ReportWorkflow`]: category validation,
//! email deliverability and postal code checks against external services,
//! then the transactional reporter + report write.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/reports` | Submit report (workflow) |
//! | PUT | `/reports` | Update report (workflow) |
//! | GET | `/reports` | List reports |
//! | GET | `/reports/{id}` | Get report by id |
//! | DELETE | `/reports/{id}` | Delete report |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;

pub use services::ReportWorkflow;
pub use stores::{PgReportStore, ReportStore};
