//! Reporter identity feature.
//!
//! A reporter is the citizen identity (name, email, national id, postal code)
//! behind a report. Reporters are created as a side effect of report
//! submission, or independently through this CRUD surface.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/userreports` | Create reporter (validated path) |
//! | PUT | `/userreports` | Update reporter (validated path) |
//! | GET | `/userreports` | List reporters |
//! | GET | `/userreports/{id}` | Get reporter by id |
//! | DELETE | `/userreports/{id}` | Delete reporter |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;

pub use services::ReporterService;
pub use stores::{PgReporterStore, ReporterStore};
