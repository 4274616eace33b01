//! Administrator feature.
//!
//! CRUD plus a credential check. Passwords are stored as salted SHA-256
//! hashes and administrator names are kept unique by a database index.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/administrators` | Create administrator |
//! | PUT | `/administrators` | Update administrator |
//! | GET | `/administrators` | List administrators |
//! | GET | `/administrators/{id}` | Get administrator by id |
//! | DELETE | `/administrators/{id}` | Delete administrator |
//! | POST | `/administrators/login` | Credential check |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::AdminService;
