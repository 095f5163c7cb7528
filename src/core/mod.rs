pub mod document;
pub mod extract;
pub mod names;
pub mod service;
pub mod year;

pub use crate::domain::model::{Category, ConstructorStanding, DriverStanding, RaceResult, ResolvedYear};
pub use crate::domain::ports::{Diagnostic, DiagnosticSink, PageSource};
pub use crate::utils::error::Result;
