mod reporter_dto;

pub use reporter_dto::{CreateReporterDto, ReporterResponseDto, UpdateReporterDto};
