mod admin_dto;

pub use admin_dto::{
    AdministratorResponseDto, CreateAdministratorDto, LoginDto, UpdateAdministratorDto,
};
