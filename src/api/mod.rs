//! HTTP layer: request building, auth header attachment, response decoding.

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{
    CreateEquipmentRequest, EquipmentQuery, EquipmentRecord, EquipmentStats, EquipmentType,
    ErrorBody, LoginResponse, MessageResponse, Page, Pagination, SerialValidationError,
    TokenPair, TypeListResponse, TypeStatistic, UpdateEquipmentRequest, UserProfile,
};
