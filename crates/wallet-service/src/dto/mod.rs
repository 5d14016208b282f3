//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreditRequest, HistoryQuery, LinkChatRequest, LoginRequest, PendingIntentRequest,
    ProofRequest, RechargeRequest, RegisterRequest,
};

pub use responses::{
    BalanceResponse, ChatBindingResponse, CreditResponse, HealthChecks, HealthResponse,
    LoginResponse, PendingIntentResponse, ReadinessResponse, RechargeResponse,
    ReconciliationResponse, TransactionResponse, UserResponse,
};
