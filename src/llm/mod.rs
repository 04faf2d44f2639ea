mod client;
mod types;

pub use client::{GeminiClient, TextGenerator};
pub use types::{
    ApiErrorBody, ApiErrorDetail, Candidate, CandidateContent, Content, GenerateRequest,
    GenerateResponse, Part,
};
