//! # forum-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    build_reply_tree, CategoryService, CounterService, IdentityService, InteractionService,
    ModerationService, PostService, ReplyService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
