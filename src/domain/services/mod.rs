//! # Domain Services
//!
//! エンティティに属さないビジネスルール

pub mod extension_filter;
