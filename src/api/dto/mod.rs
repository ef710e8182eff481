//! Serialization shapes for the operational API.

pub mod health;
