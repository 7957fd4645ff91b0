//! Segstrip Animation System
//!
//! Spring physics for the selection indicator.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Interruptible**: retargeting an in-flight spring inherits velocity,
//!   so a new activation redirects the animation instead of queueing
//!   (last-write-wins)

pub mod spring;

pub use spring::{Spring, SpringConfig};
