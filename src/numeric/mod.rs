// ============================================================================
// Numeric Module
// Exact-decimal scalars for vector arithmetic
// ============================================================================
//
// This module provides:
// - Scalar: the exact-decimal coordinate type (rust_decimal, 28 digits)
// - IntoScalar: conversion from integers, floats, decimals and strings
// - checked_sqrt / checked_acos: the two operations with no exact closed form
// - NumericError: Error types for conversion and arithmetic
//
// Design principles:
// - Coordinates never pass through binary floating point
// - All arithmetic returns Result (no panics)
// - Floating point is used only to seed the square root and for arccos

mod errors;
mod scalar;

pub use errors::{NumericError, NumericResult};
pub use scalar::{checked_acos, checked_sqrt, IntoScalar, Scalar};
