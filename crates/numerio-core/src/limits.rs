// SPDX-FileCopyrightText: 2026 Numerio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contract policy bounds shared by the tools and the config defaults.

/// Largest n the factorial tool accepts by default. 170! is the largest
/// factorial representable as a double-precision float, which is where
/// the original contract drew the line; a fixed policy value, never
/// re-derived.
pub const FACTORIAL_MAX: u32 = 170;

/// Largest term count the Fibonacci tool accepts by default.
pub const FIBONACCI_MAX: u32 = 100;

/// Hard ceiling for a configured `fibonacci_max`: 185 is the largest
/// term count for which every term and the running sum fit u128, the
/// widest exact integer the generator computes with (the sum of the
/// first 185 terms is fib(186) - 1; one more term pushes the sum past
/// u128::MAX).
pub const FIBONACCI_HARD_MAX: u32 = 185;
