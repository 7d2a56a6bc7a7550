// ABOUTME: Algorithm module for running performance models
// ABOUTME: Hosts Jack Daniels' VDOT formulas and their inversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Algorithm Module
//!
//! Closed-form and root-finding implementations of the Daniels/Gilbert
//! oxygen-cost and drop-dead models. No lookup tables: the published pace
//! tables are reproduced from the formulas and checked as golden data in tests.

pub mod vdot;
