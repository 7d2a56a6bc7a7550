// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Helper utilities for maratron-cli
// ABOUTME: Re-exports display helpers

pub mod display;
