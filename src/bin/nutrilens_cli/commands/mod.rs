// ABOUTME: Re-exports command modules for nutrilens-cli
// ABOUTME: Provides access to the advisory commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

pub mod advise;
