// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Properties of the star registry that must hold for arbitrary command
//! sequences.

mod ownership;
