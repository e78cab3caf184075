// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod email_api_test;
pub mod session_test;
pub mod upstream_sources_test;
