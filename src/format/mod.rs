// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mmdcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram format parsing.
//!
//! Currently this module covers the structural subset of Mermaid flowcharts embedded in
//! Markdown fences.

pub mod mermaid;
