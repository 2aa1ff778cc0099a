// Copyright 2025 the Globs Authors
// SPDX-License-Identifier: Apache-2.0

//! Globs: scripted editing demo

fn main() -> anyhow::Result<()> {
    globs::run()
}
