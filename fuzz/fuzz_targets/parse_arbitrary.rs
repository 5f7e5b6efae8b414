// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for front end crash safety.
//!
//! Feeds arbitrary bytes through decoding, lexing, parsing, semantic
//! analysis and XML output. Any input must produce either an XML document
//! or a single error with a location inside the source; nothing may panic.
//!
//! Seed `fuzz/corpus/parse_arbitrary/` with the `main.sol` files from
//! `test-package-compiler/cases/`.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sol25_core::compile::decode;

fuzz_target!(|data: &[u8]| {
    let Ok(source) = decode(data) else {
        return;
    };
    match sol25_core::compile(source) {
        Ok(xml) => assert!(xml.ends_with("</program>\n")),
        Err(error) => assert!(error.span().start() as usize <= source.len()),
    }
});
