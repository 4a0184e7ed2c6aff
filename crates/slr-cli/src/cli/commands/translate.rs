//! `slr translate <url>...` – print the launch URI for each URL.

use anyhow::Result;
use std::io::Write;

pub fn run_translate(urls: &[String], out: &mut impl Write) -> Result<()> {
    for url in urls {
        match slr_core::translate(url) {
            Some(uri) => writeln!(out, "{uri}")?,
            None => writeln!(out, "-")?,
        }
    }
    Ok(())
}
