// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Courier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Courier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Courier CLI entrypoint.
//!
//! By default this runs the interactive submission form against the built-in
//! demo manifest; pass a manifest path to load your own form content.
//!
//! Use `fetch <url> <path>` to download a transcript file and exit.

use std::error::Error;
use std::path::Path;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<manifest.json>]\n  {program} [--manifest <manifest.json>]\n  {program} fetch <url> <path>\n\nWith no manifest the built-in demo form is used.\n\nfetch downloads one transcript file to <path> and exits; it does not\nstart the form."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    manifest: Option<String>,
    fetch: Option<FetchArgs>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FetchArgs {
    url: String,
    dest: String,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "fetch" => {
                if options.fetch.is_some() || options.manifest.is_some() {
                    return Err(());
                }
                let url = args.next().ok_or(())?;
                let dest = args.next().ok_or(())?;
                options.fetch = Some(FetchArgs { url, dest });
            }
            "--manifest" => {
                if options.manifest.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.manifest = Some(path);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.manifest.is_some() {
                    return Err(());
                }
                options.manifest = Some(arg);
            }
        }
    }

    if options.fetch.is_some() && options.manifest.is_some() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "courier".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if let Some(fetch) = options.fetch {
            let bytes = courier::fetch::fetch_to_file(&fetch.url, Path::new(&fetch.dest))?;
            println!("courier: saved {bytes} bytes from {} to {}", fetch.url, fetch.dest);
            return Ok(());
        }

        let manifest = match options.manifest {
            Some(path) => courier::store::Manifest::load(path)?,
            None => courier::store::Manifest::demo(),
        };

        courier::tui::run(&manifest)?;
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("courier: {err}");
        std::process::exit(1);
    }
}
