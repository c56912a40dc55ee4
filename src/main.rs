use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use std::path::Path;
use update_version::{arguments::Arguments, bump::BumpFlags, releases, store};

fn main() -> Result<()> {
    let args = Arguments::parse();
    pretty_env_logger::env_logger::builder()
        .filter_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .format_timestamp(None)
        .init();

    if args.list_versions {
        println!("{}", releases::listing());
        return Ok(());
    }

    let path: &Path = args.path.as_ref();

    if args.print_version {
        let current = store::read_current(path, args.dashed)?;
        println!("{current}");
        return Ok(());
    }

    let flags = BumpFlags {
        major: args.major,
        minor: args.minor,
        patch: args.patch,
        extra: args.extra,
    };
    store::update(path, flags, args.dashed, &args.replace, args.dry_run)?;

    Ok(())
}
