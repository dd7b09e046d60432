use anyhow::Result;
use clap::Parser;
use launcher_icon_gen::icon_gen;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "launcher-icon-gen",
    about = "Generate the Android launcher icons (square and round) for every mipmap density"
)]
struct Args {
    /// Project root; icons are written under <DIR>/app/src/main/res.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(&args.output)?;

    println!("Icons generated!");
    Ok(())
}
