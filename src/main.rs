//! Generate the ACT-R grid-search batch scripts for the Simon-task
//! parameter sweep: one `.lisp` file per (alpha, lf) point.
//
//  Compile & run:  `cargo run --release`

use std::path::PathBuf;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use gridgen::generator;
use gridgen::grid::ParamGrid;

#[derive(Parser)]
struct Cli {
    /// Directory the generated scripts are written into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    let grid = ParamGrid::default();

    // Progress bar counts (alpha, lf) pairs.
    let bar = ProgressBar::new(grid.len() as u64);
    bar.set_style(ProgressStyle::with_template(
        " {bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}]",
    )?);

    let mut written = 0;
    for point in grid.points() {
        generator::write_script(&args.out_dir, &point)?;
        written += 1;
        bar.inc(1);
    }
    bar.finish();

    println!("Generated {} scripts in {}", written, args.out_dir.display());
    Ok(())
}
