mod file_input_util;

use anyhow::bail;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// A .class file, or a .jar/.zip archive of them
    input: PathBuf,
}

fn run(cli: Cli) -> Result<()> {
    let mut error_count = 0;
    for file in file_input_util::class_files(&cli.input)? {
        match jdis::dump(&file.data) {
            Ok((name, listing)) => {
                println!("=== {} ===", name);
                print!("{}", listing);
            }
            Err(err) => {
                eprintln!("Parse error in {}: {}", file.name, err);
                error_count += 1;
            }
        }
    }

    if error_count > 0 {
        bail!("Finished with {} errors", error_count);
    }
    Ok(())
}

fn real_main() -> i32 {
    if let Err(err) = run(Cli::parse()) {
        println!("Error: {:?}", err);
        1
    } else {
        0
    }
}

fn main() {
    std::process::exit(real_main());
}
