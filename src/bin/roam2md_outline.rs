use std::path::PathBuf;

use clap::Parser;

use roam2md::Mode;

#[derive(Parser)]
#[command(name = "roam2md-outline")]
#[command(about = "Convert a Roam Research JSON export to outline-flavored Markdown")]
struct Cli {
    /// Path to the Roam Research JSON file
    input_file: PathBuf,

    /// Directory to store the converted Markdown files
    output_dir: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match roam2md::export(&cli.input_file, &cli.output_dir, Mode::Outline) {
        Ok(written) => {
            println!("Wrote {} pages to {}", written, cli.output_dir.display());
        }
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    }
}
