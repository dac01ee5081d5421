use cropgrid::{relocate_files, CropGridError, DatasetError};
use std::env;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() -> Result<(), CropGridError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = env::args().skip(1);
    let Some(source) = args.next() else {
        eprintln!("usage: import_dataset <downloaded-dataset-dir> [destination-dir]");
        process::exit(2);
    };
    let destination = match args.next() {
        Some(dir) => PathBuf::from(dir),
        None => env::current_dir().map_err(DatasetError::Destination)?,
    };

    let moved = relocate_files(Path::new(&source), &destination).await?;
    println!(
        "Success! {} files are now in {}.",
        moved.len(),
        destination.display()
    );

    Ok(())
}
