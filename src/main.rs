use cropgrid::{records_to_frame, write_csv, CropGrid, CropGridError, GridSpec};
use std::env;
use std::path::Path;

const DEFAULT_OUTPUT: &str = "algeria_crop_features.csv";

#[tokio::main]
async fn main() -> Result<(), CropGridError> {
    // Progress is logged at info level; set RUST_LOG to override.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let output = env::args().nth(1).unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    let spec = GridSpec::default();

    let client = CropGrid::builder().build()?;
    println!(
        "Sampling {} grid points across Northern Algeria, this takes a while...",
        spec.len()
    );

    let records = client.sample_grid().spec(spec).call().await;

    let mut frame = records_to_frame(&records)?;
    println!("\nROWS: {}", frame.height());
    println!("{}", frame.head(Some(5)));

    write_csv(&mut frame, Path::new(&output))?;
    println!("\nSaved: {output}");

    Ok(())
}
