use table_cells::detect;
use table_cells::preprocess::PreprocessParams;
use table_cells::TableGridParams;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: detect_table <image_path>");
        return Ok(());
    };

    let img = detect::load_image(std::path::Path::new(&path))?.to_luma8();
    let found = detect::detect_table(
        &img,
        &PreprocessParams::default(),
        TableGridParams::default(),
    )?;
    match found.result.reason {
        None => {
            for cell in &found.result.cells {
                println!(
                    "rows {}..{} cols {}..{}: y {}..{} x {}..{}",
                    cell.row_start,
                    cell.row_end,
                    cell.col_start,
                    cell.col_end,
                    cell.top,
                    cell.bottom,
                    cell.left,
                    cell.right
                );
            }
        }
        Some(reason) => println!("no cells: {reason}"),
    }

    Ok(())
}

fn init_logging() {
    // Either call fails only if a logger is already installed.
    #[cfg(feature = "tracing")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .try_init();
    }
}
