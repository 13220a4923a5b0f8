use crate::core::explorer::{Explorer, ExplorerParams};
use crate::core::file_io::FilePrefix;

/// Render one full frame from a parameter file and write it to disk as a
/// PNG, next to a JSON echo of the parameters that produced it.
pub fn render_frame(
    params: &ExplorerParams,
    file_prefix: FilePrefix,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = std::time::Instant::now();
    let explorer = Explorer::new(params.clone());
    log::info!(
        "Rendered {}x{} frame in {:?}",
        params.view.resolution[0],
        params.view.resolution[1],
        start.elapsed()
    );

    explorer.render_to_file(&file_prefix);
    Ok(())
}
