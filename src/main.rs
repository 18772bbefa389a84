//! Preview utility: renders each standard layout to a PNG, the same
//! rasterization the quotation pages embed.

use dripsketch::init_logging;
use dripsketch_designer::{render_preview, templates};
use dripsketch_core::constants;

fn main() -> anyhow::Result<()> {
    init_logging()?;

    tracing::info!(
        version = dripsketch::VERSION,
        built = dripsketch::BUILD_DATE,
        "rendering standard layout previews"
    );

    for layout in templates::standard_layouts() {
        let image = render_preview(
            &layout.shapes,
            constants::PREVIEW_WIDTH as u32,
            constants::PREVIEW_HEIGHT as u32,
        );
        let path = format!("preview_{}.png", layout.key);
        image.save(&path)?;
        tracing::info!(
            key = %layout.key,
            shapes = layout.shapes.len(),
            %path,
            "wrote preview"
        );
    }

    Ok(())
}
