mod application;
mod domain;
mod infrastructure;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::application::resize_service::ResizeService;
use crate::domain::dimensions::Dimensions;
use crate::infrastructure::image_resizer::DefaultImageResizer;

// デモ用の固定パス。任意のパスはResizeService側で受け付ける
const INPUT_PATH: &str = "ghostRaw.png";
const OUTPUT_PATH: &str = "ghost.png";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let image_resizer = Arc::new(DefaultImageResizer::new());
    let service = ResizeService::new(image_resizer);

    let resized = service
        .resize_to_thumbnail(INPUT_PATH, OUTPUT_PATH, &Dimensions::THUMBNAIL)
        .await?;

    info!(
        "resized {} -> {} ({}x{})",
        INPUT_PATH, OUTPUT_PATH, resized.width, resized.height
    );
    Ok(())
}
