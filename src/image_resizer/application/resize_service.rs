use std::path::Path;
use std::sync::Arc;

use super::error::ApplicationError;
use image::ImageFormat as InnerImageFormat;
use tracing::info;

use crate::domain::dimensions::Dimensions;
use crate::domain::image::Image as DomainImage;
use crate::domain::image_resizer_trait::ImageResizer;
// file_storageもインフラ層なので、トレイト経由でDIするのが望ましいが、今回は直接使う
use crate::infrastructure::file_storage::LocalFileStorage;

pub struct ResizeService {
    image_resizer: Arc<dyn ImageResizer + Send + Sync>, // トレイトオブジェクトとして保持
}

impl ResizeService {
    pub fn new(image_resizer: Arc<dyn ImageResizer + Send + Sync>) -> Self {
        Self { image_resizer }
    }

    // 出力フォーマットは出力パスの拡張子から決定する
    fn map_extension_to_format(&self, path: &str) -> InnerImageFormat {
        let extension = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("jpeg") | Some("jpg") => InnerImageFormat::Jpeg,
            Some("bmp") => InnerImageFormat::Bmp,
            Some("gif") => InnerImageFormat::Gif,
            _ => InnerImageFormat::Png, // Default to PNG
        }
    }

    pub async fn resize_to_thumbnail(
        &self,
        input_path: &str,
        output_path: &str,
        dimensions: &Dimensions,
    ) -> Result<DomainImage, ApplicationError> {
        info!(
            "ResizeService: resize_to_thumbnail called for {} -> {}",
            input_path, output_path
        );

        let file_storage = LocalFileStorage::new();
        let image_bytes = file_storage.read_image_impl(input_path).await?;

        let output_format = self.map_extension_to_format(output_path);

        let resized = self.image_resizer.resize_image(
            image_bytes,
            None, // image_bytes からフォーマットを推測させる
            dimensions,
            output_format,
        )?;

        file_storage
            .save_image_impl(output_path, &resized.data)
            .await?;

        Ok(resized)
    }
}
