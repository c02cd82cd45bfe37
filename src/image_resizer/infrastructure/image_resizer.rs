use crate::domain::dimensions::Dimensions;
use crate::domain::image::Image as DomainImage;
use crate::domain::image_resizer_trait::ImageResizer;
use crate::infrastructure::error::InfrastructureError;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat as InnerImageFormat};
use std::io::Cursor;
use tracing::debug;

// ドメイン層で定義する ImageResizer トレイトの具体的な実装
pub struct DefaultImageResizer;

impl DefaultImageResizer {
    pub fn new() -> Self {
        Self
    }
}

impl ImageResizer for DefaultImageResizer {
    // 入力はバイト列、出力はドメインの型とする
    fn resize_image(
        &self,
        image_bytes: Vec<u8>,
        input_format_opt: Option<InnerImageFormat>,
        dimensions: &Dimensions,
        output_format: InnerImageFormat,
    ) -> Result<DomainImage, InfrastructureError> {
        let reader = match input_format_opt {
            Some(format) => image::io::Reader::with_format(Cursor::new(image_bytes), format),
            None => image::io::Reader::new(Cursor::new(image_bytes))
                .with_guessed_format()
                .map_err(|e| InfrastructureError::DecodeError(e.to_string()))?,
        };
        let img = reader
            .decode()
            .map_err(|e| InfrastructureError::DecodeError(e.to_string()))?;

        debug!(
            "resizing {}x{} -> {}x{}",
            img.width(),
            img.height(),
            dimensions.width,
            dimensions.height
        );

        // アスペクト比は維持しない。Lanczos3で縮小・拡大の両方に対応
        let resized = img.resize_exact(dimensions.width, dimensions.height, FilterType::Lanczos3);

        // JPEGエンコーダはアルファを受け付けないため、RGB8に変換してから書き込む
        let resized = match output_format {
            InnerImageFormat::Jpeg => DynamicImage::ImageRgb8(resized.to_rgb8()),
            _ => resized,
        };

        let mut buffer = Cursor::new(Vec::new());
        resized
            .write_to(&mut buffer, output_format)
            .map_err(|e| InfrastructureError::EncodeError(e.to_string()))?;

        Ok(DomainImage::new(
            buffer.into_inner(),
            dimensions.width,
            dimensions.height,
            output_format,
        ))
    }
}
