use crate::domain::dimensions::Dimensions;
use crate::domain::image::Image as DomainImage;
use crate::infrastructure::error::InfrastructureError;
use image::ImageFormat as InnerImageFormat; // imageクレートのImageFormatをインポート

// このトレイトは、ドメインの型を受け取り、ドメインの型または結果を返す
#[cfg_attr(test, mockall::automock)]
pub trait ImageResizer {
    fn resize_image(
        &self,
        image_bytes: Vec<u8>,
        input_format_opt: Option<InnerImageFormat>,
        dimensions: &Dimensions,
        output_format: InnerImageFormat,
    ) -> Result<DomainImage, InfrastructureError>;
}
