use super::error::InfrastructureError;
use tokio::fs;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;

// ローカルファイルシステムへの読み書き。読めない入力はDecodeError、
// 書けない出力はEncodeErrorとして上位へ伝える
pub struct LocalFileStorage;

impl LocalFileStorage {
    pub fn new() -> Self {
        Self
    }

    pub async fn read_image_impl(&self, path: &str) -> Result<Vec<u8>, InfrastructureError> {
        let data = fs::read(path)
            .await
            .map_err(|e| InfrastructureError::DecodeError(format!("failed to read {}: {}", path, e)))?;
        debug!("read {} bytes from {}", data.len(), path);
        Ok(data)
    }

    pub async fn save_image_impl(&self, path: &str, data: &[u8]) -> Result<(), InfrastructureError> {
        let mut file = File::create(path)
            .await
            .map_err(|e| InfrastructureError::EncodeError(format!("failed to create {}: {}", path, e)))?;
        file.write_all(data)
            .await
            .map_err(|e| InfrastructureError::EncodeError(format!("failed to write {}: {}", path, e)))?;
        debug!("wrote {} bytes to {}", data.len(), path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_image_missing_file_is_decode_error() {
        let storage = LocalFileStorage::new();
        let result = storage.read_image_impl("definitely/not/a/real/path.png").await;

        match result {
            Err(InfrastructureError::DecodeError(_)) => {}
            other => panic!("Expected DecodeError for missing input, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_save_image_to_missing_directory_is_encode_error() {
        let storage = LocalFileStorage::new();
        let result = storage
            .save_image_impl("definitely/not/a/real/dir/out.png", &[0u8; 4])
            .await;

        match result {
            Err(InfrastructureError::EncodeError(_)) => {}
            other => panic!("Expected EncodeError for unwritable output, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_save_then_read_round_trip() {
        let storage = LocalFileStorage::new();
        let path = std::env::temp_dir().join("image_resizer_storage_round_trip.bin");
        let path = path.to_str().unwrap().to_string();

        storage.save_image_impl(&path, &[7, 8, 9]).await.unwrap();
        let data = storage.read_image_impl(&path).await.unwrap();
        assert_eq!(data, vec![7, 8, 9]);

        let _ = tokio::fs::remove_file(&path).await;
    }
}
