use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfrastructureError {
    // 入力ファイルの読み込み失敗もここに含める (読めない入力 = デコード不能な入力)
    #[error("Image decoding failed: {0}")]
    DecodeError(String),

    // 出力ファイルの書き込み失敗もここに含める
    #[error("Image encoding failed: {0}")]
    EncodeError(String),
}
