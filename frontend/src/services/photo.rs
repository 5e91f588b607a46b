use async_trait::async_trait;
use backend::{PhotoDecodeError, PhotoDecoder};
use gloo::file::futures::read_as_data_url;
use gloo::file::File;

/// Reads a chosen image file into a base64 data URL with a `FileReader`
pub struct FilePhotoDecoder;

#[async_trait(?Send)]
impl PhotoDecoder for FilePhotoDecoder {
    type Photo = web_sys::File;

    async fn decode(&self, photo: web_sys::File) -> Result<String, PhotoDecodeError> {
        let file = File::from(photo);
        if file.size() == 0 {
            return Err(PhotoDecodeError::Empty);
        }

        log::debug!("Reading photo '{}' ({} bytes)", file.name(), file.size());
        read_as_data_url(&file)
            .await
            .map_err(|e| PhotoDecodeError::Read(e.to_string()))
    }
}
