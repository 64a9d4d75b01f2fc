//! Decryption of password-protected Office workbooks.
//!
//! Encrypted `.xlsx` files are OLE compound documents wrapping an ECMA-376
//! `EncryptedPackage` stream. A successful decrypt yields the plain OOXML
//! ZIP package, which the workbook reader then opens like any other upload.

use tracing::{debug, info, warn};

use crate::error::DecryptionError;

/// Signature of an OLE compound document (encrypted OOXML and legacy `.xls`).
pub const OLE_SIGNATURE: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// Local file header signature that starts every OOXML package.
pub const ZIP_SIGNATURE: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// Result type for decryption operations.
pub type Result<T> = std::result::Result<T, DecryptionError>;

/// Trait for workbook decryptors.
pub trait Decryptor {
    /// Decrypt `bytes` with `password`, returning the plain package bytes.
    fn decrypt(&self, bytes: Vec<u8>, password: &str) -> Result<Vec<u8>>;
}

/// ECMA-376 (Agile and Standard) decryptor backed by `office-crypto`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfficeDecryptor;

impl OfficeDecryptor {
    pub fn new() -> Self {
        Self
    }
}

impl Decryptor for OfficeDecryptor {
    fn decrypt(&self, bytes: Vec<u8>, password: &str) -> Result<Vec<u8>> {
        if is_zip_package(&bytes) {
            warn!("Password supplied but the file is not encrypted; using it as-is");
            return Ok(bytes);
        }

        if !is_ole_container(&bytes) {
            return Err(DecryptionError::Container(
                "file is neither an encrypted Office document nor a spreadsheet package"
                    .to_string(),
            ));
        }

        debug!("Decrypting {} byte OLE container", bytes.len());

        let decrypted = office_crypto::decrypt_from_bytes(bytes, password)
            .map_err(|e| DecryptionError::Container(format!("{:?}", e)))?;

        // A wrong key still "decrypts" to noise; only a ZIP package counts.
        if !is_zip_package(&decrypted) {
            return Err(DecryptionError::IncorrectPassword);
        }

        info!("Decrypted workbook ({} bytes)", decrypted.len());
        Ok(decrypted)
    }
}

/// Decrypt `bytes` when a non-empty password is given; otherwise return them unchanged.
pub fn decrypt(bytes: Vec<u8>, password: Option<&str>) -> Result<Vec<u8>> {
    match password {
        Some(password) if !password.is_empty() => OfficeDecryptor::new().decrypt(bytes, password),
        _ => Ok(bytes),
    }
}

/// Check whether the bytes look like an encrypted OOXML file.
///
/// Legacy `.xls` workbooks share the OLE signature, so this is a container
/// check rather than proof of encryption.
pub fn is_encrypted(bytes: &[u8]) -> bool {
    is_ole_container(bytes)
}

fn is_ole_container(bytes: &[u8]) -> bool {
    bytes.starts_with(&OLE_SIGNATURE)
}

fn is_zip_package(bytes: &[u8]) -> bool {
    bytes.starts_with(&ZIP_SIGNATURE)
}
