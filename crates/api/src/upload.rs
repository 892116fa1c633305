//! Disk storage for uploaded project PDFs.
//!
//! Files land in the configured upload directory under a collision-resistant
//! name and are served back verbatim under [`PUBLIC_PREFIX`]. Only the
//! generated name is stored in the database; the original filename is
//! discarded.

use std::path::Path;

use rand::Rng;

/// The only content type accepted for project attachments.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// URL prefix uploaded files are served under.
pub const PUBLIC_PREFIX: &str = "/uploads";

/// Generate a stored filename: epoch milliseconds plus a random
/// nine-digit discriminator, so concurrent uploads in the same
/// millisecond cannot collide in practice.
fn stored_filename() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let discriminator: u32 = rand::rng().random_range(0..1_000_000_000);
    format!("{millis}-{discriminator:09}.pdf")
}

/// Write PDF bytes under `dir`, returning the public URL path for the row.
///
/// Creates the directory on first use. The write completes before the caller
/// proceeds to the database insert.
pub async fn store_pdf(dir: &Path, data: &[u8]) -> std::io::Result<String> {
    tokio::fs::create_dir_all(dir).await?;

    let filename = stored_filename();
    tokio::fs::write(dir.join(&filename), data).await?;

    Ok(format!("{PUBLIC_PREFIX}/{filename}"))
}
