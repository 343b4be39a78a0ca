/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Smallest amount that can be withdrawn, in BRL
pub const MIN_WITHDRAWAL_AMOUNT: f64 = 10.0;

/// Longest ad campaign, in days
pub const MAX_AD_DURATION_DAYS: i64 = 90;

// =============================================================================
// FILE UPLOADS
// =============================================================================

/// Folder used when an upload does not name one
pub const DEFAULT_UPLOAD_FOLDER: &str = "uploads";

/// Maximum file size in bytes (10MB)
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Allowed MIME types for file uploads
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "video/mp4",
    "application/pdf",
];
