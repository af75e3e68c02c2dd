//! Application-wide constants.

/// Default lifetime of a presigned download URL, in minutes.
pub const DEFAULT_PRESIGN_EXPIRY_MINUTES: u64 = 60;

/// Maximum presign lifetime accepted from a request, in minutes.
/// SigV4 presigned URLs cannot outlive 7 days.
pub const MAX_PRESIGN_EXPIRY_MINUTES: u64 = 7 * 24 * 60;

/// Default cap on uploaded payload size, in bytes.
pub const DEFAULT_MAX_UPLOAD_SIZE_BYTES: usize = 100 * 1024 * 1024;
