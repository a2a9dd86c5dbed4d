//! File-backed blob persistence for Tabula.
//!
//! This crate provides the storage helpers the sheet codec builds on:
//!
//! - **Path joining** with `/` and collapsed doubled separators
//! - **Base64 blobs** with optional data-URI prefixes
//! - **Overwrite writes** that replace any existing file
//! - **Name generation** from an injected random source
//! - **Text fetch** over blocking HTTP GET
//!
//! Every operation has a `try_` form returning [`BlobError`] and a lenient form
//! that logs the failure and returns `false`, an empty string, or `None`.
//!
//! # Example
//!
//! ```ignore
//! use tabula_store::{join_path, read_to_string, write_base64};
//!
//! let path = join_path(["/srv/uploads/", "/note.txt"]);
//! assert!(write_base64(path.as_ref(), "data:text/plain;base64,aGVsbG8="));
//! assert_eq!(read_to_string(path.as_ref()), "hello");
//! ```

mod blob;
mod encoding;
mod fetch;
mod generate;
mod path;

pub use blob::{
    delete, read_bytes, read_to_string, save_base64, try_delete, try_read_bytes,
    try_read_to_string, try_save_base64, try_upload_file, try_write_base64, try_write_bytes,
    upload_file, write_base64, write_bytes,
};
pub use encoding::{
    decode_base64, decode_data_uri, encode_base64, encode_data_uri, strip_data_uri_prefix,
};
pub use fetch::fetch_text;
pub use generate::{BASE62_ALPHABET, camel_case_name, random_token, randomized_file_name};
pub use path::{PathResolver, RootedResolver, join_path};
pub use tabula_model::BlobError;

/// Result type alias for blob operations.
pub type Result<T> = std::result::Result<T, BlobError>;
