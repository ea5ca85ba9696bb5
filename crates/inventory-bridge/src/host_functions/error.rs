//! Error sanitization for channel responses.
//!
//! Maps inventory failures to the stable `APP_LIST_ERROR` code. The platform
//! diagnostic travels in `detail`; the message is fixed.

use app_inventory_types::{error_codes, ChannelError, APP_LIST_ERROR_MESSAGE};

/// Convert an inventory failure into the error returned to callers.
pub fn sanitize_inventory_error(err: &app_inventory_core::Error) -> ChannelError {
    ChannelError {
        code: error_codes::APP_LIST_ERROR.to_string(),
        message: APP_LIST_ERROR_MESSAGE.to_string(),
        detail: Some(err.detail()),
    }
}
