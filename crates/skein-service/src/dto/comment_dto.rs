//! Comment DTOs.

use serde::{Deserialize, Serialize};
use skein_core::RecordId;

/// Request to post a comment. The author is the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub product_id: RecordId,
    pub text: String,
}

/// Request to edit a comment's text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCommentRequest {
    pub text: String,
}

/// Query string of `GET /comments`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CommentListQuery {
    pub product_id: Option<RecordId>,
}
