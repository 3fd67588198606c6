use axum::extract::{FromRequestParts, Path, Query};

use crate::error::AppError;

/// `Path` whose rejection is rendered as an `AppError` JSON body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// `Query` whose rejection is rendered as an `AppError` JSON body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
