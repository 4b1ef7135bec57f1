// ABOUTME: Route module organization for NutriLens HTTP endpoints
// ABOUTME: Health and nutrition routes plus the JSON extractor that maps rejections to AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

//! HTTP routes
//!
//! Each domain module contains route definitions and thin handlers that
//! delegate to [`crate::service::AdvisoryService`].

/// Health and readiness routes
pub mod health;
/// Advisory endpoints under `/api/nutrition`
pub mod nutrition;

pub use health::HealthRoutes;
pub use nutrition::NutritionRoutes;

use async_trait::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::Json;
use nutrilens_core::constants::network::REQUEST_ID_HEADER;
use nutrilens_core::errors::{AppError, ErrorCode};
use serde::de::DeserializeOwned;

/// JSON body extractor whose rejections render as the standard error body
///
/// Unparsable bodies and wrong content types are `400`, well-formed bodies
/// with missing or mistyped fields are `422`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let request_id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                let error = rejection_to_error(&rejection);
                Err(match request_id {
                    Some(id) => error.with_request_id(id),
                    None => error,
                })
            }
        }
    }
}

fn rejection_to_error(rejection: &JsonRejection) -> AppError {
    let message = rejection.body_text();
    let code = match rejection {
        JsonRejection::JsonDataError(_) if message.contains("missing field") => {
            ErrorCode::MissingRequiredField
        }
        JsonRejection::JsonDataError(_) => ErrorCode::ValidationFailed,
        JsonRejection::JsonSyntaxError(_) | JsonRejection::MissingJsonContentType(_) => {
            ErrorCode::InvalidFormat
        }
        _ if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => ErrorCode::PayloadTooLarge,
        _ => ErrorCode::InvalidInput,
    };
    AppError::new(code, message)
}
