//! Request validation run by the HTTP handlers before the store is called.
//!
//! The store trusts its input apart from id existence; everything a client can get wrong
//! about the shape of a request is rejected here with [`DotnetRestError::Validation`].

use crate::dotnet_rest_actor::DotnetRestError;
use crate::model::{DotnetRestDto, GetDotnetRestsRequest};
use resource_framework::page::MAX_PAGE_SIZE;

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationService;

impl ValidationService {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_create(&self, request: &DotnetRestDto) -> Result<(), DotnetRestError> {
        Self::require_name(request)
    }

    pub fn validate_update(&self, request: &DotnetRestDto) -> Result<(), DotnetRestError> {
        if request.id().is_none() {
            return Err(DotnetRestError::Validation(
                "Id is required for update".into(),
            ));
        }
        Self::require_name(request)
    }

    pub fn validate_pagination(
        &self,
        request: &GetDotnetRestsRequest,
    ) -> Result<(), DotnetRestError> {
        if request.start_page < 1 {
            return Err(DotnetRestError::Validation(format!(
                "startPage must be at least 1, got {}",
                request.start_page
            )));
        }
        if request.page_size < 1 || request.page_size > MAX_PAGE_SIZE as i32 {
            return Err(DotnetRestError::Validation(format!(
                "pageSize must be between 1 and {MAX_PAGE_SIZE}, got {}",
                request.page_size
            )));
        }
        Ok(())
    }

    /// Rejects blank identifiers; `field` names the offending input in the message.
    pub fn validate_id(&self, id: &str, field: &str) -> Result<(), DotnetRestError> {
        if id.trim().is_empty() {
            return Err(DotnetRestError::Validation(format!("{field} is required")));
        }
        Ok(())
    }

    fn require_name(request: &DotnetRestDto) -> Result<(), DotnetRestError> {
        if request.name.trim().is_empty() {
            return Err(DotnetRestError::Validation("Name is required".into()));
        }
        Ok(())
    }
}
