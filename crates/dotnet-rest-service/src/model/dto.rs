//! Request and response bodies as they appear on the wire.
//!
//! Field names are camelCase. The same types are used by the HTTP handlers, the in-process
//! client and the typed HTTP client, so both sides of the API agree by construction.

use super::{DotnetRest, DotnetRestCreate, DotnetRestUpdate};
use resource_framework::page::{Page, PageRequest, DEFAULT_PAGE_SIZE, DEFAULT_START_PAGE};
use serde::{Deserialize, Serialize};

/// An entry as sent and received by clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DotnetRestDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
}

impl DotnetRestDto {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
        }
    }

    /// The id if it is present and non-empty.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

impl From<DotnetRest> for DotnetRestDto {
    fn from(entity: DotnetRest) -> Self {
        Self {
            id: Some(entity.id),
            name: entity.name,
        }
    }
}

impl From<DotnetRestDto> for DotnetRestCreate {
    fn from(dto: DotnetRestDto) -> Self {
        Self {
            id: dto.id.filter(|id| !id.is_empty()),
            name: dto.name,
        }
    }
}

impl From<DotnetRestDto> for DotnetRestUpdate {
    fn from(dto: DotnetRestDto) -> Self {
        Self { name: dto.name }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDotnetRestResponse {
    pub dotnet_rest: DotnetRestDto,
}

/// List parameters. Missing fields take the defaults `startPage=1`, `pageSize=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetDotnetRestsRequest {
    pub start_page: i32,
    pub page_size: i32,
}

impl Default for GetDotnetRestsRequest {
    fn default() -> Self {
        Self {
            start_page: DEFAULT_START_PAGE as i32,
            page_size: DEFAULT_PAGE_SIZE as i32,
        }
    }
}

impl GetDotnetRestsRequest {
    pub fn new(start_page: i32, page_size: i32) -> Self {
        Self {
            start_page,
            page_size,
        }
    }
}

impl From<GetDotnetRestsRequest> for PageRequest {
    fn from(request: GetDotnetRestsRequest) -> Self {
        PageRequest::new(request.start_page, request.page_size)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDotnetRestsResponse {
    pub dotnet_rests: Vec<DotnetRestDto>,
    pub has_next: bool,
    pub has_previous: bool,
    pub next_page: u32,
    pub previous_page: u32,
    pub total_pages: u32,
    pub total_elements: u64,
}

impl From<Page<DotnetRest>> for GetDotnetRestsResponse {
    fn from(page: Page<DotnetRest>) -> Self {
        Self {
            dotnet_rests: page.items.into_iter().map(DotnetRestDto::from).collect(),
            has_next: page.has_next,
            has_previous: page.has_previous,
            next_page: page.next_page,
            previous_page: page.previous_page,
            total_pages: page.total_pages,
            total_elements: page.total_elements,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDotnetRestResponse {
    pub dotnet_rest: DotnetRestDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDotnetRestResponse {
    pub dotnet_rest: DotnetRestDto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDotnetRestResponse {
    pub deleted: bool,
}

/// Body of every non-2xx HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub status: u16,
}
