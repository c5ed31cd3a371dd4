//! The service API, implemented both in-process ([`DotnetRestClient`](crate::clients::DotnetRestClient))
//! and over HTTP ([`DotnetRestHttpClient`](crate::clients::DotnetRestHttpClient)).

use crate::dotnet_rest_actor::DotnetRestError;
use crate::model::{
    CreateDotnetRestResponse, DeleteDotnetRestResponse, DotnetRestDto, GetDotnetRestResponse,
    GetDotnetRestsRequest, GetDotnetRestsResponse, UpdateDotnetRestResponse,
};
use async_trait::async_trait;

#[async_trait]
pub trait DotnetRestService: Send + Sync {
    /// Stores a new entry. A missing or empty `id` gets a fresh UUID; a supplied one overwrites.
    async fn create_dotnet_rest(
        &self,
        request: DotnetRestDto,
    ) -> Result<CreateDotnetRestResponse, DotnetRestError>;

    /// One page of entries in insertion order. Non-positive bounds fall back to `1` and `10`.
    async fn get_dotnet_rests(
        &self,
        request: GetDotnetRestsRequest,
    ) -> Result<GetDotnetRestsResponse, DotnetRestError>;

    async fn get_dotnet_rest(&self, id: &str) -> Result<GetDotnetRestResponse, DotnetRestError>;

    /// Replaces the entry named by `request.id`; `NotFound` if the id is empty or unknown.
    async fn update_dotnet_rest(
        &self,
        request: DotnetRestDto,
    ) -> Result<UpdateDotnetRestResponse, DotnetRestError>;

    async fn delete_dotnet_rest(
        &self,
        id: &str,
    ) -> Result<DeleteDotnetRestResponse, DotnetRestError>;
}
