//! # DotnetRest Client
//!
//! Provides the service API on top of the resource actor.
//! It wraps a `ResourceClient<DotnetRest>` and translates between wire DTOs and the entity.
use crate::dotnet_rest_actor::DotnetRestError;
use crate::model::{
    CreateDotnetRestResponse, DeleteDotnetRestResponse, DotnetRest, DotnetRestDto,
    GetDotnetRestResponse, GetDotnetRestsRequest, GetDotnetRestsResponse,
    UpdateDotnetRestResponse,
};
use crate::service::DotnetRestService;
use async_trait::async_trait;
use resource_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the DotnetRest actor.
#[derive(Clone)]
pub struct DotnetRestClient {
    inner: ResourceClient<DotnetRest>,
}

impl DotnetRestClient {
    pub fn new(inner: ResourceClient<DotnetRest>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<DotnetRest> for DotnetRestClient {
    type Error = DotnetRestError;

    fn inner(&self) -> &ResourceClient<DotnetRest> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        DotnetRestError::from(e)
    }
}

#[async_trait]
impl DotnetRestService for DotnetRestClient {
    #[instrument(skip(self))]
    async fn create_dotnet_rest(
        &self,
        request: DotnetRestDto,
    ) -> Result<CreateDotnetRestResponse, DotnetRestError> {
        debug!("Sending request");
        let created = self.inner.create(request.into()).await?;
        Ok(CreateDotnetRestResponse {
            dotnet_rest: created.into(),
        })
    }

    #[instrument(skip(self))]
    async fn get_dotnet_rests(
        &self,
        request: GetDotnetRestsRequest,
    ) -> Result<GetDotnetRestsResponse, DotnetRestError> {
        let page = ActorClient::list(self, request.into()).await?;
        Ok(page.into())
    }

    #[instrument(skip(self))]
    async fn get_dotnet_rest(&self, id: &str) -> Result<GetDotnetRestResponse, DotnetRestError> {
        let found = ActorClient::get(self, id.to_string()).await?;
        Ok(GetDotnetRestResponse {
            dotnet_rest: found.into(),
        })
    }

    #[instrument(skip(self))]
    async fn update_dotnet_rest(
        &self,
        request: DotnetRestDto,
    ) -> Result<UpdateDotnetRestResponse, DotnetRestError> {
        debug!("Sending request");
        let Some(id) = request.id().map(str::to_string) else {
            return Err(DotnetRestError::not_found("null"));
        };
        let updated = self.inner.update(id, request.into()).await?;
        Ok(UpdateDotnetRestResponse {
            dotnet_rest: updated.into(),
        })
    }

    #[instrument(skip(self))]
    async fn delete_dotnet_rest(
        &self,
        id: &str,
    ) -> Result<DeleteDotnetRestResponse, DotnetRestError> {
        let deleted = ActorClient::delete(self, id.to_string()).await?;
        Ok(DeleteDotnetRestResponse { deleted })
    }
}
