//! [`ActorEntity`] implementation for [`DotnetRest`].

use super::DotnetRestError;
use crate::model::{DotnetRest, DotnetRestCreate, DotnetRestUpdate};
use async_trait::async_trait;
use resource_framework::ActorEntity;

impl DotnetRest {
    /// Entity kind reported in `NotFound` errors.
    pub const KIND_NAME: &'static str = "DotnetRest";
}

#[async_trait]
impl ActorEntity for DotnetRest {
    type Id = String;
    type Create = DotnetRestCreate;
    type Update = DotnetRestUpdate;
    type Context = ();
    type Error = DotnetRestError;
    const KIND: &'static str = DotnetRest::KIND_NAME;

    /// A caller-supplied, non-empty id is used as-is (upsert).
    fn requested_id(params: &DotnetRestCreate) -> Option<String> {
        params.id.clone().filter(|id| !id.is_empty())
    }

    fn from_create_params(id: String, params: DotnetRestCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: params.name,
        })
    }

    /// Full replace: every field except `id` comes from the update.
    async fn on_update(
        &mut self,
        update: DotnetRestUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        self.name = update.name;
        Ok(())
    }
}
