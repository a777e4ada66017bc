use super::error::CustomerError;
use crate::model::{Customer, CustomerId, CustomerPatch};
use actor_framework::ActorEntity;
use async_trait::async_trait;

/// Customers have no custom actions.
#[derive(Debug, Clone, Copy)]
pub enum CustomerAction {}

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Patch = CustomerPatch;
    type Action = CustomerAction;
    type ActionResult = ();
    type Context = ();
    type Error = CustomerError;

    fn id(&self) -> CustomerId {
        self.customer_id
    }

    async fn on_patch(&mut self, patch: CustomerPatch, _ctx: &()) -> Result<(), CustomerError> {
        match patch {
            CustomerPatch::Name(name) => self.name = name,
            CustomerPatch::Address(address) => self.address = address,
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CustomerAction,
        _ctx: &(),
    ) -> Result<(), CustomerError> {
        match action {}
    }
}
