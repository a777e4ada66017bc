//! # Customer Client
use crate::customer_actor::CustomerError;
use crate::model::Customer;
use actor_framework::ResourceClient;

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

crate::impl_basic_client!(CustomerClient, Customer, CustomerError, customer);
