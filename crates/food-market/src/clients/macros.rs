//! Boilerplate shared by the collection clients.
//!
//! Every collection client is a thin wrapper around a `ResourceClient<Entity>` whose
//! error enum has `NotFound`, `AlreadyExists` and `ActorCommunicationError` variants.

/// Generates `new`.
#[doc(hidden)]
#[macro_export]
macro_rules! impl_client_new {
    ($client_name:ident, $entity:ty) => {
        impl $client_name {
            pub fn new(inner: actor_framework::ResourceClient<$entity>) -> Self {
                Self { inner }
            }
        }
    };
}

/// Generates the [`ActorClient`](actor_framework::ActorClient) impl.
///
/// Typed entity errors boxed by the actor are recovered by downcasting; anything else
/// becomes `ActorCommunicationError`.
#[doc(hidden)]
#[macro_export]
macro_rules! impl_actor_client {
    ($client_name:ident, $entity:ty, $error:ty) => {
        #[async_trait::async_trait]
        impl actor_framework::ActorClient<$entity> for $client_name {
            type Error = $error;

            fn inner(&self) -> &actor_framework::ResourceClient<$entity> {
                &self.inner
            }

            fn map_error(e: actor_framework::FrameworkError) -> $error {
                match e {
                    actor_framework::FrameworkError::NotFound(id) => <$error>::NotFound(id),
                    actor_framework::FrameworkError::AlreadyExists(id) => {
                        <$error>::AlreadyExists(id)
                    }
                    actor_framework::FrameworkError::EntityError(inner) => {
                        match inner.downcast::<$error>() {
                            Ok(typed) => *typed,
                            Err(other) => <$error>::ActorCommunicationError(other.to_string()),
                        }
                    }
                    other => <$error>::ActorCommunicationError(other.to_string()),
                }
            }
        }
    };
}

/// Generates `update_<entity>` on top of the actor's patch request.
#[doc(hidden)]
#[macro_export]
macro_rules! impl_client_methods {
    ($client_name:ident, $entity:ty, $error:ty, $entity_name_snake:ident) => {
        paste::paste! {
            impl $client_name {
                /// Applies one typed patch and returns the stored result.
                #[tracing::instrument(skip(self))]
                pub async fn [<update_ $entity_name_snake>](
                    &self,
                    id: <$entity as actor_framework::ActorEntity>::Id,
                    patch: <$entity as actor_framework::ActorEntity>::Patch,
                ) -> Result<$entity, $error> {
                    tracing::debug!("Sending request");
                    self.inner
                        .patch(id, patch)
                        .await
                        .map_err(<Self as actor_framework::ActorClient<$entity>>::map_error)
                }
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! impl_basic_client {
    ($client_name:ident, $entity:ty, $error:ty, $entity_name_snake:ident) => {
        $crate::impl_client_new!($client_name, $entity);
        $crate::impl_actor_client!($client_name, $entity, $error);
        $crate::impl_client_methods!($client_name, $entity, $error, $entity_name_snake);
    };
}
