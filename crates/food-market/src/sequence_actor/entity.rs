//! [`ActorEntity`] implementation for [`Sequence`].

use super::actions::{SequenceAction, SequencePatch};
use super::error::SequenceError;
use crate::model::{Sequence, SequenceKey};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Sequence {
    type Id = SequenceKey;
    type Patch = SequencePatch;
    type Action = SequenceAction;
    type ActionResult = u32;
    type Context = ();
    type Error = SequenceError;

    fn id(&self) -> SequenceKey {
        self.key.clone()
    }

    async fn on_patch(&mut self, patch: SequencePatch, _ctx: &()) -> Result<(), SequenceError> {
        match patch {}
    }

    async fn handle_action(
        &mut self,
        action: SequenceAction,
        _ctx: &(),
    ) -> Result<u32, SequenceError> {
        match action {
            SequenceAction::Increment => {
                let next = self
                    .value
                    .checked_add(1)
                    .ok_or_else(|| SequenceError::Exhausted(self.key.to_string()))?;
                self.value = next;
                Ok(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_increment_starts_at_one() {
        let mut row = Sequence::new(SequenceKey::new("counters", "order_id"));
        assert_eq!(row.handle_action(SequenceAction::Increment, &()).await, Ok(1));
        assert_eq!(row.handle_action(SequenceAction::Increment, &()).await, Ok(2));
        assert_eq!(row.value, 2);
    }

    #[tokio::test]
    async fn test_increment_refuses_to_wrap() {
        let mut row = Sequence {
            key: SequenceKey::new("counters", "menu_id"),
            value: u32::MAX,
        };
        let result = row.handle_action(SequenceAction::Increment, &()).await;
        assert_eq!(
            result,
            Err(SequenceError::Exhausted("counters/menu_id".to_string()))
        );
        assert_eq!(row.value, u32::MAX);
    }
}
